//! Formatting of recorded channels for the state panel and the headless summary.

mod channels;
mod readout;

pub use channels::{Channel, ChannelGroup};
pub use readout::{
    format_value, panel_text, readouts, summarize, ChannelSummary, FlightSummary, Readout,
};
