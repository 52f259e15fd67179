pub mod camera;
pub mod geometry;
pub mod ui;

pub use camera::{look_direction, FlyCamera, PITCH_LIMIT};
pub use geometry::{ColoredVertex, GeometryBuffer, SceneGeometry, Topology};
pub use ui::{GroundPlane, ReadoutText, StatusText, TimelineBar, TimelineFill};
