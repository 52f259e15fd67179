pub mod components;
pub mod display;
pub mod plugins;
pub mod resources;
pub mod systems;
