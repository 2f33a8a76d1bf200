pub mod components;
pub mod constants;
pub mod lap_system;
pub mod physics;
pub mod track;

pub use components::*;
pub use constants::*;
pub use lap_system::*;
pub use physics::*;
pub use track::*;
