pub mod controls;
pub mod keyboard;

pub use controls::{wire_controls, Controls};
pub use keyboard::wire_global_keydown;
