//! Components and the stylesheet that gives their class tokens meaning.

mod button;
mod icon;
mod loader;
mod styles;

pub use button::*;
pub use icon::*;
pub use loader::*;
pub use styles::STYLES;
