//! Gallery sections.

mod controls;
mod gallery;

pub use controls::ControlPanel;
pub use gallery::{LinkGallery, Preview, ShapeGallery, SizeGallery};
