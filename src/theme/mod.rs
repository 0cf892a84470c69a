//! Gallery page styling.

mod styles;

pub use styles::GALLERY_STYLES;
