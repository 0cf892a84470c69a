//! buttonkit UI Components
//!
//! Dioxus components built on `buttonkit-core`:
//!
//! - [`Button`]: one primitive rendering as `<button>` or `<a>`, with
//!   leading/trailing icons, six sizes and a loading overlay
//! - [`Icon`]: inline SVG icon on the icon size scale
//! - [`Loader`]: spinner used as the button's loading overlay
//!
//! Include [`STYLES`] once near the root of the app so the class tokens the
//! button emits (sizes, `iconOnly`, `readOnly`, the loader reveal) take
//! effect.

pub mod components;

pub use components::*;

/// Core types re-exported for component callers.
pub use buttonkit_core::{
    AnchorAttributes, AnchorKind, ButtonAttributes, ButtonKind, ButtonSize, ButtonTag, ButtonType,
    IconSize, MountedElement, TagAttributes, TagKind,
};
