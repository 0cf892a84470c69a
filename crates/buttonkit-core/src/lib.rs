//! buttonkit core
//!
//! Render-independent logic behind the buttonkit `Button`: one primitive
//! that renders as a control (`<button>`) or a link (`<a>`), with optional
//! leading and trailing icons, a loading overlay and six sizes.
//!
//! ## Overview
//!
//! - [`tag`]: element kind resolution and the native attributes per kind
//! - [`size`]: button sizes and the button-to-icon size table
//! - [`click`]: click strategy per kind (passthrough vs combined clicks)
//! - [`compose`]: render state, ARIA attributes, class string, child order
//! - [`classes`]: class list building with later-wins conflict resolution
//!
//! Nothing here depends on a UI framework; `buttonkit-ui` feeds Dioxus
//! events and props through these types.
//!
//! ## Quick Start
//!
//! ```
//! use buttonkit_core::{compose, ButtonSize, ButtonSpec, ChildSlot};
//!
//! let composition = compose(&ButtonSpec {
//!     size: ButtonSize::Small,
//!     has_icon: true,
//!     ..ButtonSpec::default()
//! });
//!
//! assert!(composition.state.icon_only);
//! assert!(composition.class_name.starts_with("iconOnly small"));
//! assert_eq!(composition.children, vec![ChildSlot::LeadingIcon]);
//! ```

pub mod classes;
pub mod click;
pub mod compose;
pub mod error;
pub mod size;
pub mod tag;

pub use classes::{ClassList, IntoClass};
pub use click::{
    bind_clicks, BoundElement, ClickBinding, ClickSource, ClickStrategy, CombinedClicks,
    ModifierKeys, PointerButton, PointerState,
};
pub use compose::{
    compose, compose_with, AriaAttributes, ButtonDefaults, ButtonSpec, ChildSlot, Composition,
    RenderState, BASE_CLASSES, LOADER_CLASSES, LOADER_TEST_ID,
};
pub use error::{ButtonKitError, Result};
pub use size::{icon_size, size_icon, ButtonSize, IconElement, IconSize, ICON_CLASS};
pub use tag::{
    resolve_tag, AnchorAttributes, AnchorKind, ButtonAttributes, ButtonKind, ButtonTag,
    ButtonType, MountedElement, TagAttributes, TagKind,
};
