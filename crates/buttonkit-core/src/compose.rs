//! Button composition: render state, ARIA attributes, class string and
//! child order for one render.
//!
//! ## Class order
//!
//! ```text
//! {iconOnly, readOnly} size BASE_CLASSES text-position display position caller-class
//! ```
//!
//! Later groups override earlier ones through [`ClassList::merge`], so the
//! caller's class always has the final say.
//!
//! [`ClassList::merge`]: crate::classes::ClassList::merge

use crate::classes;
use crate::size::ButtonSize;
use crate::tag::{resolve_tag, ButtonTag};

/// Layout, typography, cursor and focus ring shared by every button
pub const BASE_CLASSES: &str = "btn flex-row items-center border typo-callout font-bold no-underline shadow-none cursor-pointer select-none focus-outline";

/// Loader overlay, hidden until the stylesheet reveals it on `aria-busy`
pub const LOADER_CLASSES: &str = "hidden absolute top-0 right-0 bottom-0 left-0 m-auto btn-loader";

/// `data-testid` of the loader overlay
pub const LOADER_TEST_ID: &str = "buttonLoader";

/// Defaults for the overridable layout tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonDefaults {
    pub text_position: String,
    pub display_class: String,
    pub position: String,
}

impl Default for ButtonDefaults {
    fn default() -> Self {
        Self {
            text_position: "justify-center".to_string(),
            display_class: "flex".to_string(),
            position: "relative".to_string(),
        }
    }
}

/// Everything composition needs to know about a button's props.
///
/// Content is described by presence only; the values themselves stay with
/// the UI layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonSpec {
    pub size: ButtonSize,
    pub tag: Option<ButtonTag>,
    pub has_icon: bool,
    pub has_children: bool,
    pub has_right_icon: bool,
    /// Forces icon-only mode when `Some(true)`. `Some(false)` cannot turn
    /// off the automatic inference for an icon without label.
    pub icon_only: Option<bool>,
    pub read_only: bool,
    pub loading: Option<bool>,
    pub pressed: Option<bool>,
    pub class_name: Option<String>,
    pub text_position: Option<String>,
    /// Empty string falls back to the default, like an unset value
    pub display_class: Option<String>,
    pub position: Option<String>,
}

/// State derived from props, recomputed every render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    pub icon_only: bool,
    pub read_only: bool,
    pub loading: Option<bool>,
    pub pressed: Option<bool>,
}

impl RenderState {
    pub fn derive(spec: &ButtonSpec) -> Self {
        let inferred = spec.has_icon && !spec.has_children && !spec.has_right_icon;
        Self {
            icon_only: inferred || spec.icon_only.unwrap_or(false),
            read_only: spec.read_only,
            loading: spec.loading,
            pressed: spec.pressed,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.unwrap_or(false)
    }
}

/// ARIA state attributes, passed through without coercion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    pub busy: Option<bool>,
    pub pressed: Option<bool>,
}

impl AriaAttributes {
    /// `aria-busy` value; `None` omits the attribute
    pub fn busy_value(&self) -> Option<&'static str> {
        self.busy.map(aria_bool)
    }

    /// `aria-pressed` value; `None` omits the attribute
    pub fn pressed_value(&self) -> Option<&'static str> {
        self.pressed.map(aria_bool)
    }
}

fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// One position in the button's children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildSlot {
    LeadingIcon,
    Label,
    TrailingIcon,
    Loader,
}

/// Result of composing one render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composition {
    pub tag: ButtonTag,
    pub state: RenderState,
    pub class_name: String,
    pub aria: AriaAttributes,
    /// Slots to render, in order
    pub children: Vec<ChildSlot>,
}

impl Composition {
    pub fn has_loader(&self) -> bool {
        self.children.contains(&ChildSlot::Loader)
    }
}

/// Compose with the stock [`ButtonDefaults`].
pub fn compose(spec: &ButtonSpec) -> Composition {
    compose_with(spec, &ButtonDefaults::default())
}

/// Compose a render from `spec`, filling unset layout tokens from `defaults`.
pub fn compose_with(spec: &ButtonSpec, defaults: &ButtonDefaults) -> Composition {
    let state = RenderState::derive(spec);

    let text_position = spec
        .text_position
        .as_deref()
        .unwrap_or(defaults.text_position.as_str());
    let display_class = spec
        .display_class
        .as_deref()
        .filter(|class| !class.is_empty())
        .unwrap_or(defaults.display_class.as_str());
    let position = spec
        .position
        .as_deref()
        .unwrap_or(defaults.position.as_str());

    let class_name = classes!(
        ("iconOnly", state.icon_only),
        ("readOnly", state.read_only),
        spec.size.class(),
        BASE_CLASSES,
        text_position,
        display_class,
        position,
        spec.class_name.as_deref(),
    )
    .merge()
    .to_string();

    let mut children = Vec::with_capacity(4);
    if spec.has_icon {
        children.push(ChildSlot::LeadingIcon);
    }
    if spec.has_children {
        children.push(ChildSlot::Label);
    }
    if spec.has_right_icon {
        children.push(ChildSlot::TrailingIcon);
    }
    if state.is_loading() {
        children.push(ChildSlot::Loader);
    }

    let composition = Composition {
        tag: resolve_tag(spec.tag),
        state,
        class_name,
        aria: AriaAttributes {
            busy: spec.loading,
            pressed: spec.pressed,
        },
        children,
    };

    tracing::trace!(
        tag = %composition.tag,
        size = %spec.size,
        icon_only = state.icon_only,
        loading = state.is_loading(),
        "composed button"
    );

    composition
}
