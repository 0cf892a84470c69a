//! Button Component
//!
//! One primitive for every clickable thing in the kit. It renders as a
//! control (`<button>`) by default, or as a link (`<a>`) when given
//! [`TagAttributes::Anchor`]:
//!
//! - **Control**: the click handler is attached to `click` as is
//! - **Link**: native navigation is kept; the handler additionally fires
//!   for modifier-clicks and middle clicks (see `buttonkit_core::click`)
//!
//! Sizing, class composition and icon-only inference live in
//! `buttonkit_core::compose`; this file only maps the result onto Dioxus.

use std::rc::Rc;

use buttonkit_core::{
    compose, size_icon, BoundElement, ButtonSize, ButtonSpec, ChildSlot, ClickSource,
    ModifierKeys, MountedElement, PointerButton, PointerState, TagAttributes, LOADER_CLASSES,
    LOADER_TEST_ID,
};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use super::icon::{Icon, IconSpec};
use super::loader::Loader;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Size variant; icons are drawn one step larger on the icon scale
    #[props(default)]
    pub size: ButtonSize,
    /// Sets `aria-busy` and shows the loader overlay when `Some(true)`
    #[props(default)]
    pub loading: Option<bool>,
    /// Sets `aria-pressed`; omitted when unset
    #[props(default)]
    pub pressed: Option<bool>,
    /// Element kind and its native attributes; a `<button>` when unset
    #[props(default)]
    pub tag: Option<TagAttributes>,
    /// Leading icon
    #[props(default)]
    pub icon: Option<IconSpec>,
    /// Trailing icon
    #[props(default)]
    pub right_icon: Option<IconSpec>,
    /// Label content, wrapped in a `<span>`
    #[props(default)]
    pub children: Option<Element>,
    /// Additional CSS classes, applied last so they win over built-ins
    #[props(default)]
    pub class: Option<String>,
    /// Justify token, `justify-center` when unset
    #[props(default)]
    pub text_position: Option<String>,
    /// Display token, `flex` when unset or empty
    #[props(default)]
    pub display_class: Option<String>,
    /// Position token, `relative` when unset
    #[props(default)]
    pub position_class: Option<String>,
    /// Forces icon-only styling. An icon with no label and no trailing
    /// icon is icon-only regardless of this flag.
    #[props(default)]
    pub icon_only: Option<bool>,
    /// Adds the `readOnly` class
    #[props(default)]
    pub read_only: Option<bool>,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Receives a handle to the rendered element, tagged with its kind
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedElement<Rc<MountedData>>>>,
    /// Native attributes (`id`, `style`, `role`, `aria-*`, ...) spread onto
    /// the rendered element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

impl ButtonProps {
    /// What composition needs to know about these props
    pub fn spec(&self) -> ButtonSpec {
        ButtonSpec {
            size: self.size,
            tag: self.tag.as_ref().map(TagAttributes::tag),
            has_icon: self.icon.is_some(),
            has_children: self.children.is_some(),
            has_right_icon: self.right_icon.is_some(),
            icon_only: self.icon_only,
            read_only: self.read_only.unwrap_or(false),
            loading: self.loading,
            pressed: self.pressed,
            class_name: self.class.clone(),
            text_position: self.text_position.clone(),
            display_class: self.display_class.clone(),
            position: self.position_class.clone(),
        }
    }
}

/// Framework-independent view of a Dioxus mouse event
pub fn pointer_state(evt: &MouseEvent) -> PointerState {
    let modifiers = evt.modifiers();
    PointerState {
        button: evt.trigger_button().map(pointer_button),
        modifiers: ModifierKeys {
            ctrl: modifiers.ctrl(),
            meta: modifiers.meta(),
            shift: modifiers.shift(),
            alt: modifiers.alt(),
        },
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Primary => PointerButton::Primary,
        MouseButton::Auxiliary => PointerButton::Middle,
        MouseButton::Secondary => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// Listener for the control arm: the caller's handler itself, or a no-op
fn control_listener(onclick: Option<EventHandler<MouseEvent>>) -> EventHandler<MouseEvent> {
    onclick.unwrap_or_else(|| EventHandler::new(|_: MouseEvent| {}))
}

/// Resolved content for each child slot
struct SlotContent {
    icon: Option<IconSpec>,
    label: Option<Element>,
    right_icon: Option<IconSpec>,
}

fn render_slot(slot: ChildSlot, content: &SlotContent) -> Element {
    match slot {
        ChildSlot::LeadingIcon => match &content.icon {
            Some(icon) => rsx! { Icon { spec: icon.clone() } },
            None => rsx! {},
        },
        ChildSlot::Label => match &content.label {
            Some(label) => rsx! { span { {label.clone()} } },
            None => rsx! {},
        },
        ChildSlot::TrailingIcon => match &content.right_icon {
            Some(icon) => rsx! { Icon { spec: icon.clone() } },
            None => rsx! {},
        },
        ChildSlot::Loader => rsx! {
            Loader {
                class: LOADER_CLASSES.to_string(),
                test_id: LOADER_TEST_ID.to_string(),
            }
        },
    }
}

/// Polymorphic button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         size: ButtonSize::Small,
///         icon: IconSpec::new(IconGlyph::Plus),
///         onclick: move |_| add_post(),
///         "New post"
///     }
///
///     Button {
///         tag: TagAttributes::link("https://example.com"),
///         right_icon: IconSpec::new(IconGlyph::ExternalLink),
///         onclick: move |_| track_outbound(),
///         "Read more"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let composition = compose(&props.spec());
    let icon_only = composition.state.icon_only;

    let content = SlotContent {
        icon: props
            .icon
            .as_ref()
            .map(|icon| size_icon(icon, props.size, icon_only)),
        label: props.children.clone(),
        right_icon: props
            .right_icon
            .as_ref()
            .map(|icon| size_icon(icon, props.size, icon_only)),
    };
    let slots = composition
        .children
        .iter()
        .map(|slot| render_slot(*slot, &content));

    let class = composition.class_name.clone();
    let busy = composition.aria.busy_value();
    let pressed = composition.aria.pressed_value();
    let extra = props.attributes.clone();

    let bound = TagAttributes::resolve(props.tag.clone()).bind(props.onclick);
    let tag = bound.tag();

    let onmounted = props.onmounted;
    let mounted = move |evt: MountedEvent| {
        if let Some(handler) = &onmounted {
            handler.call(MountedElement::new(tag, evt.data()));
        }
    };

    match bound {
        BoundElement::Button { attributes, onclick } => rsx! {
            button {
                class: "{class}",
                r#type: attributes.r#type.as_str(),
                disabled: attributes.disabled,
                name: attributes.name,
                value: attributes.value,
                form: attributes.form,
                "aria-busy": busy,
                "aria-pressed": pressed,
                onclick: control_listener(onclick),
                onmounted: mounted,
                ..extra,
                {slots}
            }
        },
        BoundElement::Anchor { attributes, clicks } => rsx! {
            a {
                class: "{class}",
                href: attributes.href,
                target: attributes.target,
                rel: attributes.rel,
                download: attributes.download,
                "aria-busy": busy,
                "aria-pressed": pressed,
                onclick: move |evt| {
                    let pointer = pointer_state(&evt);
                    if let Some(handler) = clicks.handler_for(ClickSource::Click, &pointer) {
                        handler.call(evt);
                    }
                },
                onmouseup: move |evt| {
                    let pointer = pointer_state(&evt);
                    if let Some(handler) = clicks.handler_for(ClickSource::MouseUp, &pointer) {
                        handler.call(evt);
                    }
                },
                onmounted: mounted,
                ..extra,
                {slots}
            }
        },
    }
}
