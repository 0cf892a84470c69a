//! Click handling per element kind.
//!
//! A control forwards the caller's handler untouched. A link keeps its
//! native navigation and additionally routes two kinds of activation to the
//! handler: primary clicks (plain or with ctrl/meta/shift/alt, which the
//! browser turns into "open in new tab/window") and middle clicks, which
//! never produce a `click` event and are picked up from `mouseup` instead.
//! Neither path prevents the default navigation.

use crate::tag::{AnchorAttributes, ButtonAttributes, ButtonTag, TagAttributes};

/// Physical button that triggered a pointer event
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
    Primary,
    /// Wheel / auxiliary button
    Middle,
    Secondary,
    Other,
}

/// Modifier keys held during a pointer event
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ModifierKeys {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ModifierKeys {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::default()
        }
    }

    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

/// Framework-independent view of a pointer event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PointerState {
    /// `None` when the event carries no button, e.g. a keyboard-triggered click
    pub button: Option<PointerButton>,
    pub modifiers: ModifierKeys,
}

impl PointerState {
    pub fn primary() -> Self {
        Self {
            button: Some(PointerButton::Primary),
            modifiers: ModifierKeys::default(),
        }
    }

    pub fn middle() -> Self {
        Self {
            button: Some(PointerButton::Middle),
            modifiers: ModifierKeys::default(),
        }
    }

    pub fn secondary() -> Self {
        Self {
            button: Some(PointerButton::Secondary),
            modifiers: ModifierKeys::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierKeys) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Listener an event arrived on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickSource {
    Click,
    MouseUp,
}

/// How the caller's click handler is attached
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickStrategy {
    /// Handler goes on `click` as is
    Passthrough,
    /// Handler goes on `click` and `mouseup`, filtered by [`CombinedClicks`]
    Combined,
}

impl ClickStrategy {
    pub fn for_tag(tag: ButtonTag) -> Self {
        match tag {
            ButtonTag::Button => ClickStrategy::Passthrough,
            ButtonTag::Anchor => ClickStrategy::Combined,
        }
    }
}

/// Click handler wrapper for links.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CombinedClicks<H> {
    handler: Option<H>,
}

impl<H> CombinedClicks<H> {
    pub fn new(handler: Option<H>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Whether an event on `source` should activate the handler.
    ///
    /// Each physical click activates at most once: primary clicks only on
    /// `click`, middle clicks only on `mouseup`.
    pub fn activates(source: ClickSource, pointer: &PointerState) -> bool {
        match (source, pointer.button) {
            (ClickSource::Click, None | Some(PointerButton::Primary)) => true,
            (ClickSource::MouseUp, Some(PointerButton::Middle)) => true,
            _ => false,
        }
    }

    /// The handler to invoke for this event, if any.
    pub fn handler_for(&self, source: ClickSource, pointer: &PointerState) -> Option<&H> {
        let handler = self.handler.as_ref()?;
        if Self::activates(source, pointer) {
            tracing::debug!(
                ?source,
                button = ?pointer.button,
                modifiers = pointer.modifiers.any(),
                "link click activated"
            );
            Some(handler)
        } else {
            tracing::trace!(?source, button = ?pointer.button, "link event ignored");
            None
        }
    }
}

/// Click handler attached according to the element kind.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ClickBinding<H> {
    Direct(Option<H>),
    Combined(CombinedClicks<H>),
}

impl<H> ClickBinding<H> {
    /// The handler to invoke for this event, if any.
    ///
    /// A direct binding only listens on `click` and does not look at the
    /// pointer; the browser already decided it was a click.
    pub fn handler_for(&self, source: ClickSource, pointer: &PointerState) -> Option<&H> {
        match self {
            ClickBinding::Direct(handler) => match source {
                ClickSource::Click => handler.as_ref(),
                ClickSource::MouseUp => None,
            },
            ClickBinding::Combined(clicks) => clicks.handler_for(source, pointer),
        }
    }
}

/// Attach `handler` the way `tag` requires.
pub fn bind_clicks<H>(tag: ButtonTag, handler: Option<H>) -> ClickBinding<H> {
    match ClickStrategy::for_tag(tag) {
        ClickStrategy::Passthrough => ClickBinding::Direct(handler),
        ClickStrategy::Combined => ClickBinding::Combined(CombinedClicks::new(handler)),
    }
}

/// Element attributes paired with their click binding.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundElement<H> {
    Button {
        attributes: ButtonAttributes,
        onclick: Option<H>,
    },
    Anchor {
        attributes: AnchorAttributes,
        clicks: CombinedClicks<H>,
    },
}

impl<H> BoundElement<H> {
    pub fn tag(&self) -> ButtonTag {
        match self {
            BoundElement::Button { .. } => ButtonTag::Button,
            BoundElement::Anchor { .. } => ButtonTag::Anchor,
        }
    }
}

impl TagAttributes {
    /// Pair these attributes with `handler`, bound per [`bind_clicks`].
    pub fn bind<H>(self, handler: Option<H>) -> BoundElement<H> {
        match self {
            TagAttributes::Button(attributes) => BoundElement::Button {
                attributes,
                onclick: handler,
            },
            TagAttributes::Anchor(attributes) => BoundElement::Anchor {
                attributes,
                clicks: CombinedClicks::new(handler),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Handler = Rc<dyn Fn()>;

    fn counting_handler() -> (Handler, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        (Rc::new(move || counter.set(counter.get() + 1)), count)
    }

    /// Feed one physical click's events through a binding.
    fn dispatch(binding: &ClickBinding<Handler>, events: &[(ClickSource, PointerState)]) {
        for (source, pointer) in events {
            if let Some(handler) = binding.handler_for(*source, pointer) {
                handler();
            }
        }
    }

    fn middle_click() -> Vec<(ClickSource, PointerState)> {
        // browsers fire no `click` for the middle button
        vec![(ClickSource::MouseUp, PointerState::middle())]
    }

    fn primary_click(modifiers: ModifierKeys) -> Vec<(ClickSource, PointerState)> {
        let pointer = PointerState::primary().with_modifiers(modifiers);
        vec![(ClickSource::MouseUp, pointer), (ClickSource::Click, pointer)]
    }

    #[test]
    fn strategy_follows_tag() {
        assert_eq!(ClickStrategy::for_tag(ButtonTag::Button), ClickStrategy::Passthrough);
        assert_eq!(ClickStrategy::for_tag(ButtonTag::Anchor), ClickStrategy::Combined);
    }

    #[test]
    fn control_passes_same_handler_through() {
        let (handler, _) = counting_handler();
        match bind_clicks(ButtonTag::Button, Some(Rc::clone(&handler))) {
            ClickBinding::Direct(Some(bound)) => assert!(Rc::ptr_eq(&bound, &handler)),
            ClickBinding::Direct(None) => panic!("handler was dropped"),
            ClickBinding::Combined(_) => panic!("expected a direct binding"),
        }
    }

    #[test]
    fn link_middle_click_fires_once() {
        let (handler, count) = counting_handler();
        let binding = bind_clicks(ButtonTag::Anchor, Some(handler));
        dispatch(&binding, &middle_click());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn link_modifier_click_fires_once() {
        let (handler, count) = counting_handler();
        let binding = bind_clicks(ButtonTag::Anchor, Some(handler));
        dispatch(&binding, &primary_click(ModifierKeys::ctrl()));
        dispatch(&binding, &primary_click(ModifierKeys::meta()));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn link_plain_click_fires_once() {
        let (handler, count) = counting_handler();
        let binding = bind_clicks(ButtonTag::Anchor, Some(handler));
        dispatch(&binding, &primary_click(ModifierKeys::default()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn link_ignores_secondary_button() {
        let (handler, count) = counting_handler();
        let binding = bind_clicks(ButtonTag::Anchor, Some(handler));
        dispatch(
            &binding,
            &[
                (ClickSource::MouseUp, PointerState::secondary()),
                (ClickSource::Click, PointerState::secondary()),
            ],
        );
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn keyboard_click_without_button_activates_link() {
        assert!(CombinedClicks::<()>::activates(
            ClickSource::Click,
            &PointerState::default()
        ));
        assert!(!CombinedClicks::<()>::activates(
            ClickSource::MouseUp,
            &PointerState::default()
        ));
    }

    #[test]
    fn control_ignores_mouseup() {
        let (handler, count) = counting_handler();
        let binding = bind_clicks(ButtonTag::Button, Some(handler));
        dispatch(&binding, &middle_click());
        assert_eq!(count.get(), 0);
        dispatch(&binding, &primary_click(ModifierKeys::default()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn missing_handler_is_a_no_op() {
        for tag in [ButtonTag::Button, ButtonTag::Anchor] {
            let binding = bind_clicks::<Handler>(tag, None);
            assert!(binding
                .handler_for(ClickSource::Click, &PointerState::primary())
                .is_none());
            assert!(binding
                .handler_for(ClickSource::MouseUp, &PointerState::middle())
                .is_none());
        }
    }

    #[test]
    fn bind_agrees_with_bind_clicks() {
        let link = TagAttributes::link("/bookmarks").bind(Some(1u8));
        assert_eq!(link.tag(), ButtonTag::Anchor);
        assert!(matches!(link, BoundElement::Anchor { clicks, .. } if clicks.handler() == Some(&1)));

        let control = TagAttributes::default().bind(Some(2u8));
        assert_eq!(
            control,
            BoundElement::Button {
                attributes: ButtonAttributes::default(),
                onclick: Some(2),
            }
        );
    }
}
