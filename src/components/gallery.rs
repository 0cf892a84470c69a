//! Gallery Sections
//!
//! Fixed showcases of every size, every content shape and the link
//! variant, plus the configurable preview.

use std::rc::Rc;

use buttonkit_ui::{
    AnchorAttributes, AnchorKind, Button, ButtonAttributes, ButtonKind, ButtonSize, ButtonTag,
    IconGlyph, IconSpec, MountedElement, TagAttributes,
};
use dioxus::prelude::*;

use crate::config::GalleryConfig;
use crate::context::use_preview;

/// Attributes for the preview in its current element kind
fn preview_attributes(tag: ButtonTag, href: &str) -> TagAttributes {
    match tag {
        ButtonTag::Button => TagAttributes::for_tag(tag),
        ButtonTag::Anchor => AnchorAttributes::new(href).new_tab().into(),
    }
}

/// The button driven by the control panel
#[component]
pub fn Preview(config: GalleryConfig) -> Element {
    let preview = use_preview();
    let mut clicks = preview.clicks;
    let tag = (preview.tag)();

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "preview" }
            div { class: "preview-stage",
                Button {
                    size: (preview.size)(),
                    tag: preview_attributes(tag, &config.href),
                    loading: (preview.loading)(),
                    pressed: (preview.pressed)(),
                    icon: IconSpec::new(IconGlyph::Bookmark),
                    class: config.class.clone().unwrap_or_default(),
                    onclick: move |_| clicks += 1,
                    onmounted: move |element: MountedElement<Rc<MountedData>>| {
                        tracing::debug!(tag = %element.tag(), "preview mounted");
                    },
                    "{config.label}"
                }
            }
        }
    }
}

/// One row per size: labelled and icon-only
#[component]
pub fn SizeGallery() -> Element {
    let mut clicks = use_preview().clicks;

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "sizes" }
            div { class: "section-row",
                for size in ButtonSize::ALL {
                    Button {
                        key: "labelled-{size}",
                        size: size,
                        icon: IconSpec::new(IconGlyph::Plus),
                        onclick: move |_| clicks += 1,
                        "{size}"
                    }
                }
            }
            div { class: "section-row",
                for size in ButtonSize::ALL {
                    Button {
                        key: "icon-{size}",
                        size: size,
                        icon: IconSpec::new(IconGlyph::Plus),
                        aria_label: format!("add ({size})"),
                        onclick: move |_| clicks += 1,
                    }
                }
            }
        }
    }
}

/// Content shapes and layout overrides
#[component]
pub fn ShapeGallery() -> Element {
    let mut clicks = use_preview().clicks;

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "shapes" }
            div { class: "section-row",
                Button {
                    icon: IconSpec::new(IconGlyph::Menu),
                    aria_label: "menu".to_string(),
                    onclick: move |_| clicks += 1,
                }
                Button {
                    icon: IconSpec::new(IconGlyph::Check),
                    onclick: move |_| clicks += 1,
                    "icon + label"
                }
                Button {
                    right_icon: IconSpec::new(IconGlyph::ChevronDown),
                    onclick: move |_| clicks += 1,
                    "label + trailing"
                }
                Button {
                    right_icon: IconSpec::new(IconGlyph::ChevronDown),
                    aria_label: "expand".to_string(),
                    onclick: move |_| clicks += 1,
                }
                Button {
                    icon: IconSpec::new(IconGlyph::Trash).with_class("text-danger"),
                    right_icon: IconSpec::new(IconGlyph::ArrowRight),
                    class: "btn-danger".to_string(),
                    onclick: move |_| clicks += 1,
                    "both icons"
                }
            }
            div { class: "section-row",
                Button {
                    icon_only: true,
                    icon: IconSpec::new(IconGlyph::Bookmark),
                    onclick: move |_| clicks += 1,
                    "forced icon-only"
                }
                Button { read_only: true, "read only" }
                Button {
                    tag: TagAttributes::of::<ButtonKind>(ButtonAttributes::default().disabled(true)),
                    "disabled"
                }
                Button {
                    text_position: "justify-start".to_string(),
                    display_class: "inline-flex".to_string(),
                    position_class: "static".to_string(),
                    class: "btn-primary".to_string(),
                    style: "min-width: 10rem",
                    onclick: move |_| clicks += 1,
                    "inline, start"
                }
                Button { loading: true, "loading" }
            }
            p { class: "section-note",
                "a trailing icon alone is not icon-only; only a leading icon triggers it"
            }
        }
    }
}

/// Link variant: middle-click and modifier-click reach the handler too
#[component]
pub fn LinkGallery(href: String) -> Element {
    let mut clicks = use_preview().clicks;
    let link = AnchorAttributes::new(href.clone()).new_tab();

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "links" }
            div { class: "section-row",
                Button {
                    tag: TagAttributes::of::<AnchorKind>(link.clone()),
                    right_icon: IconSpec::new(IconGlyph::ExternalLink),
                    title: "Opens in a new tab",
                    onclick: move |_| clicks += 1,
                    onmounted: move |element: MountedElement<Rc<MountedData>>| {
                        if element.of_kind::<AnchorKind>().is_some() {
                            tracing::debug!("link button mounted");
                        }
                    },
                    "open {href}"
                }
                Button {
                    tag: TagAttributes::from(link),
                    icon: IconSpec::new(IconGlyph::ExternalLink),
                    aria_label: "open in new tab".to_string(),
                    onclick: move |_| clicks += 1,
                }
                Button {
                    tag: TagAttributes::link("#links"),
                    size: ButtonSize::Small,
                    display_class: "inline-flex".to_string(),
                    "no handler"
                }
            }
            p { class: "section-note",
                "middle-click or ctrl/cmd-click a link: the counter moves once and the link still opens"
            }
        }
    }
}
