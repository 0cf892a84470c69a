//! Control Panel
//!
//! Size, element, pressed and loading switches for the preview button,
//! built from buttons themselves.

use std::time::Duration;

use buttonkit_core::{ButtonSize, ButtonTag};
use buttonkit_ui::Button;
use dioxus::prelude::*;

use crate::context::{get_gallery_config, use_preview};

#[component]
pub fn ControlPanel() -> Element {
    let preview = use_preview();
    let loading_ms = get_gallery_config().loading_ms;

    let mut size = preview.size;
    let mut tag = preview.tag;
    let mut pressed = preview.pressed;
    let mut loading = preview.loading;

    let start_loading = move |_: MouseEvent| {
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(loading_ms)).await;
            loading.set(false);
            tracing::debug!(loading_ms, "demo loading finished");
        });
    };

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "controls" }

            div { class: "section-row",
                for option in ButtonSize::ALL {
                    Button {
                        key: "{option}",
                        size: ButtonSize::XSmall,
                        pressed: size() == option,
                        onclick: move |_| size.set(option),
                        "{option}"
                    }
                }
            }

            div { class: "section-row",
                Button {
                    size: ButtonSize::XSmall,
                    pressed: tag() == ButtonTag::Button,
                    onclick: move |_| tag.set(ButtonTag::Button),
                    "<button>"
                }
                Button {
                    size: ButtonSize::XSmall,
                    pressed: tag() == ButtonTag::Anchor,
                    onclick: move |_| tag.set(ButtonTag::Anchor),
                    "<a>"
                }
                Button {
                    size: ButtonSize::XSmall,
                    pressed: pressed(),
                    onclick: move |_| {
                        let next = !pressed();
                        pressed.set(next);
                    },
                    "pressed"
                }
                Button {
                    size: ButtonSize::XSmall,
                    loading: loading(),
                    onclick: start_loading,
                    "trigger loading"
                }
            }
        }
    }
}
