//! Loader Component
//!
//! Spinning ring used as the button's loading overlay.

use buttonkit_core::{classes, LOADER_TEST_ID};
use dioxus::prelude::*;

/// Class attribute of the loader root
pub fn loader_class(extra: Option<&str>) -> String {
    classes!("loader", extra).to_string()
}

/// Loading spinner
///
/// The button renders it with [`LOADER_CLASSES`](buttonkit_core::LOADER_CLASSES),
/// which keep it hidden until the stylesheet's `aria-busy` rule shows it.
#[component]
pub fn Loader(
    /// Additional CSS classes
    #[props(default)]
    class: Option<String>,
    /// `data-testid` attribute
    #[props(default = LOADER_TEST_ID.to_string())]
    test_id: String,
) -> Element {
    let class = loader_class(class.as_deref());

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "aria-label": "Loading",
            "data-testid": "{test_id}",
            svg {
                class: "loader-ring",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
            }
        }
    }
}
