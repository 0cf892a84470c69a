use dioxus::prelude::*;

use buttonkit_ui::STYLES;

use crate::components::{ControlPanel, LinkGallery, Preview, ShapeGallery, SizeGallery};
use crate::context::{get_gallery_config, PreviewState};
use crate::theme::GALLERY_STYLES;

/// Root application component.
///
/// Provides the component stylesheet, gallery styles and preview state.
#[component]
pub fn App() -> Element {
    let config = get_gallery_config();
    let preview = PreviewState::new(&config);
    use_context_provider(|| preview);

    let clicks = preview.clicks;

    rsx! {
        style { {STYLES} }
        style { {GALLERY_STYLES} }
        main { class: "gallery",
            header { class: "gallery-header",
                h1 { class: "gallery-title", "buttonkit" }
                p { class: "gallery-subtitle",
                    "one button, two elements, six sizes"
                }
                span { class: "click-count", "clicks: {clicks}" }
            }

            ControlPanel {}
            Preview { config: config.clone() }
            SizeGallery {}
            ShapeGallery {}
            LinkGallery { href: config.href.clone() }
        }
    }
}
