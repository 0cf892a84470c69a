//! Shared gallery state.
//!
//! The preview's size, element, loading and pressed state live in signals
//! provided at the root, so the control panel and the preview can both
//! reach them.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| PreviewState::new(&config));
//!
//! // In child components
//! let preview = use_preview();
//! ```

use buttonkit_core::{ButtonSize, ButtonTag};
use dioxus::prelude::*;

use crate::config::GalleryConfig;

/// Get the gallery configuration.
pub fn get_gallery_config() -> GalleryConfig {
    crate::gallery_config()
}

/// Signals driving the preview button.
#[derive(Clone, Copy, PartialEq)]
pub struct PreviewState {
    pub size: Signal<ButtonSize>,
    pub tag: Signal<ButtonTag>,
    pub loading: Signal<bool>,
    pub pressed: Signal<bool>,
    /// Clicks delivered to any gallery handler
    pub clicks: Signal<u32>,
}

impl PreviewState {
    /// Create the signals. Must be called from a component body.
    pub fn new(config: &GalleryConfig) -> Self {
        let size = config.size;
        let tag = config.tag;
        let loading = config.loading;
        Self {
            size: use_signal(|| size),
            tag: use_signal(|| tag),
            loading: use_signal(|| loading),
            pressed: use_signal(|| false),
            clicks: use_signal(|| 0),
        }
    }
}

/// Hook to access the preview signals from context.
pub fn use_preview() -> PreviewState {
    use_context::<PreviewState>()
}
