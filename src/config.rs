//! Gallery configuration.
//!
//! Read from an optional JSON file; command-line flags override the file.
//!
//! ```json
//! { "size": "small", "tag": "a", "href": "https://example.com", "loading_ms": 800 }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use buttonkit_core::{ButtonSize, ButtonTag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Size the preview starts at
    pub size: ButtonSize,
    /// Element the preview starts as
    pub tag: ButtonTag,
    /// Whether the preview starts loading
    pub loading: bool,
    /// Target of every link example
    pub href: String,
    /// Preview label
    pub label: String,
    /// Extra class for the preview button
    pub class: Option<String>,
    /// How long a triggered loading state lasts
    pub loading_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            size: ButtonSize::default(),
            tag: ButtonTag::default(),
            loading: false,
            href: "https://github.com".to_string(),
            label: "Bookmark".to_string(),
            class: None,
            loading_ms: 1500,
        }
    }
}

impl GalleryConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading gallery config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing gallery config {}", path.display()))
    }

    /// Apply command-line flags on top of the file values
    pub fn with_overrides(
        mut self,
        size: Option<ButtonSize>,
        tag: Option<ButtonTag>,
        loading: bool,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(tag) = tag {
            self.tag = tag;
        }
        self.loading |= loading;
        self
    }
}

/// Load the config file if one was given, defaults otherwise
pub fn load(path: Option<&Path>) -> anyhow::Result<GalleryConfig> {
    match path {
        Some(path) => {
            let config = GalleryConfig::from_file(path)?;
            tracing::debug!(path = %path.display(), "loaded gallery config");
            Ok(config)
        }
        None => Ok(GalleryConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{ "size": "xlarge" }"#).unwrap();
        assert_eq!(config.size, ButtonSize::XLarge);
        assert_eq!(config.tag, ButtonTag::Button);
        assert_eq!(config.loading_ms, 1500);
    }

    #[test]
    fn tag_accepts_element_name() {
        let config: GalleryConfig = serde_json::from_str(r#"{ "tag": "a" }"#).unwrap();
        assert_eq!(config.tag, ButtonTag::Anchor);
    }

    #[test]
    fn unknown_size_is_rejected() {
        assert!(serde_json::from_str::<GalleryConfig>(r#"{ "size": "huge" }"#).is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = GalleryConfig {
            size: ButtonSize::Small,
            ..GalleryConfig::default()
        }
        .with_overrides(Some(ButtonSize::Large), Some(ButtonTag::Anchor), true);
        assert_eq!(config.size, ButtonSize::Large);
        assert_eq!(config.tag, ButtonTag::Anchor);
        assert!(config.loading);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let file = GalleryConfig {
            size: ButtonSize::XSmall,
            loading: true,
            ..GalleryConfig::default()
        };
        assert_eq!(file.clone().with_overrides(None, None, false), file);
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "label": "Upvote", "class": "btn-primary" }}"#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.label, "Upvote");
        assert_eq!(config.class.as_deref(), Some("btn-primary"));
    }

    #[test]
    fn load_reports_the_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load(None).unwrap(), GalleryConfig::default());
    }
}
