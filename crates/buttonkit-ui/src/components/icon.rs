//! Icon Component
//!
//! Inline Lucide-style SVG icons sized on the icon scale. Buttons never
//! touch an icon beyond its size and class: they receive an [`IconSpec`]
//! and render a resized copy of it.

use buttonkit_core::{classes, IconElement, IconSize};
use dioxus::prelude::*;

/// Available icon artwork
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconGlyph {
    Plus,
    ArrowRight,
    ChevronDown,
    ExternalLink,
    Bookmark,
    Trash,
    Menu,
    Check,
}

impl IconGlyph {
    /// SVG path data on a 24x24 view box
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconGlyph::Plus => &["M5 12h14", "M12 5v14"],
            IconGlyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconGlyph::ChevronDown => &["m6 9 6 6 6-6"],
            IconGlyph::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconGlyph::Bookmark => &["m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"],
            IconGlyph::Trash => &[
                "M3 6h18",
                "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
                "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
            ],
            IconGlyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconGlyph::Check => &["M20 6 9 17l-5-5"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconGlyph::Plus => "plus",
            IconGlyph::ArrowRight => "arrow-right",
            IconGlyph::ChevronDown => "chevron-down",
            IconGlyph::ExternalLink => "external-link",
            IconGlyph::Bookmark => "bookmark",
            IconGlyph::Trash => "trash",
            IconGlyph::Menu => "menu",
            IconGlyph::Check => "check",
        }
    }
}

/// An icon value: artwork plus the two props a button may override.
#[derive(Clone, PartialEq, Debug)]
pub struct IconSpec {
    pub glyph: IconGlyph,
    pub size: IconSize,
    pub class: Option<String>,
}

impl IconSpec {
    pub fn new(glyph: IconGlyph) -> Self {
        Self {
            glyph,
            size: IconSize::default(),
            class: None,
        }
    }

    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Class attribute of the rendered `<svg>`
    pub fn svg_class(&self) -> String {
        classes!(
            "icon-svg",
            format!("icon-{}", self.glyph.name()),
            self.size.class(),
            self.class.as_deref()
        )
        .to_string()
    }
}

impl From<IconGlyph> for IconSpec {
    fn from(glyph: IconGlyph) -> Self {
        IconSpec::new(glyph)
    }
}

impl IconElement for IconSpec {
    fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    fn resized(&self, size: IconSize, class_name: Option<String>) -> Self {
        Self {
            glyph: self.glyph,
            size,
            class: class_name,
        }
    }
}

/// Renders an [`IconSpec`] as inline SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { spec: IconSpec::new(IconGlyph::Plus).with_size(IconSize::Large) }
/// }
/// ```
#[component]
pub fn Icon(spec: IconSpec) -> Element {
    let px = spec.size.px();
    let class = spec.svg_class();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "{class}",
            width: "{px}",
            height: "{px}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in spec.glyph.paths().iter() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonkit_core::{size_icon, ButtonSize};

    #[test]
    fn every_glyph_has_paths() {
        for glyph in [
            IconGlyph::Plus,
            IconGlyph::ArrowRight,
            IconGlyph::ChevronDown,
            IconGlyph::ExternalLink,
            IconGlyph::Bookmark,
            IconGlyph::Trash,
            IconGlyph::Menu,
            IconGlyph::Check,
        ] {
            assert!(!glyph.paths().is_empty(), "{} has no paths", glyph.name());
        }
    }

    #[test]
    fn svg_class_includes_size_and_caller_class() {
        let spec = IconSpec::new(IconGlyph::Plus)
            .with_size(IconSize::Large)
            .with_class("text-theme");
        assert_eq!(spec.svg_class(), "icon-svg icon-plus icon-large text-theme");
    }

    #[test]
    fn button_sizing_produces_new_spec() {
        let spec = IconSpec::new(IconGlyph::Bookmark).with_class("text-theme");
        let sized = size_icon(&spec, ButtonSize::XXSmall, false);
        assert_eq!(sized.glyph, IconGlyph::Bookmark);
        assert_eq!(sized.size, IconSize::XSmall);
        assert_eq!(sized.class.as_deref(), Some("text-theme icon"));
        assert_eq!(spec.size, IconSize::Medium);
        assert_eq!(spec.class.as_deref(), Some("text-theme"));
    }
}
