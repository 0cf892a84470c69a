//! Button and icon size scales.
//!
//! Buttons come in six sizes. Icons inside a button are always drawn one
//! step larger on the icon scale than the button's own size:
//!
//! | Button | Icon |
//! |--------|------|
//! | xxsmall | xsmall |
//! | xsmall | small |
//! | small | medium |
//! | medium | large |
//! | large | xlarge |
//! | xlarge | xxlarge |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ButtonKitError;

/// Button size variants
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    XXSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl ButtonSize {
    /// Every size, smallest first
    pub const ALL: [ButtonSize; 6] = [
        ButtonSize::XXSmall,
        ButtonSize::XSmall,
        ButtonSize::Small,
        ButtonSize::Medium,
        ButtonSize::Large,
        ButtonSize::XLarge,
    ];

    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::XXSmall => "xxsmall",
            ButtonSize::XSmall => "xsmall",
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
            ButtonSize::XLarge => "xlarge",
        }
    }

    /// Size of icons rendered inside a button of this size
    pub const fn icon_size(self) -> IconSize {
        icon_size(self)
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for ButtonSize {
    type Err = ButtonKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonSize::ALL
            .into_iter()
            .find(|size| size.class().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ButtonKitError::UnknownSize(s.to_string()))
    }
}

/// Icon size scale
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    XXSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XXLarge,
    XXXLarge,
}

impl IconSize {
    pub const ALL: [IconSize; 8] = [
        IconSize::XXSmall,
        IconSize::XSmall,
        IconSize::Small,
        IconSize::Medium,
        IconSize::Large,
        IconSize::XLarge,
        IconSize::XXLarge,
        IconSize::XXXLarge,
    ];

    /// Position on the scale, 0 for the smallest
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Rendered width and height in pixels
    pub const fn px(self) -> u32 {
        match self {
            IconSize::XXSmall => 12,
            IconSize::XSmall => 16,
            IconSize::Small => 20,
            IconSize::Medium => 24,
            IconSize::Large => 28,
            IconSize::XLarge => 32,
            IconSize::XXLarge => 40,
            IconSize::XXXLarge => 48,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::XXSmall => "xxsmall",
            IconSize::XSmall => "xsmall",
            IconSize::Small => "small",
            IconSize::Medium => "medium",
            IconSize::Large => "large",
            IconSize::XLarge => "xlarge",
            IconSize::XXLarge => "xxlarge",
            IconSize::XXXLarge => "xxxlarge",
        }
    }

    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            IconSize::XXSmall => "icon-xxsmall",
            IconSize::XSmall => "icon-xsmall",
            IconSize::Small => "icon-small",
            IconSize::Medium => "icon-medium",
            IconSize::Large => "icon-large",
            IconSize::XLarge => "icon-xlarge",
            IconSize::XXLarge => "icon-xxlarge",
            IconSize::XXXLarge => "icon-xxxlarge",
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a button size to the size of the icons it contains.
pub const fn icon_size(size: ButtonSize) -> IconSize {
    match size {
        ButtonSize::XXSmall => IconSize::XSmall,
        ButtonSize::XSmall => IconSize::Small,
        ButtonSize::Small => IconSize::Medium,
        ButtonSize::Medium => IconSize::Large,
        ButtonSize::Large => IconSize::XLarge,
        ButtonSize::XLarge => IconSize::XXLarge,
    }
}

/// Class added to icons that sit next to a label.
pub const ICON_CLASS: &str = "icon";

/// An icon value the button can resize.
///
/// The button only ever reads the class name and asks for a copy with a
/// new size and class; everything else about the icon stays opaque.
pub trait IconElement: Clone {
    fn class_name(&self) -> Option<&str>;

    /// A new icon identical to this one except for size and class.
    fn resized(&self, size: IconSize, class_name: Option<String>) -> Self;
}

/// Produce a copy of `icon` sized for a button of `size`.
///
/// Icons next to a label get the [`ICON_CLASS`] spacing class appended to
/// their own class. Icon-only buttons have no label to space from, so the
/// caller's class is kept as is. The original icon is not modified.
pub fn size_icon<I: IconElement>(icon: &I, size: ButtonSize, icon_only: bool) -> I {
    let class_name = if icon_only {
        icon.class_name().map(str::to_owned)
    } else {
        Some(crate::classes!(icon.class_name(), ICON_CLASS).to_string())
    };
    icon.resized(icon_size(size), class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestIcon {
        name: &'static str,
        size: IconSize,
        class: Option<String>,
    }

    impl IconElement for TestIcon {
        fn class_name(&self) -> Option<&str> {
            self.class.as_deref()
        }

        fn resized(&self, size: IconSize, class_name: Option<String>) -> Self {
            Self {
                size,
                class: class_name,
                ..self.clone()
            }
        }
    }

    fn plus(class: Option<&str>) -> TestIcon {
        TestIcon {
            name: "plus",
            size: IconSize::Medium,
            class: class.map(str::to_owned),
        }
    }

    #[test]
    fn icon_size_table() {
        assert_eq!(icon_size(ButtonSize::XXSmall), IconSize::XSmall);
        assert_eq!(icon_size(ButtonSize::XSmall), IconSize::Small);
        assert_eq!(icon_size(ButtonSize::Small), IconSize::Medium);
        assert_eq!(icon_size(ButtonSize::Medium), IconSize::Large);
        assert_eq!(icon_size(ButtonSize::Large), IconSize::XLarge);
        assert_eq!(icon_size(ButtonSize::XLarge), IconSize::XXLarge);
    }

    #[test]
    fn icon_size_is_one_rank_above_button() {
        for size in ButtonSize::ALL {
            assert_eq!(size.icon_size().rank(), size as u8 + 1);
        }
    }

    #[test]
    fn icon_size_strictly_increasing() {
        for pair in ButtonSize::ALL.windows(2) {
            let (smaller, larger) = (icon_size(pair[0]), icon_size(pair[1]));
            assert!(smaller < larger);
            assert!(smaller.px() < larger.px());
        }
    }

    #[test]
    fn button_size_default_is_medium() {
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }

    #[test]
    fn button_size_parses_class_tokens() {
        for size in ButtonSize::ALL {
            assert_eq!(size.class().parse::<ButtonSize>(), Ok(size));
        }
        assert_eq!(" Large ".parse::<ButtonSize>(), Ok(ButtonSize::Large));
        assert_eq!(
            "xxlarge".parse::<ButtonSize>(),
            Err(ButtonKitError::UnknownSize("xxlarge".into()))
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ButtonSize::XXSmall).unwrap();
        assert_eq!(json, "\"xxsmall\"");
        let size: ButtonSize = serde_json::from_str("\"xlarge\"").unwrap();
        assert_eq!(size, ButtonSize::XLarge);
        assert!(serde_json::from_str::<ButtonSize>("\"xxlarge\"").is_err());
    }

    #[test]
    fn size_icon_adds_spacing_class_next_to_label() {
        let icon = plus(Some("text-red"));
        let sized = size_icon(&icon, ButtonSize::Small, false);
        assert_eq!(sized.size, IconSize::Medium);
        assert_eq!(sized.class.as_deref(), Some("text-red icon"));
    }

    #[test]
    fn size_icon_without_caller_class() {
        let sized = size_icon(&plus(None), ButtonSize::Medium, false);
        assert_eq!(sized.class.as_deref(), Some("icon"));
    }

    #[test]
    fn size_icon_icon_only_keeps_caller_class() {
        let sized = size_icon(&plus(Some("text-red")), ButtonSize::Large, true);
        assert_eq!(sized.size, IconSize::XLarge);
        assert_eq!(sized.class.as_deref(), Some("text-red"));

        let bare = size_icon(&plus(None), ButtonSize::Large, true);
        assert_eq!(bare.class, None);
    }

    #[test]
    fn size_icon_leaves_original_untouched() {
        let icon = plus(Some("text-red"));
        let before = icon.clone();
        let sized = size_icon(&icon, ButtonSize::XLarge, false);
        assert_eq!(icon, before);
        assert_eq!(sized.name, "plus");
        assert_ne!(sized, icon);
    }
}
