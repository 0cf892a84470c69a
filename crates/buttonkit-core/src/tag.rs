//! Element kinds a button can render as.
//!
//! A button is either a control (`<button>`) or a link (`<a>`). The kind
//! decides which native attributes are accepted, which click strategy is
//! used, and which element handle is forwarded to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ButtonKitError;

/// Element kind selector
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTag {
    /// Interactive control with no navigation behavior
    #[default]
    Button,
    /// Navigational link
    #[serde(alias = "a")]
    Anchor,
}

impl ButtonTag {
    /// HTML element name
    pub fn element_name(&self) -> &'static str {
        match self {
            ButtonTag::Button => "button",
            ButtonTag::Anchor => "a",
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, ButtonTag::Anchor)
    }
}

/// Resolve an optional tag selector, defaulting to the control kind.
pub fn resolve_tag(tag: Option<ButtonTag>) -> ButtonTag {
    tag.unwrap_or_default()
}

impl fmt::Display for ButtonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

impl FromStr for ButtonTag {
    type Err = ButtonKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(ButtonTag::Button),
            "a" | "anchor" | "link" => Ok(ButtonTag::Anchor),
            _ => Err(ButtonKitError::UnknownTag(s.to_string())),
        }
    }
}

/// `type` attribute of a `<button>`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Native attributes of the control element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonAttributes {
    pub r#type: ButtonType,
    pub disabled: bool,
    pub name: Option<String>,
    pub value: Option<String>,
    pub form: Option<String>,
}

impl ButtonAttributes {
    pub fn submit() -> Self {
        Self {
            r#type: ButtonType::Submit,
            ..Self::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Native attributes of the link element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorAttributes {
    pub href: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub download: Option<String>,
}

impl AnchorAttributes {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// Open the link in a new browsing context.
    ///
    /// Sets `rel="noopener noreferrer"` unless a rel was already given.
    pub fn new_tab(mut self) -> Self {
        self.target = Some("_blank".to_string());
        if self.rel.is_none() {
            self.rel = Some("noopener noreferrer".to_string());
        }
        self
    }

    pub fn opens_new_tab(&self) -> bool {
        self.target.as_deref() == Some("_blank")
    }
}

/// Resolved element kind together with its native attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagAttributes {
    Button(ButtonAttributes),
    Anchor(AnchorAttributes),
}

impl Default for TagAttributes {
    fn default() -> Self {
        TagAttributes::Button(ButtonAttributes::default())
    }
}

impl TagAttributes {
    /// Link to `href`
    pub fn link(href: impl Into<String>) -> Self {
        TagAttributes::Anchor(AnchorAttributes::new(href))
    }

    /// Attributes for kind `K`
    pub fn of<K: TagKind>(attributes: K::Attributes) -> Self {
        attributes.into()
    }

    /// Same defaulting as [`resolve_tag`]: unset means a plain control.
    pub fn resolve(attributes: Option<TagAttributes>) -> Self {
        attributes.unwrap_or_default()
    }

    /// Default attributes for a bare tag selector
    pub fn for_tag(tag: ButtonTag) -> Self {
        match tag {
            ButtonTag::Button => TagAttributes::Button(ButtonAttributes::default()),
            ButtonTag::Anchor => TagAttributes::Anchor(AnchorAttributes::default()),
        }
    }

    pub fn tag(&self) -> ButtonTag {
        match self {
            TagAttributes::Button(_) => ButtonTag::Button,
            TagAttributes::Anchor(_) => ButtonTag::Anchor,
        }
    }
}

impl From<ButtonAttributes> for TagAttributes {
    fn from(attributes: ButtonAttributes) -> Self {
        TagAttributes::Button(attributes)
    }
}

impl From<AnchorAttributes> for TagAttributes {
    fn from(attributes: AnchorAttributes) -> Self {
        TagAttributes::Anchor(attributes)
    }
}

/// Compile-time mapping from an element kind to its attribute type.
pub trait TagKind {
    const TAG: ButtonTag;
    type Attributes: Default + Clone + Into<TagAttributes>;
}

/// The `<button>` kind
#[derive(Clone, Copy, Debug)]
pub struct ButtonKind;

/// The `<a>` kind
#[derive(Clone, Copy, Debug)]
pub struct AnchorKind;

impl TagKind for ButtonKind {
    const TAG: ButtonTag = ButtonTag::Button;
    type Attributes = ButtonAttributes;
}

impl TagKind for AnchorKind {
    const TAG: ButtonTag = ButtonTag::Anchor;
    type Attributes = AnchorAttributes;
}

/// Handle to the rendered element, tagged with its kind.
///
/// `H` is whatever the UI layer hands out for a mounted node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountedElement<H> {
    Button(H),
    Anchor(H),
}

impl<H> MountedElement<H> {
    pub fn new(tag: ButtonTag, handle: H) -> Self {
        match tag {
            ButtonTag::Button => MountedElement::Button(handle),
            ButtonTag::Anchor => MountedElement::Anchor(handle),
        }
    }

    pub fn tag(&self) -> ButtonTag {
        match self {
            MountedElement::Button(_) => ButtonTag::Button,
            MountedElement::Anchor(_) => ButtonTag::Anchor,
        }
    }

    pub fn as_button(&self) -> Option<&H> {
        match self {
            MountedElement::Button(handle) => Some(handle),
            MountedElement::Anchor(_) => None,
        }
    }

    pub fn as_anchor(&self) -> Option<&H> {
        match self {
            MountedElement::Anchor(handle) => Some(handle),
            MountedElement::Button(_) => None,
        }
    }

    /// The handle, if the element is of kind `K`
    pub fn of_kind<K: TagKind>(&self) -> Option<&H> {
        (self.tag() == K::TAG).then(|| self.handle())
    }

    pub fn handle(&self) -> &H {
        match self {
            MountedElement::Button(handle) | MountedElement::Anchor(handle) => handle,
        }
    }

    pub fn into_handle(self) -> H {
        match self {
            MountedElement::Button(handle) | MountedElement::Anchor(handle) => handle,
        }
    }
}
