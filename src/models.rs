use crate::gravatar::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Outline of the avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Square,
    Circle,
}

/// Size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Normal,
    Large,
    XLarge,
}

/// Everything a caller knows about one avatar.
///
/// Missing fields in JSON input take the widget defaults: saturation 100,
/// lightness 40, alpha 100, square shape, normal size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarSpec {
    /// Text to abbreviate into initials.
    pub label: Option<String>,
    /// Email-like identity for the Gravatar image.
    pub gravatar: Option<String>,
    /// Raw query string appended to the Gravatar URL, e.g. `s=80&d=identicon`.
    pub gravatar_config: Option<String>,
    /// Ask Gravatar for a blank image when the identity has none (`d=blank`).
    /// Unset means "only if a label or icon can show through".
    pub gravatar_fallback: Option<bool>,
    pub gravatar_algorithm: HashAlgorithm,
    /// Color the background by a hash of the label.
    pub dynamic_color: bool,
    pub saturation: i32,
    pub lightness: i32,
    pub alpha: i32,
    /// Icon class shown when there is no label.
    pub icon: Option<String>,
    pub shape: Shape,
    pub size: Size,
    pub style: Option<String>,
    pub style_class: Option<String>,
    pub title: Option<String>,
}

impl Default for AvatarSpec {
    fn default() -> Self {
        Self {
            label: None,
            gravatar: None,
            gravatar_config: None,
            gravatar_fallback: None,
            gravatar_algorithm: HashAlgorithm::Md5,
            dynamic_color: false,
            saturation: 100,
            lightness: 40,
            alpha: 100,
            icon: None,
            shape: Shape::Square,
            size: Size::Normal,
            style: None,
            style_class: None,
            title: None,
        }
    }
}

impl AvatarSpec {
    /// Spec with only a label set.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Whether a missing Gravatar image may be replaced by a blank one.
    pub fn can_fallback(&self) -> bool {
        self.gravatar_fallback
            .unwrap_or(self.label.is_some() || self.icon.is_some())
    }
}

/// What sits inside the avatar besides the optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DefaultContent {
    /// Initials text.
    Text(String),
    /// Icon style class, already prefixed with the avatar icon class.
    Icon(String),
    None,
}

/// Derived pieces handed to whatever writes the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarParts {
    pub style_class: String,
    /// Inline style, the dynamic color declaration first.
    pub style: Option<String>,
    pub title: Option<String>,
    pub initials: Option<String>,
    /// `background-color:hsla(...)` when dynamic color applies.
    pub color_css: Option<String>,
    pub image_url: Option<String>,
    pub content: DefaultContent,
}
