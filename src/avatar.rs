//! Apply the derivation functions to an [`AvatarSpec`].
//!
//! The result is an [`AvatarParts`] value: CSS classes, the inline style, the
//! initials or icon to show, and the Gravatar URL. Writing markup from it is
//! left to the caller.

use crate::color::HslaColor;
use crate::error::Result;
use crate::gravatar::{self, is_blank};
use crate::initials::extract_initials;
use crate::models::{AvatarParts, AvatarSpec, DefaultContent, Shape, Size};

pub const STYLE_CLASS: &str = "ui-avatar";
pub const CIRCLE_CLASS: &str = "ui-avatar-circle";
pub const SIZE_LARGE_CLASS: &str = "ui-avatar-lg";
pub const SIZE_XLARGE_CLASS: &str = "ui-avatar-xl";
pub const DYNAMIC_COLOR_CLASS: &str = "ui-avatar-dynamic";
pub const DYNAMIC_COLOR_LIGHT_CLASS: &str = "ui-avatar-dynamic-light";
pub const DYNAMIC_COLOR_DARK_CLASS: &str = "ui-avatar-dynamic-dark";
pub const ICON_CLASS: &str = "ui-avatar-icon";
pub const TEXT_CLASS: &str = "ui-avatar-text";

/// Lightness above which the text is drawn dark on a light background.
const LIGHT_THRESHOLD: i32 = 50;

/// Space-separated class list that skips empty and disabled entries.
#[derive(Debug, Default)]
struct ClassList(String);

impl ClassList {
    fn add(mut self, class: &str) -> Self {
        let class = class.trim();
        if !class.is_empty() {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            self.0.push_str(class);
        }
        self
    }

    fn add_if(self, enabled: bool, class: &str) -> Self {
        if enabled { self.add(class) } else { self }
    }

    fn add_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(c) => self.add(c),
            None => self,
        }
    }

    fn build(self) -> String {
        self.0
    }
}

/// CSS classes of the avatar container.
pub fn style_class(spec: &AvatarSpec) -> String {
    let light = spec.lightness > LIGHT_THRESHOLD;
    ClassList::default()
        .add(STYLE_CLASS)
        .add_opt(spec.style_class.as_deref())
        .add_if(spec.shape == Shape::Circle, CIRCLE_CLASS)
        .add_if(spec.size == Size::Large, SIZE_LARGE_CLASS)
        .add_if(spec.size == Size::XLarge, SIZE_XLARGE_CLASS)
        .add_if(spec.dynamic_color, DYNAMIC_COLOR_CLASS)
        .add_if(spec.dynamic_color && light, DYNAMIC_COLOR_LIGHT_CLASS)
        .add_if(spec.dynamic_color && !light, DYNAMIC_COLOR_DARK_CLASS)
        .build()
}

/// Dynamic background color of `spec`, if enabled and a label exists.
///
/// The color is keyed on the full label, not on its initials.
pub fn color_css(spec: &AvatarSpec) -> Option<String> {
    if !spec.dynamic_color {
        return None;
    }
    let label = spec.label.as_deref()?;
    let color = HslaColor::for_label(label, spec.saturation, spec.lightness, spec.alpha);
    Some(color.css_declaration())
}

/// Color declaration first, then the user style.
fn merge_style(color_css: Option<&str>, style: Option<&str>) -> Option<String> {
    match (color_css, style.filter(|s| !s.trim().is_empty())) {
        (Some(c), Some(s)) => Some(format!("{c};{s}")),
        (Some(c), None) => Some(c.to_string()),
        (None, s) => s.map(str::to_string),
    }
}

/// Choose what is shown inside the avatar: initials, else the icon, else nothing.
pub fn default_content(initials: Option<&str>, icon: Option<&str>) -> DefaultContent {
    if let Some(text) = initials.filter(|s| !is_blank(Some(s))) {
        return DefaultContent::Text(text.to_string());
    }
    match icon {
        Some(icon) => DefaultContent::Icon(ClassList::default().add(ICON_CLASS).add(icon).build()),
        None => DefaultContent::None,
    }
}

/// Derive every renderable piece of `spec`.
///
/// ### Errors
/// - Propagates [`crate::AvatarError`] from the Gravatar digest.
///
/// ### Example
/// ```
/// use avatar_kit::{AvatarSpec, avatar::derive_parts};
///
/// let mut spec = AvatarSpec::with_label("PrimeFaces Rocks");
/// spec.dynamic_color = true;
/// let parts = derive_parts(&spec)?;
/// assert_eq!(parts.initials.as_deref(), Some("PR"));
/// assert_eq!(parts.style.as_deref(), Some("background-color:hsla(117,100%,40%,100%)"));
/// # Ok::<(), avatar_kit::AvatarError>(())
/// ```
pub fn derive_parts(spec: &AvatarSpec) -> Result<AvatarParts> {
    let initials = extract_initials(spec.label.as_deref());
    let color_css = color_css(spec);
    let style = merge_style(color_css.as_deref(), spec.style.as_deref());

    let image_url = match spec.gravatar.as_deref() {
        Some(email) => Some(gravatar::gravatar_url_with(
            email,
            spec.gravatar_config.as_deref(),
            spec.can_fallback(),
            spec.gravatar_algorithm,
        )?),
        None => None,
    };

    let content = default_content(initials.as_deref(), spec.icon.as_deref());
    let title = spec.title.clone().filter(|t| !t.is_empty());

    log::debug!("derived avatar parts: initials={initials:?} image={image_url:?}");
    Ok(AvatarParts {
        style_class: style_class(spec),
        style,
        title,
        initials,
        color_css,
        image_url,
        content,
    })
}
