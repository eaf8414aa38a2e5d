//! Label-based background colors.
//!
//! Every label maps to one of 40 hues spaced 9° apart. Saturation, lightness
//! and alpha are caller-supplied percentages and are written out unchanged,
//! no clamping is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct hue buckets around the color wheel.
pub const HUE_BUCKETS: i32 = 40;
/// Degrees between two neighbouring buckets.
pub const HUE_STEP: i32 = 9;

/// Stable 32-bit polynomial hash of a label.
///
/// `h = 31 * h + unit` over the UTF-16 code units of `s`, with wrapping
/// arithmetic. The result does not depend on platform, process or run, so a
/// label keeps its color across sessions.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hue in degrees (`0..=351`, a multiple of 9) for `label`.
pub fn hue_for(label: &str) -> u16 {
    // `%` truncates toward zero, so the bucket is in -39..=39 before `abs`.
    let bucket = string_hash(label) % HUE_BUCKETS;
    (bucket * HUE_STEP).unsigned_abs() as u16
}

/// An `hsla()` color with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslaColor {
    /// Degrees.
    pub hue: u16,
    /// Percent.
    pub saturation: i32,
    /// Percent.
    pub lightness: i32,
    /// Percent.
    pub alpha: i32,
}

impl HslaColor {
    /// Derive the color of `label` with the given style parameters.
    pub fn for_label(label: &str, saturation: i32, lightness: i32, alpha: i32) -> Self {
        Self {
            hue: hue_for(label),
            saturation,
            lightness,
            alpha,
        }
    }

    /// Inline style declaration, e.g. `background-color:hsla(117,100%,40%,100%)`.
    pub fn css_declaration(&self) -> String {
        format!("background-color:{self}")
    }
}

impl fmt::Display for HslaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{}%)",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Background color declaration for `label`.
///
/// ### Example
/// ```
/// use avatar_kit::color::derive_background_color;
///
/// assert_eq!(
///     derive_background_color("PrimeFaces Rocks", 100, 40, 100),
///     "background-color:hsla(117,100%,40%,100%)"
/// );
/// ```
pub fn derive_background_color(label: &str, saturation: i32, lightness: i32, alpha: i32) -> String {
    let css = HslaColor::for_label(label, saturation, lightness, alpha).css_declaration();
    log::debug!("background color for {label:?}: {css}");
    css
}
