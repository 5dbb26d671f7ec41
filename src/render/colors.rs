//! Color handling for cell rendering.
//!
//! Colors travel as CSS color strings, directly usable by Canvas 2D.
//! The model may store them in several spellings (`#RRGGBB`, Excel-style
//! `#AARRGGBB` with alpha first, bare hex, `rgb()`/`rgba()`); they are
//! normalized here before reaching the drawing surface.

/// A CSS color string (e.g., "#FF0000", "rgba(255, 0, 0, 0.5)")
pub type CssColor = String;

/// Blend factor toward black applied by [`darken`].
const DARKEN_FACTOR: f64 = 0.2;

/// RGB color with u8 components for color math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a CSS color string: `#RRGGBB`, bare `RRGGBB`,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)` (alpha discarded).
    /// Returns None if the format is invalid.
    pub fn from_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(inner) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
        {
            let inner = inner.strip_suffix(')')?;
            let mut parts = inner.split(',').map(str::trim);
            let r = parts.next()?.parse().ok()?;
            let g = parts.next()?.parse().ok()?;
            let b = parts.next()?.parse().ok()?;
            return Some(Self { r, g, b });
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Darken the color by blending with black.
    /// Factor of 0.0 = no change, 1.0 = pure black.
    pub fn darken(self, factor: f64) -> Self {
        Self {
            r: Self::blend_component(self.r, 0, factor),
            g: Self::blend_component(self.g, 0, factor),
            b: Self::blend_component(self.b, 0, factor),
        }
    }

    /// Blend a single color component toward a target.
    /// The cast is safe because we clamp to [0, 255] before converting.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blend_component(from: u8, to: u8, factor: f64) -> u8 {
        let from = f64::from(from);
        let to = f64::from(to);
        let blended = from + (to - from) * factor.clamp(0.0, 1.0);
        blended.clamp(0.0, 255.0).round() as u8
    }
}

/// Normalize a model-supplied color to a CSS display color.
///
/// Supports formats:
/// - "#RRGGBB" (hex without alpha)
/// - "#AARRGGBB" (alpha first)
/// - "RRGGBB" (hex without # prefix)
/// - "rgb(r, g, b)" / "rgba(r, g, b, a)" (passed through)
pub fn format_color(s: &str) -> Option<CssColor> {
    let s = s.trim();

    if s.starts_with("rgb") {
        return Some(s.to_string());
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    match hex.len() {
        6 => {
            // Validate and return as-is
            let _ = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let _ = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let _ = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some(format!("#{hex}"))
        }
        8 => {
            // #AARRGGBB - convert to rgba()
            let a = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let r = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(6..8)?, 16).ok()?;

            if a == 255 {
                Some(format!("#{r:02X}{g:02X}{b:02X}"))
            } else {
                let alpha = f64::from(a) / 255.0;
                Some(format!("rgba({r}, {g}, {b}, {alpha:.2})"))
            }
        }
        _ => None,
    }
}

/// Deterministic darkening transform used by the background rules.
/// Unparseable colors are returned unchanged.
pub fn darken(color: &str) -> CssColor {
    match Rgb::from_css(color) {
        Some(rgb) => rgb.darken(DARKEN_FACTOR).to_hex(),
        None => color.to_string(),
    }
}

/// Fixed colors used by the cell painters (CSS format)
pub mod palette {
    /// Background painted when no selection/highlight/focus applies,
    /// and for every header cell.
    pub const DEFAULT_CELL_BACKGROUND: &str = "#FFFFFF";

    /// Body and row-header text color.
    pub const DEFAULT_DATA_FONT_COLOR: &str = "#000000";

    /// Column- and corner-header text color.
    pub const DEFAULT_HEADER_FONT_COLOR: &str = "#515A5A";

    /// Fill used for in-cell data bars.
    pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#6BA2C7";
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_from_css_hex() {
        assert_eq!(Rgb::from_css("#FF8040"), Some(Rgb::new(255, 128, 64)));
        assert_eq!(Rgb::from_css("FF8040"), Some(Rgb::new(255, 128, 64)));
    }

    #[test]
    fn test_from_css_rgb_strings() {
        assert_eq!(
            Rgb::from_css("rgb(255, 128, 64)"),
            Some(Rgb::new(255, 128, 64))
        );
        assert_eq!(
            Rgb::from_css("rgba(1, 2, 3, 0.5)"),
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn test_from_css_invalid() {
        assert_eq!(Rgb::from_css("#F80"), None);
        assert_eq!(Rgb::from_css("rgb(1, 2)"), None);
        assert_eq!(Rgb::from_css("papayawhip"), None);
    }

    #[test]
    fn test_darken_blends_toward_black() {
        assert_eq!(darken("#FFFFFF"), "#CCCCCC");
        // Darkening is deterministic: same input, same output.
        assert_eq!(darken("#CCCCCC"), darken("#CCCCCC"));
    }

    #[test]
    fn test_darken_unparseable_is_identity() {
        assert_eq!(darken("bogus"), "bogus");
    }

    #[test]
    fn test_format_color_hex_6() {
        assert_eq!(format_color("#FF0000").unwrap(), "#FF0000");
        assert_eq!(format_color("FF0000").unwrap(), "#FF0000");
    }

    #[test]
    fn test_format_color_hex_8_opaque() {
        // Fully opaque (FF alpha) should return simple hex
        assert_eq!(format_color("#FFFF0000").unwrap(), "#FF0000");
    }

    #[test]
    fn test_format_color_hex_8_transparent() {
        // 50% alpha should return rgba
        let color = format_color("#80FF0000").unwrap();
        assert!(color.starts_with("rgba(255, 0, 0,"));
    }

    #[test]
    fn test_format_color_rgb_passthrough() {
        assert_eq!(
            format_color("rgb(255, 128, 64)").unwrap(),
            "rgb(255, 128, 64)"
        );
    }

    #[test]
    fn test_format_color_invalid() {
        assert_eq!(format_color("#12345"), None);
        assert_eq!(format_color(""), None);
    }
}
