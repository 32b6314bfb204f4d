//! Perceptual (OKLCH) color values and the hex <-> perceptual adapter.
//!
//! The gradient engine works entirely in OKLCH: lightness `l` in `0.0..=1.0`,
//! chroma `c >= 0`, hue `h` in degrees. Conversions to and from sRGB go
//! through the `palette` crate; out-of-gamut results are clamped per channel.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use palette::{Clamp, FromColor, Oklch, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ColorError, RgbColor};
use crate::constants::DARK_TEXT_THRESHOLD;

/// Chroma below which a color is treated as having no meaningful hue.
pub const ACHROMATIC_CHROMA: f32 = 1e-4;

/// A color in OKLCH space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    /// Perceptual lightness, 0.0 (black) to 1.0 (white)
    pub l: f32,
    /// Chroma, 0.0 for neutral grays
    pub c: f32,
    /// Hue angle in degrees, 0.0..360.0
    pub h: f32,
}

impl Lch {
    /// Creates a new color. The hue is normalized into `0.0..360.0`.
    #[must_use]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Pure white carrying the given hue (used as the top of the white cap).
    #[must_use]
    pub fn white(hue: f32) -> Self {
        Self::new(1.0, 0.0, hue)
    }

    /// Pure black carrying the given hue (used as the bottom of the black cap).
    #[must_use]
    pub fn black(hue: f32) -> Self {
        Self::new(0.0, 0.0, hue)
    }

    /// Converts an sRGB color into OKLCH. Lightness is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let [r, g, b] = rgb.to_unit();
        let oklch: Oklch = Oklch::from_color(Srgb::new(r, g, b));
        Self::new(
            oklch.l.clamp(0.0, 1.0),
            oklch.chroma,
            oklch.hue.into_positive_degrees(),
        )
    }

    /// Converts back to sRGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let oklch = Oklch::new(self.l, self.c.max(0.0), self.h);
        let srgb: Srgb = Srgb::from_color(oklch).clamp();
        RgbColor::from_unit([srgb.red, srgb.green, srgb.blue])
    }

    /// Uppercase `#RRGGBB` form of this color.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Lightness as an integer percentage (`round(l * 100)`, clamped to 0..=100).
    #[must_use]
    pub fn lightness_percent(&self) -> u8 {
        (self.l * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Whether the color has no meaningful hue.
    #[must_use]
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }

    /// Whether text drawn on top of this color should be dark.
    #[must_use]
    pub fn prefers_dark_text(&self) -> bool {
        self.l > DARK_TEXT_THRESHOLD
    }

    /// Interpolates towards `other` by `t` (clamped to `0.0..=1.0`).
    ///
    /// Lightness and chroma are interpolated linearly. Hue follows the shorter
    /// arc of the hue circle; an achromatic endpoint borrows the other
    /// endpoint's hue so grays do not drag the hue around.
    #[must_use]
    pub fn lerp(&self, other: &Lch, t: f32) -> Lch {
        let t = t.clamp(0.0, 1.0);

        let (h0, h1) = match (self.is_achromatic(), other.is_achromatic()) {
            (true, false) => (other.h, other.h),
            (false, true) => (self.h, self.h),
            _ => (self.h, other.h),
        };

        let mut delta = h1 - h0;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }

        Lch::new(
            self.l + (other.l - self.l) * t,
            self.c + (other.c - self.c) * t,
            h0 + delta * t,
        )
    }

    /// Euclidean distance between the two colors in OKLab.
    #[must_use]
    pub fn distance(&self, other: &Lch) -> f32 {
        let (a0, b0) = self.ab();
        let (a1, b1) = other.ab();
        ((self.l - other.l).powi(2) + (a0 - a1).powi(2) + (b0 - b1).powi(2)).sqrt()
    }

    fn ab(&self) -> (f32, f32) {
        let rad = self.h.to_radians();
        (self.c * rad.cos(), self.c * rad.sin())
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({:.1}% {:.4} {:.1})",
            self.l * 100.0,
            self.c,
            self.h
        )
    }
}

fn normalize_hue(h: f32) -> f32 {
    if h.is_finite() {
        h.rem_euclid(360.0)
    } else {
        0.0
    }
}

/// Parses a hex color into its perceptual form.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] for anything other than 3 or 6 hex digits.
pub fn to_perceptual(hex: &str) -> Result<Lch, ColorError> {
    RgbColor::from_hex(hex).map(Lch::from_rgb)
}

/// Formats a perceptual color as uppercase `#RRGGBB`.
#[must_use]
pub fn to_hex(color: &Lch) -> String {
    color.to_hex()
}

/// Integer lightness label of a perceptual color.
#[must_use]
pub fn lightness_percent(color: &Lch) -> u8 {
    color.lightness_percent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let samples = [
            "#3366CC", "#808080", "#806060", "#FFFFFF", "#000000", "#FF0000", "#00FF00",
            "#0000FF", "#12AB9F", "#F0F0F0", "#7A1E2C",
        ];
        for hex in samples {
            let lch = to_perceptual(hex).unwrap();
            assert_eq!(to_hex(&lch), hex, "round trip failed for {hex}");
        }
    }

    #[test]
    fn test_three_digit_expansion() {
        let short = to_perceptual("36c").unwrap();
        let long = to_perceptual("3366CC").unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            to_perceptual("12345"),
            Err(ColorError::InvalidColor(_))
        ));
        assert!(to_perceptual("").is_err());
    }

    #[test]
    fn test_white_and_black_lightness() {
        let white = to_perceptual("FFFFFF").unwrap();
        let black = to_perceptual("000000").unwrap();
        assert!((white.l - 1.0).abs() < 1e-3);
        assert!(black.l.abs() < 1e-3);
        assert_eq!(lightness_percent(&white), 100);
        assert_eq!(lightness_percent(&black), 0);
        assert!(white.is_achromatic());
    }

    #[test]
    fn test_blue_is_mid_lightness() {
        let blue = to_perceptual("3366CC").unwrap();
        assert!(blue.l > 0.5 && blue.l < 0.6, "unexpected L {}", blue.l);
        assert!(blue.c > 0.1);
        assert!(blue.h > 240.0 && blue.h < 280.0, "unexpected hue {}", blue.h);
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let wild = Lch::new(0.7, 0.5, 140.0);
        let hex = wild.to_hex();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Lch::new(0.9, 0.1, 30.0);
        let b = Lch::new(0.3, 0.2, 90.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        let end = a.lerp(&b, 1.0);
        assert!((end.l - b.l).abs() < 1e-6 && (end.h - b.h).abs() < 1e-4);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.l - 0.6).abs() < 1e-6);
        assert!((mid.c - 0.15).abs() < 1e-6);
        assert!((mid.h - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_takes_shorter_hue_arc() {
        let a = Lch::new(0.5, 0.1, 350.0);
        let b = Lch::new(0.5, 0.1, 10.0);
        let mid = a.lerp(&b, 0.5);
        assert!(mid.h < 1e-3 || mid.h > 359.999, "hue went the long way: {}", mid.h);
    }

    #[test]
    fn test_lerp_achromatic_borrows_hue() {
        let gray = Lch::new(0.5, 0.0, 0.0);
        let blue = Lch::new(0.5, 0.1, 260.0);
        let mid = gray.lerp(&blue, 0.5);
        assert!((mid.h - 260.0).abs() < 1e-4);
    }

    #[test]
    fn test_text_contrast_threshold() {
        assert!(Lch::new(0.8, 0.0, 0.0).prefers_dark_text());
        assert!(!Lch::new(0.66, 0.0, 0.0).prefers_dark_text());
    }

    #[test]
    fn test_distance() {
        let a = Lch::new(0.5, 0.1, 0.0);
        let b = Lch::new(0.5, 0.1, 180.0);
        assert!((a.distance(&b) - 0.2).abs() < 1e-5);
        assert!(a.distance(&a) < 1e-9);
    }
}
