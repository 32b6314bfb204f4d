//! Gradient stop construction.
//!
//! Key colors are ordered from light to dark and placed on the position axis
//! by their lightness. Synthetic caps extend the sequence up to pure white and
//! down to pure black so that every position resolves to a color.

// Allow intentional type casts for position math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};

use crate::models::Lch;

/// What produced a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    /// Synthetic stop between white and the lightest key color
    WhiteCap,
    /// A key color. `index` is its 1-based position among the input colors.
    Key {
        /// 1-based index of the key color
        index: usize,
    },
    /// Synthetic stop between the darkest key color and black
    BlackCap,
}

impl StopKind {
    /// Whether this stop is a key color.
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Self::Key { .. })
    }
}

/// A (position, color) pair for piecewise-linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position on the gradient axis, `0..=height`
    pub position: u32,
    /// Perceptual color at this stop
    pub color: Lch,
    /// Origin of the stop
    pub kind: StopKind,
}

/// Position of a lightness value on an axis of `height` rows.
///
/// `round((1 - l) * height)`, clamped to `0..=height`.
#[must_use]
pub fn position_for_l(l: f32, height: u32) -> u32 {
    let height = f64::from(height);
    ((1.0 - f64::from(l)) * height).round().clamp(0.0, height) as u32
}

/// Builds the stop list for the given key colors.
///
/// Colors are stably sorted by descending lightness (ties keep input order)
/// and wrapped in a white cap and a black cap of `cap_stops` stops each. The
/// result is non-increasing in lightness and ascending in position; only key
/// stops that round to the same position may share it.
/// An empty input yields an empty list. A `height` of 0 is treated as 1.
#[must_use]
pub fn build_stops(colors: &[Lch], height: u32, cap_stops: usize) -> Vec<GradientStop> {
    if colors.is_empty() {
        return Vec::new();
    }

    let height = height.max(1);
    let cap_stops = cap_stops.max(1);

    let mut keyed: Vec<(usize, Lch)> = colors.iter().copied().enumerate().collect();
    keyed.sort_by(|a, b| b.1.l.total_cmp(&a.1.l));

    let key_stops: Vec<GradientStop> = keyed
        .iter()
        .map(|&(i, color)| GradientStop {
            position: position_for_l(color.l, height),
            color,
            kind: StopKind::Key { index: i + 1 },
        })
        .collect();

    let (Some(&lightest), Some(&darkest)) = (key_stops.first(), key_stops.last()) else {
        return Vec::new();
    };

    let mut raw = Vec::with_capacity(key_stops.len() + 2 * cap_stops);
    raw.extend(white_cap(&lightest, cap_stops));
    raw.extend(key_stops);
    raw.extend(black_cap(&darkest, height, cap_stops));

    dedup_positions(raw)
}

fn white_cap(lightest: &GradientStop, n: usize) -> impl Iterator<Item = GradientStop> + '_ {
    let key = lightest.color;
    (0..n).map(move |i| {
        let t = i as f32 / n as f32;
        GradientStop {
            position: (t * lightest.position as f32).round() as u32,
            color: Lch::new(1.0 - t * (1.0 - key.l), t * key.c, key.h),
            kind: StopKind::WhiteCap,
        }
    })
}

fn black_cap(darkest: &GradientStop, height: u32, n: usize) -> impl Iterator<Item = GradientStop> + '_ {
    let key = darkest.color;
    let start = darkest.position as f32;
    let span = height.saturating_sub(darkest.position) as f32;
    (1..=n).map(move |i| {
        let t = i as f32 / n as f32;
        GradientStop {
            position: (start + t * span).round() as u32,
            color: Lch::new(key.l * (1.0 - t), key.c * (1.0 - t), key.h),
            kind: StopKind::BlackCap,
        }
    })
}

/// Drops cap stops whose position does not advance past the previous kept stop.
///
/// Input positions are non-decreasing. A key stop replaces a white cap stop at
/// the same position. Key stops are never dropped for sharing a position;
/// only an exact duplicate of a key already kept there is collapsed.
fn dedup_positions(raw: Vec<GradientStop>) -> Vec<GradientStop> {
    let mut out: Vec<GradientStop> = Vec::with_capacity(raw.len());
    for stop in raw {
        let Some(last) = out.last().copied() else {
            out.push(stop);
            continue;
        };
        if stop.position > last.position {
            out.push(stop);
        } else if stop.kind.is_key() {
            if last.kind == StopKind::WhiteCap {
                out.pop();
                out.push(stop);
            } else if !is_duplicate_key(&out, &stop) {
                out.push(stop);
            }
        }
    }
    out
}

fn is_duplicate_key(kept: &[GradientStop], stop: &GradientStop) -> bool {
    kept.iter()
        .rev()
        .take_while(|s| s.position == stop.position)
        .any(|s| s.kind.is_key() && s.color == stop.color)
}
