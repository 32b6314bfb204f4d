//! Lightness-indexed gradient engine.
//!
//! A [`Gradient`] maps positions on a vertical axis of `height` rows to colors.
//! Position 0 is white, position `height` is black, and the key colors sit at
//! the positions given by their perceptual lightness.
//!
//! # Examples
//!
//! ```
//! use shadeline::gradient::Gradient;
//!
//! let gradient = Gradient::build(&["3366CC"], 300, 10);
//! assert!(!gradient.is_empty());
//! assert_eq!(gradient.resolve(0).unwrap().to_hex(), "#FFFFFF");
//! ```

// Allow intentional type casts for position math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod resolve;
pub mod stops;

pub use resolve::{lightness_at, resolve, resolve_at_l};
pub use stops::{build_stops, position_for_l, GradientStop, StopKind};

use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::NEUTRAL_PLACEHOLDER_HEX;
use crate::models::lch::to_perceptual;
use crate::models::Lch;

/// Position of an integer lightness percentage on an axis of `height` rows.
///
/// The percentage is clamped to 0..=100.
///
/// # Examples
///
/// ```
/// use shadeline::gradient::position_for_lightness;
///
/// assert_eq!(position_for_lightness(100, 300), 0);
/// assert_eq!(position_for_lightness(50, 300), 150);
/// assert_eq!(position_for_lightness(0, 300), 300);
/// ```
#[must_use]
pub fn position_for_lightness(percent: u8, height: u32) -> u32 {
    let l = f32::from(percent.min(100)) / 100.0;
    position_for_l(l, height)
}

/// A key color marker on the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyMarker {
    /// Position of the key stop
    pub position: u32,
    /// 1-based index of the key color
    pub index: usize,
    /// Color of the key stop
    pub color: Lch,
}

/// The stop list of a document together with its axis height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    stops: Vec<GradientStop>,
    height: u32,
}

impl Gradient {
    /// An empty gradient (no key colors).
    #[must_use]
    pub fn empty(height: u32) -> Self {
        Self {
            stops: Vec::new(),
            height: height.max(1),
        }
    }

    /// Builds a gradient from hex key colors.
    ///
    /// Malformed colors are skipped. Key marker indices refer to the
    /// remaining colors in input order.
    #[must_use]
    pub fn build<S: AsRef<str>>(hexes: &[S], height: u32, cap_stops: usize) -> Self {
        let colors: Vec<Lch> = hexes
            .iter()
            .filter_map(|hex| match to_perceptual(hex.as_ref()) {
                Ok(color) => Some(color),
                Err(e) => {
                    warn!("Skipping key color: {e}");
                    None
                }
            })
            .collect();
        Self::from_colors(&colors, height, cap_stops)
    }

    /// Builds a gradient from perceptual key colors.
    #[must_use]
    pub fn from_colors(colors: &[Lch], height: u32, cap_stops: usize) -> Self {
        let height = height.max(1);
        let stops = build_stops(colors, height, cap_stops);
        debug!(
            "Built gradient: {} key colors, {} stops, height {}",
            colors.len(),
            stops.len(),
            height
        );
        Self { stops, height }
    }

    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stop list, non-decreasing by position.
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Resolution of the position axis.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Color at `position`, or `None` when the gradient is empty.
    #[must_use]
    pub fn resolve(&self, position: u32) -> Option<Lch> {
        resolve(position, &self.stops, self.height)
    }

    /// Color at the position of an integer lightness percentage.
    #[must_use]
    pub fn resolve_lightness(&self, percent: u8) -> Option<Lch> {
        self.resolve(position_for_lightness(percent, self.height))
    }

    /// Hex fill at `position`, falling back to the neutral placeholder.
    #[must_use]
    pub fn fill_at(&self, position: u32) -> String {
        self.resolve(position)
            .map_or_else(|| NEUTRAL_PLACEHOLDER_HEX.to_string(), |c| c.to_hex())
    }

    /// Position sampled by display row `row` of `rows` (row centres).
    #[must_use]
    pub fn position_for_row(&self, row: u32, rows: u32) -> u32 {
        let rows = rows.max(1);
        let centre = (f64::from(row.min(rows - 1)) + 0.5) * f64::from(self.height) / f64::from(rows);
        (centre.floor() as u32).min(self.height)
    }

    /// Display row of `rows` that shows `position`.
    #[must_use]
    pub fn row_for_position(&self, position: u32, rows: u32) -> u32 {
        let rows = rows.max(1);
        let row = f64::from(position.min(self.height)) * f64::from(rows) / f64::from(self.height);
        (row.floor() as u32).min(rows - 1)
    }

    /// One color per display row, sampled at row centres.
    ///
    /// Empty when the gradient is empty.
    #[must_use]
    pub fn sample_rows(&self, rows: u32) -> Vec<Lch> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..rows)
            .filter_map(|row| self.resolve(self.position_for_row(row, rows)))
            .collect()
    }

    /// Position and index of every key stop, light to dark.
    #[must_use]
    pub fn key_markers(&self) -> Vec<KeyMarker> {
        self.stops
            .iter()
            .filter_map(|stop| match stop.kind {
                StopKind::Key { index } => Some(KeyMarker {
                    position: stop.position,
                    index,
                    color: stop.color,
                }),
                _ => None,
            })
            .collect()
    }
}
