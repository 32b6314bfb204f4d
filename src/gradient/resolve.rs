//! Position to color resolution.

use super::stops::GradientStop;
use crate::models::Lch;

/// Lightness at `position` on an axis of `height` rows: `1 - position / height`.
///
/// The position is clamped to `0..=height`; a `height` of 0 is treated as 1.
#[must_use]
pub fn lightness_at(position: u32, height: u32) -> f32 {
    let height = height.max(1);
    let position = position.min(height);
    1.0 - position as f32 / height as f32
}

/// Resolves the color at `position` against a stop list.
///
/// Finds the pair of stops whose lightness brackets the target lightness and
/// interpolates between them in OKLCH. Targets outside the stop range clamp to
/// the nearest endpoint. Returns `None` for an empty stop list.
#[must_use]
pub fn resolve(position: u32, stops: &[GradientStop], height: u32) -> Option<Lch> {
    resolve_at_l(lightness_at(position, height), stops)
}

/// Resolves the color at a target lightness in `0.0..=1.0`.
///
/// The first stop whose lightness is at or below `target` and its predecessor
/// bracket the target.
#[must_use]
pub fn resolve_at_l(target: f32, stops: &[GradientStop]) -> Option<Lch> {
    let first = stops.first()?;
    let last = stops.last()?;

    if target >= first.color.l {
        return Some(first.color);
    }
    if target < last.color.l {
        return Some(last.color);
    }

    let i = stops.iter().position(|stop| stop.color.l <= target)?;
    if i == 0 {
        return Some(first.color);
    }

    let lower = &stops[i];
    let upper = &stops[i - 1];
    let span = upper.color.l - lower.color.l;
    if span <= 0.0 {
        return Some(lower.color);
    }

    let t = (target - lower.color.l) / span;
    Some(lower.color.lerp(&upper.color, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::stops::{build_stops, StopKind};
    use crate::models::lch::to_perceptual;

    fn blue_stops(height: u32) -> Vec<GradientStop> {
        build_stops(&[to_perceptual("3366CC").unwrap()], height, 10)
    }

    #[test]
    fn test_empty_stops() {
        assert_eq!(resolve(10, &[], 300), None);
    }

    #[test]
    fn test_endpoints() {
        let stops = blue_stops(300);
        let top = resolve(0, &stops, 300).unwrap();
        assert_eq!(top.to_hex(), "#FFFFFF");

        let bottom = resolve(299, &stops, 300).unwrap();
        assert!(bottom.lightness_percent() <= 1, "L was {}", bottom.l);

        let past_end = resolve(10_000, &stops, 300).unwrap();
        assert_eq!(past_end.to_hex(), "#000000");
    }

    #[test]
    fn test_key_stop_resolves_to_key_color() {
        let stops = blue_stops(300);
        let key = stops.iter().find(|s| s.kind.is_key()).unwrap();
        let resolved = resolve(key.position, &stops, 300).unwrap();
        // The key sits at the rounded position, so allow a small lightness offset
        assert!((resolved.l - key.color.l).abs() < 0.01);
        assert!((resolved.h - key.color.h).abs() < 1e-3);
    }

    #[test]
    fn test_lightness_tracks_position() {
        let stops = blue_stops(300);
        for position in [0, 50, 140, 200, 299] {
            let color = resolve(position, &stops, 300).unwrap();
            let expected = lightness_at(position, 300);
            assert!((color.l - expected).abs() < 1e-4, "at {position}");
        }
    }

    #[test]
    fn test_continuity() {
        let stops = build_stops(
            &[
                to_perceptual("EEDDCC").unwrap(),
                to_perceptual("3366CC").unwrap(),
                to_perceptual("222244").unwrap(),
            ],
            400,
            10,
        );
        let mut previous = resolve(0, &stops, 400).unwrap();
        for position in 1..=400 {
            let color = resolve(position, &stops, 400).unwrap();
            assert!(
                previous.distance(&color) < 0.05,
                "jump at {position}: {previous} -> {color}"
            );
            previous = color;
        }
    }

    #[test]
    fn test_every_key_resolves_at_its_lightness() {
        let keys: Vec<Lch> = ["F5D0A9", "0000FF", "665500", "CC3366", "1B2A41"]
            .iter()
            .map(|h| to_perceptual(h).unwrap())
            .collect();
        for height in [50, 300, 1000] {
            let stops = build_stops(&keys, height, 10);
            for key in &keys {
                let resolved = resolve_at_l(key.l, &stops).unwrap();
                assert!((resolved.l - key.l).abs() < 1e-5, "L at height {height}");
                assert!((resolved.c - key.c).abs() < 1e-5, "C at height {height}");
                assert!((resolved.h - key.h).abs() < 1e-3, "hue at height {height}");
            }
        }
    }

    #[test]
    fn test_colliding_keys_keep_their_own_segments() {
        let blue = to_perceptual("0000FF").unwrap();
        let olive = to_perceptual("665500").unwrap();
        let stops = build_stops(&[blue, olive], 300, 10);

        // Below the blue key the gradient fades from blue, not from olive
        let below = resolve_at_l(blue.l - 0.05, &stops).unwrap();
        assert!((below.h - blue.h).abs() < 1e-3, "hue was {}", below.h);
    }

    #[test]
    fn test_deterministic() {
        let stops = blue_stops(500);
        assert_eq!(resolve(123, &stops, 500), resolve(123, &stops, 500));
    }

    #[test]
    fn test_single_stop() {
        let only = GradientStop {
            position: 10,
            color: Lch::new(0.5, 0.1, 200.0),
            kind: StopKind::Key { index: 1 },
        };
        assert_eq!(resolve(0, &[only], 100), Some(only.color));
        assert_eq!(resolve(100, &[only], 100), Some(only.color));
    }

    #[test]
    fn test_lightness_at() {
        assert!((lightness_at(0, 300) - 1.0).abs() < f32::EPSILON);
        assert!((lightness_at(150, 300) - 0.5).abs() < f32::EPSILON);
        assert!(lightness_at(400, 300).abs() < f32::EPSILON);
    }
}
