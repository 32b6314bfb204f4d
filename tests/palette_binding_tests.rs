//! Library-level tests for palette pins bound to a live gradient.

use shadeline::gradient::{resolve_at_l, Gradient};
use shadeline::models::lch::to_perceptual;
use shadeline::models::KeyColor;
use shadeline::services::Document;

mod fixtures;
use fixtures::*;

#[test]
fn test_pins_survive_key_edits() {
    let mut doc = three_key_document(300);
    doc.add_at(40).unwrap();
    doc.add_at(150).unwrap();
    doc.add_at(260).unwrap();
    let before_hex: Vec<String> = doc.palette().entries().iter().map(|e| e.hex.clone()).collect();

    doc.set_key_hex(1, "CC3366").unwrap();
    assert_eq!(positions(&doc), vec![40, 150, 260]);

    let after_hex: Vec<String> = doc.palette().entries().iter().map(|e| e.hex.clone()).collect();
    assert_ne!(before_hex, after_hex, "colors follow the new gradient");

    for entry in doc.palette().entries() {
        let resolved = doc.gradient().resolve(entry.position).unwrap();
        assert_eq!(entry.hex, resolved.to_hex());
    }
}

#[test]
fn test_pins_keep_position_when_all_keys_muted() {
    let mut doc = single_key_document("3366CC", 300);
    doc.add_at(100).unwrap();
    let hex = doc.palette().entries()[0].hex.clone();

    doc.toggle_key_color(0).unwrap();
    assert!(doc.gradient().is_empty());
    assert_eq!(positions(&doc), vec![100]);
    assert_eq!(doc.palette().entries()[0].hex, hex, "stale color is kept");

    doc.toggle_key_color(0).unwrap();
    assert_eq!(doc.palette().entries()[0].hex, hex);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut doc = three_key_document(500);
    doc.add_by_lightness(90).unwrap();
    doc.add_by_lightness(45).unwrap();
    doc.add_at(420).unwrap();
    let snapshot = doc.palette().clone();

    doc.sort_key_colors();
    doc.sort_key_colors();
    assert_eq!(doc.palette().entries().len(), snapshot.entries().len());
    for (a, b) in doc.palette().entries().iter().zip(snapshot.entries()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.hex, b.hex);
        assert_eq!(a.lightness, b.lightness);
    }
}

#[test]
fn test_add_without_keys_is_noop() {
    let mut doc = Document::new(settings(300));
    assert!(doc.add_at(10).is_none());
    assert!(doc.add_by_lightness(50).is_none());
    assert!(doc.palette().is_empty());
}

#[test]
fn test_lightness_pin_matches_label() {
    let mut doc = three_key_document(1000);
    for percent in [95, 70, 50, 25, 5] {
        let id = doc.add_by_lightness(percent).unwrap();
        let entry = doc.palette().get(&id).unwrap();
        assert_eq!(entry.lightness, percent);
    }
    let labels: Vec<u8> = doc.palette().entries().iter().map(|e| e.lightness).collect();
    assert_eq!(labels, vec![95, 70, 50, 25, 5]);
}

#[test]
fn test_nudge_moves_toward_white() {
    let mut doc = single_key_document("3366CC", 300);
    let id = doc.add_by_lightness(40).unwrap();

    assert!(doc.nudge(&id, 10));
    let entry = doc.palette().get(&id).unwrap();
    assert_eq!(entry.lightness, 50);
    assert_eq!(entry.position, 150);

    assert!(doc.nudge(&id, -100));
    assert_eq!(doc.palette().get(&id).unwrap().position, 299);
    assert!(!doc.nudge("missing", 1));
}

#[test]
fn test_similar_keys_are_deterministic() {
    let build = || Gradient::build(&["808080", "806060"], 400, 10);
    let first = build();
    let second = build();

    assert_eq!(first.stops().len(), second.stops().len());
    for (a, b) in first.stops().iter().zip(second.stops()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.color.to_hex(), b.color.to_hex());
    }
    assert_eq!(first.key_markers().len(), 2);
    assert!(first.stops().windows(2).all(|w| w[0].position <= w[1].position));
}

#[test]
fn test_flat_round_trip() {
    let mut doc = Document::with_key_colors(
        vec![KeyColor::new("F5D0A9"), KeyColor::muted("808080"), KeyColor::new("1B2A41")],
        settings(300),
    );
    doc.add_by_lightness(85).unwrap();
    doc.add_by_lightness(40).unwrap();

    let query = doc.to_query();
    assert!(query.starts_with("k=F5D0A9,808080m,1B2A41&p="));

    let restored = Document::from_query(&query, settings(300));
    assert_eq!(restored.to_query(), query);
    assert_eq!(positions(&restored), positions(&doc));
    assert!(!restored.key_colors().slots()[1].active);
}

#[test]
fn test_restore_without_keys_keeps_stored_color() {
    let restored = Document::from_query("p=ABCDEF@60", settings(300));
    let entry = &restored.palette().entries()[0];
    assert_eq!(entry.hex, "#ABCDEF");
    assert_eq!(entry.lightness, 60);
    assert_eq!(entry.position, 120);
}

#[test]
fn test_single_key_endpoints() {
    let gradient = Gradient::build(&["3366CC"], 300, 10);

    assert_eq!(gradient.resolve(0).unwrap().to_hex(), "#FFFFFF");
    assert_eq!(gradient.resolve(300).unwrap().to_hex(), "#000000");
    assert_eq!(gradient.resolve(5000).unwrap().to_hex(), "#000000");

    let mid = gradient.resolve(150).unwrap();
    assert!((mid.l - 0.5).abs() < 1e-4);
}

const EIGHT_KEYS: [&str; 8] = [
    "F5D0A9", "EEDDCC", "CC3366", "808080", "3366CC", "665500", "0000FF", "1B2A41",
];

#[test]
fn test_documents_keep_keys_past_slot_cap() {
    let keys = EIGHT_KEYS.iter().map(|h| KeyColor::new(*h)).collect();
    let doc = Document::with_key_colors(keys, settings(300));
    assert_eq!(doc.key_colors().active_hexes().len(), 8);
    assert!(doc.key_colors().active_hexes().contains(&"1B2A41".to_string()));
    assert_eq!(doc.gradient().key_markers().len(), 8);

    let restored = Document::from_query(&doc.to_query(), settings(300));
    assert_eq!(restored.gradient().key_markers().len(), 8);
    assert_eq!(restored.to_query(), doc.to_query());
}

#[test]
fn test_colliding_keys_both_get_markers() {
    let doc = Document::with_key_colors(
        vec![KeyColor::new("0000FF"), KeyColor::new("665500")],
        settings(300),
    );
    let markers = doc.gradient().key_markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].position, markers[1].position);

    // Just below the shared position the gradient fades from the darker blue key
    let blue = to_perceptual("0000FF").unwrap();
    let below = doc.gradient().resolve(markers[1].position + 1).unwrap();
    assert!((below.h - blue.h).abs() < 1e-3, "hue was {}", below.h);
}

#[test]
fn test_every_distinct_key_is_marked_and_resolvable() {
    // Subsets of a fixed pool, including near-equal lightness pairs
    let pool = EIGHT_KEYS;
    for mask in 1u32..(1 << pool.len()) {
        let hexes: Vec<&str> = (0..pool.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| pool[i])
            .collect();
        for height in [10, 300] {
            let gradient = Gradient::build(&hexes, height, 10);
            assert_eq!(gradient.key_markers().len(), hexes.len(), "{hexes:?} at {height}");

            for hex in &hexes {
                let key = to_perceptual(hex).unwrap();
                let resolved = resolve_at_l(key.l, gradient.stops()).unwrap();
                if key.is_achromatic() {
                    continue;
                }
                assert!(
                    (resolved.h - key.h).abs() < 1e-3,
                    "{hex} in {hexes:?} at {height}: hue {} vs {}",
                    resolved.h,
                    key.h
                );
            }
        }
    }
}
