//! CSS custom property export.

use std::fmt::Write as _;

use crate::models::PaletteEntry;

/// Generates a `:root` block with one `--color-l<L>` variable per entry.
///
/// A usage comment referencing the first and last variable follows the block.
/// Returns an empty string for an empty palette.
///
/// # Examples
///
/// ```
/// use shadeline::export::css::generate_css;
///
/// assert_eq!(generate_css(&[]), "");
/// ```
#[must_use]
pub fn generate_css(entries: &[PaletteEntry]) -> String {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return String::new();
    };

    let mut output = String::from(":root {\n");
    for entry in entries {
        let _ = writeln!(output, "  --color-l{}: {};", entry.lightness, entry.hex);
    }
    output.push_str("}\n\n/* Usage examples:\n");
    let _ = writeln!(output, "background-color: var(--color-l{});", first.lightness);
    let _ = writeln!(output, "color: var(--color-l{});", last.lightness);
    output.push_str("*/");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lch::to_perceptual;

    fn entry(hex: &str, position: u32) -> PaletteEntry {
        PaletteEntry::new(position, to_perceptual(hex).unwrap())
    }

    #[test]
    fn test_generate_css() {
        let entries = vec![entry("FFFFFF", 0), entry("000000", 300)];
        let css = generate_css(&entries);
        assert_eq!(
            css,
            ":root {\n  --color-l100: #FFFFFF;\n  --color-l0: #000000;\n}\n\n\
             /* Usage examples:\nbackground-color: var(--color-l100);\ncolor: var(--color-l0);\n*/"
        );
    }

    #[test]
    fn test_single_entry_is_first_and_last() {
        let css = generate_css(&[entry("3366CC", 140)]);
        assert!(css.contains("background-color: var(--color-l53);"));
        assert!(css.contains("color: var(--color-l53);"));
    }
}
