//! SVG swatch strip export.

use std::fmt::Write as _;

use crate::models::PaletteEntry;

/// Generates an SVG with one `swatch_width` x `swatch_height` rectangle per
/// entry, stacked top to bottom in palette order.
///
/// Each rectangle carries `id="L<lightness>"`. Returns an empty string for an
/// empty palette.
#[must_use]
pub fn generate_svg(entries: &[PaletteEntry], swatch_width: u32, swatch_height: u32) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let total_height = u64::from(swatch_height) * entries.len() as u64;
    let mut output = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{swatch_width}" height="{total_height}">"#
    );
    for (i, entry) in entries.iter().enumerate() {
        let y = u64::from(swatch_height) * i as u64;
        let _ = write!(
            output,
            r#"<rect x="0" y="{y}" width="{swatch_width}" height="{swatch_height}" fill="{}" id="L{}"/>"#,
            entry.hex, entry.lightness
        );
    }
    output.push_str("</svg>");
    output
}
