//! `gradient` command: print the stop list or sampled rows.

use crate::cli::common::{load_config, print_json, CliError, CliResult, DocumentArgs};
use crate::gradient::{Gradient, StopKind};
use crate::models::Lch;
use clap::Args;
use crossterm::style::{Color, Stylize};
use serde::Serialize;

/// Print the gradient built from key colors
#[derive(Args, Debug, Clone)]
pub struct GradientArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Print N evenly sampled rows instead of the stop list
    #[arg(long, value_name = "N")]
    rows: Option<u32>,

    /// Draw colored swatches in the terminal
    #[arg(long)]
    preview: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct StopOutput {
    position: u32,
    hex: String,
    lightness: u8,
    kind: String,
}

#[derive(Serialize, Debug)]
struct RowOutput {
    row: u32,
    position: u32,
    hex: String,
    lightness: u8,
}

#[derive(Serialize, Debug)]
struct GradientOutput {
    height: u32,
    stops: Vec<StopOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<RowOutput>>,
}

fn kind_label(kind: StopKind) -> String {
    match kind {
        StopKind::WhiteCap => "white-cap".to_string(),
        StopKind::Key { index } => format!("key-{index}"),
        StopKind::BlackCap => "black-cap".to_string(),
    }
}

fn sample(gradient: &Gradient, rows: u32) -> Vec<RowOutput> {
    (0..rows)
        .filter_map(|row| {
            let position = gradient.position_for_row(row, rows);
            gradient.resolve(position).map(|color| RowOutput {
                row,
                position,
                hex: color.to_hex(),
                lightness: color.lightness_percent(),
            })
        })
        .collect()
}

fn swatch(color: &Lch) -> String {
    let rgb = color.to_rgb();
    let fill = Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    };
    format!("{}", "      ".on(fill))
}

impl GradientArgs {
    /// Execute the gradient command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let document = self.document.build_non_empty(&config)?;
        let gradient = document.gradient();

        if let Some(rows) = self.rows {
            if rows == 0 {
                return Err(CliError::validation("--rows must be at least 1"));
            }
        }

        let stops: Vec<StopOutput> = gradient
            .stops()
            .iter()
            .map(|stop| StopOutput {
                position: stop.position,
                hex: stop.color.to_hex(),
                lightness: stop.color.lightness_percent(),
                kind: kind_label(stop.kind),
            })
            .collect();
        let rows = self.rows.map(|n| sample(gradient, n));

        if self.json {
            return print_json(&GradientOutput {
                height: gradient.height(),
                stops,
                rows,
            });
        }

        if let Some(rows) = rows {
            println!("Gradient rows (height {})", gradient.height());
            for row in &rows {
                let prefix = if self.preview {
                    gradient
                        .resolve(row.position)
                        .map(|c| format!("{} ", swatch(&c)))
                        .unwrap_or_default()
                } else {
                    String::new()
                };
                println!(
                    "{prefix}{:>4}  {:>5}  {}  L{}",
                    row.row, row.position, row.hex, row.lightness
                );
            }
            return Ok(());
        }

        println!("Gradient stops (height {})", gradient.height());
        for (stop, out) in gradient.stops().iter().zip(&stops) {
            let prefix = if self.preview {
                format!("{} ", swatch(&stop.color))
            } else {
                String::new()
            };
            println!(
                "{prefix}{:>5}  {}  L{:<3}  {}",
                out.position, out.hex, out.lightness, out.kind
            );
        }

        let markers = gradient.key_markers();
        if !markers.is_empty() {
            println!();
            println!("Key colors:");
            for marker in markers {
                println!(
                    "  [{}] {} at {}",
                    marker.index,
                    marker.color.to_hex(),
                    marker.position
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(StopKind::WhiteCap), "white-cap");
        assert_eq!(kind_label(StopKind::Key { index: 2 }), "key-2");
        assert_eq!(kind_label(StopKind::BlackCap), "black-cap");
    }

    #[test]
    fn test_sample_rows() {
        let gradient = Gradient::build(&["3366CC"], 300, 10);
        let rows = sample(&gradient, 10);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].position, 15);
        assert!(rows[0].lightness > rows[9].lightness);
    }
}
