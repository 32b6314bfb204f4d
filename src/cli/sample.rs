//! `sample` command: resolve a single position or lightness.

use crate::cli::common::{load_config, print_json, CliError, CliResult, DocumentArgs};
use crate::gradient::position_for_lightness;
use clap::Args;
use serde::Serialize;

/// Resolve the color at a position or lightness
#[derive(Args, Debug, Clone)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["position", "lightness"])))]
pub struct SampleArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Position on the gradient axis (0 = white, height = black)
    #[arg(short, long, value_name = "P")]
    position: Option<u32>,

    /// Lightness percentage (0-100)
    #[arg(short, long, value_name = "L")]
    lightness: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct SampleOutput {
    position: u32,
    hex: String,
    lightness: u8,
    oklch: [f32; 3],
}

impl SampleArgs {
    /// Execute the sample command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let document = self.document.build_non_empty(&config)?;
        let gradient = document.gradient();

        let position = match (self.position, self.lightness) {
            (Some(position), _) => position.min(gradient.height()),
            (None, Some(lightness)) => {
                if lightness > 100 {
                    return Err(CliError::validation(format!(
                        "Lightness must be between 0 and 100, got {lightness}"
                    )));
                }
                position_for_lightness(lightness, gradient.height())
            }
            (None, None) => {
                return Err(CliError::validation("Pass --position or --lightness"));
            }
        };

        let color = gradient
            .resolve(position)
            .ok_or_else(|| CliError::validation("Gradient is empty"))?;

        if self.json {
            return print_json(&SampleOutput {
                position,
                hex: color.to_hex(),
                lightness: color.lightness_percent(),
                oklch: [color.l, color.c, color.h],
            });
        }

        println!(
            "{}  L{}  position {}  {}",
            color.to_hex(),
            color.lightness_percent(),
            position,
            color
        );
        Ok(())
    }
}
