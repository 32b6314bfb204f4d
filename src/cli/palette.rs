//! `palette` command: pin entries and print the resulting palette.

use crate::cli::common::{load_config, print_json, CliError, CliResult, DocumentArgs};
use crate::models::ColorError;
use crate::services::Document;
use clap::Args;
use serde::Serialize;

/// Pin palette entries and print the palette
#[derive(Args, Debug, Clone)]
pub struct PaletteArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Pin an entry at a position (repeatable)
    #[arg(long = "at", value_name = "P")]
    positions: Vec<u32>,

    /// Pin an entry at a lightness percentage (repeatable)
    #[arg(short, long = "lightness", value_name = "L")]
    lightness: Vec<u8>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct EntryOutput {
    index: usize,
    hex: String,
    lightness: u8,
    position: u32,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    height: u32,
    entries: Vec<EntryOutput>,
    query: String,
}

impl PaletteArgs {
    /// Applies the requested pins to a document.
    fn apply(&self, document: &mut Document) -> CliResult<()> {
        let pins_requested = !self.positions.is_empty() || !self.lightness.is_empty();
        if pins_requested && document.gradient().is_empty() {
            return Err(CliError::validation(format!(
                "{}. Pass at least one --key HEX",
                ColorError::EmptyGradient
            )));
        }

        if let Some(bad) = self.lightness.iter().find(|l| **l > 100) {
            return Err(CliError::validation(format!(
                "Lightness must be between 0 and 100, got {bad}"
            )));
        }

        for &position in &self.positions {
            document.add_at(position);
        }
        for &lightness in &self.lightness {
            document.add_by_lightness(lightness);
        }
        Ok(())
    }

    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut document = self.document.build(&config)?;
        self.apply(&mut document)?;

        let entries: Vec<EntryOutput> = document
            .palette()
            .numbered()
            .map(|(index, entry)| EntryOutput {
                index,
                hex: entry.hex.clone(),
                lightness: entry.lightness,
                position: entry.position,
            })
            .collect();

        if self.json {
            return print_json(&PaletteOutput {
                height: document.height(),
                entries,
                query: document.to_query(),
            });
        }

        if entries.is_empty() {
            println!("Palette is empty.");
        } else {
            println!("Palette ({} entries)", entries.len());
            for entry in &entries {
                println!(
                    "{:>3}. {}  L{:<3}  position {}",
                    entry.index, entry.hex, entry.lightness, entry.position
                );
            }
        }
        println!();
        println!("State: {}", document.to_query());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn args(keys: &[&str], positions: Vec<u32>, lightness: Vec<u8>) -> PaletteArgs {
        PaletteArgs {
            document: DocumentArgs {
                keys: keys.iter().map(|k| (*k).to_string()).collect(),
                state: None,
                height: Some(1000),
            },
            positions,
            lightness,
            json: false,
        }
    }

    #[test]
    fn test_apply_pins() {
        let args = args(&["3366CC"], vec![900, 100], vec![50]);
        let mut doc = args.document.build(&Config::new()).unwrap();
        args.apply(&mut doc).unwrap();
        let positions: Vec<u32> = doc.palette().entries().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![100, 500, 900]);
    }

    #[test]
    fn test_apply_rejects_pins_without_keys() {
        let args = args(&[], vec![10], vec![]);
        let mut doc = args.document.build(&Config::new()).unwrap();
        assert!(args.apply(&mut doc).is_err());
    }

    #[test]
    fn test_apply_rejects_out_of_range_lightness() {
        let args = args(&["3366CC"], vec![], vec![101]);
        let mut doc = args.document.build(&Config::new()).unwrap();
        assert!(args.apply(&mut doc).is_err());
    }
}
