//! Export command for writing a palette as CSS, SVG, JSON or a query string.

use crate::cli::common::{load_config, CliError, CliResult, DocumentArgs};
use crate::export::{self, ExportFormat};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Export the palette
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write to an auto-named file (palette_export_[date].[ext])
    #[arg(long)]
    pub save: bool,

    /// Copy the export to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let document = self.document.build(&config)?;
        let format = self.format.unwrap_or(config.export.default_format);

        let content = export::render(format, &document, &config.export)
            .map_err(|e| CliError::io(format!("Failed to render {format} export: {e}")))?;

        if content.is_empty() {
            return Err(CliError::validation(
                "Palette is empty; nothing to export. Pin entries with `palette --at` or pass --state",
            ));
        }

        if self.copy {
            arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(content.clone()))
                .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))?;
            eprintln!("✓ Copied {} to clipboard", format.label());
        }

        match self.get_output_path(format) {
            Some(path) => {
                fs::write(&path, &content)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                info!("Exported {} entries as {format}", document.palette().len());
                println!("✓ Exported palette to: {}", path.display());
            }
            None if !self.copy => println!("{content}"),
            None => {}
        }

        Ok(())
    }

    /// Get the output file path (user-specified, auto-generated, or none for stdout)
    fn get_output_path(&self, format: ExportFormat) -> Option<PathBuf> {
        if let Some(ref path) = self.output {
            return Some(path.clone());
        }
        if !self.save {
            return None;
        }

        // Auto-generate filename: palette_export_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        Some(PathBuf::from(format!(
            "palette_export_{}.{}",
            date,
            format.extension()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<PathBuf>, save: bool) -> ExportArgs {
        ExportArgs {
            document: DocumentArgs::default(),
            format: None,
            output,
            save,
            copy: false,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(None, true).get_output_path(ExportFormat::Svg).unwrap();
        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("palette_export_"));
        assert!(path_str.ends_with(".svg"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_palette.css");
        let path = args(Some(custom_path.clone()), false).get_output_path(ExportFormat::Css);
        assert_eq!(path, Some(custom_path));
    }

    #[test]
    fn test_get_output_path_stdout() {
        assert_eq!(args(None, false).get_output_path(ExportFormat::Css), None);
    }
}
