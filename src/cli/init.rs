//! Init command implementation.
//!
//! Generates a starter `sprite.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::MANIFEST_FILENAME;
use crate::error::{Result, SpriteError};
use crate::output::{display_path, Printer};

/// Initialize a sprite project by generating a sprite.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing sprite.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SpriteError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // Built by hand for clean formatting and comments
    let yaml = "\
source_directory: .
filter: \"*.png\"
image_file: icon-sprite.png
# css_file: icons.css
# html_file: preview.html
";

    fs::write(&manifest_path, yaml).map_err(|e| SpriteError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}
