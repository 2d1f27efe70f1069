//! Build manifest (sprite.yaml) parsing.
//!
//! The manifest describes one sprite build: where the icons live, which
//! files to include, and which artifacts to produce. Every field has a
//! default, and CLI flags override manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "sprite.yaml";

/// Specification for one sprite build, loaded from sprite.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSpec {
    /// Directory containing the source icons.
    pub source_directory: PathBuf,

    /// Glob-style filename filter for selecting icons.
    pub filter: String,

    /// Output path for the sprite image.
    pub image_file: PathBuf,

    /// Output path for the stylesheet; skipped when absent.
    pub css_file: Option<PathBuf>,

    /// Output path for the HTML preview page; skipped when absent.
    pub html_file: Option<PathBuf>,
}

fn default_filter() -> String {
    "*.png".to_string()
}

fn default_image_file() -> PathBuf {
    PathBuf::from("icon-sprite.png")
}

impl Default for SpriteSpec {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from("."),
            filter: default_filter(),
            image_file: default_image_file(),
            css_file: None,
            html_file: None,
        }
    }
}

impl SpriteSpec {
    /// Load a spec from a sprite.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a spec from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SpriteError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sprite.yaml syntax".to_string()),
        })
    }

    /// Basename of the sprite file, as referenced from the stylesheet.
    /// The stylesheet is expected to live alongside the sprite.
    pub fn sprite_name(&self) -> String {
        self.image_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.image_file.display().to_string())
    }
}
