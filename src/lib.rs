//! csssprite - CSS icon-sprite generator
//!
//! Packs a directory of icon images into a single sprite image, generating
//! a stylesheet that maps each icon to its pixel offset within the sprite
//! and, optionally, an HTML preview page for visual verification.

pub mod cli;
pub mod compose;
pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod layout;
pub mod output;
pub mod types;

pub use compose::{build_sprite, compose_row, Compositor, ImageCompositor};
pub use config::SpriteSpec;
pub use discovery::{matches_filter, scan_images};
pub use emit::{render_preview, render_stylesheet};
pub use error::{Result, SpriteError};
pub use layout::plan;
pub use types::{GridShape, ImageDescriptor, Layout, PlacedIcon, RowImage};
