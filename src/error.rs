use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for csssprite operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(csssprite::io))]
    Io { path: PathBuf, message: String },

    #[error("Metadata query failed for {path}: {message}")]
    #[diagnostic(code(csssprite::metadata))]
    Metadata {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Composition failed at {stage}: {message}")]
    #[diagnostic(code(csssprite::compose))]
    Compose { stage: String, message: String },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(csssprite::sink))]
    Sink { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(csssprite::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
