use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxError {
    #[error("Unsupported category: {name}")]
    #[diagnostic(
        code(pxgen::category),
        help("Supported categories: character, monster, prop, weapon, scene, map, ui")
    )]
    UnsupportedCategory { name: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(pxgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pxgen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(pxgen::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, PxError>;
