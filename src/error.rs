use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tint operations
#[derive(Error, Diagnostic, Debug)]
pub enum TintError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tint::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid hex colour: {input}")]
    #[diagnostic(
        code(tint::invalid_format),
        help("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format")
    )]
    InvalidFormat { input: String },

    #[error("Colour {name} does not exist")]
    #[diagnostic(code(tint::unknown_colour))]
    UnknownColourName {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tint::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tint::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TintError {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        TintError::InvalidFormat {
            input: input.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        TintError::Parse {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TintError>;
