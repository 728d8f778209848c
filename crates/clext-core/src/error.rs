//! Error taxonomy for the scaffolding flow
//!
//! Everything here is fatal and unrecovered: the documented recovery path
//! is rerunning the tool. User cancellation is not an error and never
//! reaches this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// git is a hard prerequisite for fetching templates.
    #[error("git is not installed or not on PATH")]
    GitMissing,

    /// A git invocation ran but exited non-zero (network failure, bad
    /// sparse path, dirty working directory, ...).
    #[error("`{command}` failed: {details}")]
    Git { command: String, details: String },

    /// A package manager invocation failed or could not be spawned.
    #[error("`{command}` failed: {details}")]
    Install { command: String, details: String },

    #[error("invalid template repository URL `{url}`")]
    InvalidTemplateUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
