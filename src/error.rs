use serde::{Serialize, Deserialize};
use std::fmt;

/// Failure categories. Commands decide what is fatal based on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ErrorKind {
    /// File unreadable for reasons other than absence
    #[error("io")]
    Io,
    /// Valid file with the wrong shape, or malformed content in a log file
    #[error("corrupt_data")]
    CorruptData,
    /// No API key configured
    #[error("auth")]
    Auth,
    /// Network failure talking to the suggestion service
    #[error("transport")]
    Transport,
    /// Suggestion service answered with a non-success status
    #[error("upstream")]
    Upstream,
    /// Response or file content could not be parsed
    #[error("parse")]
    Parse,
    /// Bad or unreadable configuration
    #[error("config")]
    Config,
}

/// Unified error type for the whole crate.
/// Every fallible function returns Result<T, LeetError>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeetError {
    pub kind: ErrorKind,
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl LeetError {
    /// Create a new error with kind, message and stage
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S, stage: &'static str) -> Self {
        LeetError {
            kind,
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    pub fn io<S: Into<String>>(message: S, stage: &'static str) -> Self {
        Self::new(ErrorKind::Io, message, stage)
    }

    pub fn corrupt<S: Into<String>>(message: S, stage: &'static str) -> Self {
        Self::new(ErrorKind::CorruptData, message, stage)
    }

    pub fn parse<S: Into<String>>(message: S, stage: &'static str) -> Self {
        Self::new(ErrorKind::Parse, message, stage)
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Errors the suggestion loop answers with another, stricter attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Transport | ErrorKind::Upstream | ErrorKind::Parse
        )
    }
}

impl fmt::Display for LeetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for LeetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<anyhow::Error> for LeetError {
    fn from(err: anyhow::Error) -> Self {
        LeetError::new(ErrorKind::Io, format!("{:#}", err), "startup").with_source("anyhow")
    }
}

impl From<std::io::Error> for LeetError {
    fn from(err: std::io::Error) -> Self {
        LeetError::io(format!("I/O error: {}", err), "io").with_source("std::io")
    }
}

impl From<serde_json::Error> for LeetError {
    fn from(err: serde_json::Error) -> Self {
        LeetError::parse(format!("JSON error: {}", err), "json_parse").with_source("serde_json")
    }
}

impl From<reqwest::Error> for LeetError {
    fn from(err: reqwest::Error) -> Self {
        LeetError::new(ErrorKind::Transport, format!("HTTP error: {}", err), "http")
            .with_source("reqwest")
    }
}
