//! Request parsing for the splitter binary.

use serde::Deserialize;
use thiserror::Error;

use crate::compat::{CompatError, ensure_bytes, unquote_str};

/// Errors that can occur when parsing a split request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported command value: {0}")]
    Coercion(#[from] CompatError),

    #[error("command is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// How the command text is encoded in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Plain,
    /// Percent-encoded, `+` for spaces.
    Percent,
}

/// A request read from stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitRequest {
    /// The command line: a string or an array of UTF-8 bytes.
    pub command: serde_json::Value,

    /// Platform identifier (e.g., "win32", "linux").
    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub encoding: Encoding,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

impl SplitRequest {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The command line to split, decoded.
    pub fn command_line(&self) -> Result<String, InputError> {
        let bytes = ensure_bytes(&self.command)?;
        let text = String::from_utf8(bytes.into_owned())?;
        Ok(match self.encoding {
            Encoding::Plain => text,
            Encoding::Percent => unquote_str(&text),
        })
    }
}
