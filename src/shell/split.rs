//! Dialect dispatch for command-line splitting.

use thiserror::Error;
use tracing::debug;

use super::platform::Platform;
use super::{posix, windows};

/// Why a command line could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// A quote was opened and never closed.
    UnterminatedQuote,
    /// The input ended on an escape character with nothing to escape.
    TrailingEscape,
}

impl Malformation {
    pub fn describe(&self) -> &'static str {
        match self {
            Malformation::UnterminatedQuote => "no closing quotation",
            Malformation::TrailingEscape => "no escaped character",
        }
    }
}

/// Errors that can occur when splitting a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("malformed command line ({}): {command_line}", .reason.describe())]
    MalformedCommandLine {
        reason: Malformation,
        command_line: String,
    },

    #[error("unknown platform identifier '{0}'")]
    UnknownPlatform(String),
}

impl SplitError {
    pub(crate) fn malformed(reason: Malformation, command_line: &str) -> Self {
        SplitError::MalformedCommandLine {
            reason,
            command_line: command_line.to_string(),
        }
    }

    /// The malformation reason, if this is a parse failure.
    pub fn malformation(&self) -> Option<Malformation> {
        match self {
            SplitError::MalformedCommandLine { reason, .. } => Some(*reason),
            SplitError::UnknownPlatform(_) => None,
        }
    }
}

/// Split a command line into argv tokens using the given platform's rules.
pub fn shell_split(command_line: &str, platform: Platform) -> Result<Vec<String>, SplitError> {
    debug!(%platform, len = command_line.len(), "splitting command line");
    match platform {
        Platform::Posix => posix::split(command_line),
        Platform::Windows => windows::split(command_line),
    }
}

/// Split a command line, naming the platform by identifier (`win32`, `linux2`, ...).
pub fn shell_split_for(command_line: &str, platform: &str) -> Result<Vec<String>, SplitError> {
    shell_split(command_line, platform.parse()?)
}

/// Join tokens with single spaces. No quoting is added.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_newline() {
        assert_eq!(
            shell_split("spam\neggs", Platform::Windows).unwrap(),
            vec!["spam\neggs"]
        );
        assert_eq!(
            shell_split("spam\neggs", Platform::Posix).unwrap(),
            vec!["spam", "eggs"]
        );
    }

    #[test]
    fn test_split_for_identifier() {
        assert_eq!(shell_split_for(r"\\", "win32").unwrap(), vec![r"\\"]);
        assert_eq!(shell_split_for(r"\\", "linux2").unwrap(), vec![r"\"]);
    }

    #[test]
    fn test_unknown_platform_fails_before_parsing() {
        let err = shell_split_for("\"", "beos").unwrap_err();
        assert!(matches!(err, SplitError::UnknownPlatform(_)));
        assert!(err.malformation().is_none());
    }

    #[test]
    fn test_malformed_message() {
        let err = shell_split("\"abc", Platform::Posix).unwrap_err();
        assert_eq!(err.malformation(), Some(Malformation::UnterminatedQuote));
        assert!(err.to_string().contains("no closing quotation"));
        assert!(err.to_string().contains("\"abc"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["ls", "-la", "/tmp"]), "ls -la /tmp");
        assert_eq!(join::<&str>(&[]), "");
    }
}
