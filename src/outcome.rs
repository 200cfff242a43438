//! Outcome types for split requests.

use serde::Serialize;

use crate::shell::{Platform, SplitError};

/// The result of splitting one command line.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The command line split cleanly.
    Split(SplitInfo),
    /// The command line was malformed.
    Rejected(RejectInfo),
}

/// Tokens produced for a command line.
#[derive(Debug, Clone, Serialize)]
pub struct SplitInfo {
    pub platform: Platform,
    pub tokens: Vec<String>,
}

/// Information about why a command line was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct RejectInfo {
    pub platform: Platform,
    /// Human-readable reason. Never contains the command line itself.
    pub reason: String,
}

impl Outcome {
    /// Build an outcome from a split result.
    pub fn from_result(platform: Platform, result: Result<Vec<String>, SplitError>) -> Self {
        match result {
            Ok(tokens) => Outcome::Split(SplitInfo { platform, tokens }),
            Err(e) => Outcome::Rejected(RejectInfo {
                platform,
                reason: match e.malformation() {
                    Some(malformation) => malformation.describe().to_string(),
                    None => e.to_string(),
                },
            }),
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Outcome::Split(info) => info.platform,
            Outcome::Rejected(info) => info.platform,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            Outcome::Split(info) => Some(&info.tokens),
            Outcome::Rejected(_) => None,
        }
    }

}
