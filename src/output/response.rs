//! Response formatting for the splitter binary.

use serde::Serialize;

use crate::outcome::{Outcome, RejectInfo, SplitInfo};
use crate::shell::Platform;

/// JSON response for a successful split.
#[derive(Debug, Serialize)]
pub struct SplitResponse<'a> {
    pub platform: Platform,
    pub tokens: &'a [String],
}

/// Format an outcome: JSON for stdout on success, a message for stderr otherwise.
pub fn format_response(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Split(info) => format_split_json(info),
        Outcome::Rejected(info) => format_reject_message(info),
    }
}

fn format_split_json(info: &SplitInfo) -> String {
    let response = SplitResponse {
        platform: info.platform,
        tokens: &info.tokens,
    };
    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"platform":"{}","tokens":{:?}}}"#,
            info.platform, info.tokens
        )
    })
}

fn format_reject_message(info: &RejectInfo) -> String {
    format!("MALFORMED: {}", info.reason)
}
