//! Output formatting and response generation.

mod redaction;
mod response;

pub use redaction::{contains_secrets, redact_secrets};
pub use response::{SplitResponse, format_response};
