//! Cross-platform normalization helpers.

mod digest;
mod text;
mod time;

pub use digest::{DigestPolicy, Md5, get_md5, md5_hex};
pub use text::{ensure_bytes, ensure_bytes_of, unquote_str};
pub use time::{TzFactory, TzInfo, total_seconds, tzinfo_options};

use thiserror::Error;

/// Errors raised by the compatibility helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatError {
    #[error("expected text or bytes, found {found}")]
    UnsupportedCoercionType { found: &'static str },

    #[error("{algorithm} is not available in restricted mode")]
    DigestUnavailable { algorithm: &'static str },
}
