//! MD5 contexts gated by a restricted-crypto policy.

use md5::Digest;
use once_cell::sync::Lazy;
use std::fs;
use tracing::warn;

pub use md5::Md5;

use super::CompatError;

/// Kernel switch that reports FIPS mode on Linux.
const FIPS_SWITCH: &str = "/proc/sys/crypto/fips_enabled";

static DETECTED: Lazy<DigestPolicy> = Lazy::new(|| DigestPolicy {
    restricted: fips_enabled(),
});

fn fips_enabled() -> bool {
    fs::read_to_string(FIPS_SWITCH)
        .map(|s| s.trim() == "1")
        .unwrap_or(false)
}

/// Whether non-approved digests may be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigestPolicy {
    /// Restricted (FIPS-like) mode: MD5 is disabled.
    pub restricted: bool,
}

impl DigestPolicy {
    pub fn permissive() -> Self {
        Self { restricted: false }
    }

    pub fn restricted() -> Self {
        Self { restricted: true }
    }

    /// Policy reported by the host, read once per process.
    pub fn detect() -> Self {
        *DETECTED
    }

    pub fn md5_available(&self) -> bool {
        !self.restricted
    }
}

/// Create a fresh MD5 context, or fail if the policy disables MD5.
pub fn get_md5(policy: DigestPolicy) -> Result<Md5, CompatError> {
    if !policy.md5_available() {
        warn!("md5 requested while restricted mode is active");
        return Err(CompatError::DigestUnavailable { algorithm: "md5" });
    }
    Ok(Md5::new())
}

/// Lowercase hex MD5 of `data`.
pub fn md5_hex(policy: DigestPolicy, data: &[u8]) -> Result<String, CompatError> {
    let mut hasher = get_md5(policy)?;
    hasher.update(data);
    Ok(format!("{:x}", hasher.finalize()))
}
