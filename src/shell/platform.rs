//! Platform identifiers and the quoting dialect they select.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::split::SplitError;

/// Identifiers that select the Windows argv dialect.
const WINDOWS_NAMES: &[&str] = &["win32", "windows", "nt"];

/// Platform families that use POSIX shell word-splitting. Release digits
/// (`linux2`, `freebsd14`, `sunos5`) are stripped before comparison.
const POSIX_FAMILIES: &[&str] = &[
    "posix", "unix", "linux", "darwin", "macos", "freebsd", "openbsd", "netbsd", "sunos",
    "cygwin", "aix",
];

/// The quoting dialect used to split a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// POSIX shell word-splitting.
    Posix,
    /// Microsoft C runtime argv parsing.
    Windows,
}

impl Platform {
    /// The dialect of the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = s.trim().to_ascii_lowercase();
        if WINDOWS_NAMES.contains(&ident.as_str()) {
            return Ok(Platform::Windows);
        }

        let family = ident.trim_end_matches(|c: char| c.is_ascii_digit());
        if !family.is_empty() && POSIX_FAMILIES.contains(&family) {
            return Ok(Platform::Posix);
        }

        Err(SplitError::UnknownPlatform(s.to_string()))
    }
}
