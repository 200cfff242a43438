//! Secret redaction for logged command lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Common secret patterns to redact.
const SECRET_PATTERNS: &[(&str, &str)] = &[
    // API keys and tokens
    (
        r#"(?i)(api[_-]?key|apikey)(\s*[:=]\s*|\s+)['"]?([a-zA-Z0-9_\-]{20,})['"]?"#,
        "$1=<REDACTED>",
    ),
    (
        r#"(?i)(access[_-]?token|auth[_-]?token)(\s*[:=]\s*|\s+)['"]?([a-zA-Z0-9_\-\.]{20,})['"]?"#,
        "$1=<REDACTED>",
    ),
    // Bearer tokens
    (r"(?i)(bearer\s+)([a-zA-Z0-9_\-\.]{20,})", "$1<REDACTED>"),
    // AWS
    (r"AKIA[0-9A-Z]{16}", "<AWS_ACCESS_KEY_REDACTED>"),
    // GitHub
    (r"ghp_[a-zA-Z0-9]{36}", "<GITHUB_TOKEN_REDACTED>"),
    (r"github_pat_[a-zA-Z0-9_]{22,}", "<GITHUB_PAT_REDACTED>"),
    // Passwords, as `--password=...` or `--password ...`
    (
        r#"(?i)(password|passwd)(\s*[:=]\s*|\s+)['"]?([^\s'"]{8,})['"]?"#,
        "$1=<REDACTED>",
    ),
    // Credentials embedded in URLs
    (r"(?i)([a-z][a-z0-9+.\-]*://[^\s:/@]+):[^\s@/]+@", "$1:<REDACTED>@"),
];

static SECRET_RES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SECRET_PATTERNS
        .iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, *replacement)))
        .collect()
});

/// Redact secrets from a command line.
pub fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for (re, replacement) in SECRET_RES.iter() {
        result = re.replace_all(&result, *replacement).to_string();
    }
    result
}

/// Check if a command line contains potential secrets.
pub fn contains_secrets(text: &str) -> bool {
    SECRET_RES.iter().any(|(re, _)| re.is_match(text))
}
