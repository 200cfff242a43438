//! Audit logging for split requests.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::compat::{DigestPolicy, TzInfo, ensure_bytes_of, md5_hex, total_seconds};
use crate::outcome::Outcome;
use crate::output::{contains_secrets, redact_secrets};
use crate::shell::Platform;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<FixedOffset>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub platform: Platform,
    /// Whether the command line split cleanly.
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
    /// Reason for rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Command line with secrets scrubbed.
    pub summary: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub redacted: bool,
    /// MD5 of the raw command line, absent in restricted mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub elapsed_seconds: f64,
}

/// Context shared by every entry a logger writes.
#[derive(Debug, Clone, Copy)]
pub struct AuditContext {
    pub timezone: TzInfo,
    pub digest_policy: DigestPolicy,
}

impl AuditEntry {
    /// Create a new audit entry for a command line and its outcome.
    pub fn new(
        command_line: &str,
        session_id: Option<&str>,
        outcome: &Outcome,
        started: DateTime<Utc>,
        ctx: AuditContext,
    ) -> Self {
        let finished = Utc::now();
        let (ok, token_count, reason) = match outcome {
            Outcome::Split(info) => (true, Some(info.tokens.len()), None),
            Outcome::Rejected(info) => (false, None, Some(redact_secrets(&info.reason))),
        };

        let redacted = contains_secrets(command_line);
        let summary = truncate_string(&redact_secrets(command_line), 200);

        Self {
            timestamp: ctx.timezone.from_utc(finished),
            session_id: session_id.map(String::from),
            platform: outcome.platform(),
            ok,
            token_count,
            reason,
            summary,
            redacted,
            fingerprint: md5_hex(ctx.digest_policy, ensure_bytes_of(command_line)).ok(),
            elapsed_seconds: total_seconds(finished - started),
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
    ctx: AuditContext,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path, ctx: AuditContext) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, ctx })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log the outcome of one request.
    pub fn log_outcome(
        &mut self,
        command_line: &str,
        session_id: Option<&str>,
        outcome: &Outcome,
        started: DateTime<Utc>,
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(command_line, session_id, outcome, started, self.ctx);
        self.log(&entry)
    }
}
