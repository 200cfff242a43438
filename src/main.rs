//! argsplit entry point: one JSON request on stdin, tokens on stdout.

use argsplit::audit::{AuditContext, AuditLogger};
use argsplit::config::Config;
use argsplit::input::SplitRequest;
use argsplit::outcome::Outcome;
use argsplit::output::format_response;
use argsplit::shell::shell_split;

use chrono::Utc;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let default_level = "error";
    let env_filter = EnvFilter::try_from_env("ARGSPLIT_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn fail(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {}", message);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_tracing();
    let started = Utc::now();

    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        return fail(e);
    }

    let request = match SplitRequest::parse(&input_str) {
        Ok(v) => v,
        Err(e) => return fail(e),
    };

    let cwd = std::env::current_dir().ok();
    let config = match Config::load(cwd.as_deref()).and_then(Config::resolve) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };

    let platform = match config.platform_for(request.platform.as_deref()) {
        Ok(p) => p,
        Err(e) => return fail(e),
    };

    let command_line = match request.command_line() {
        Ok(c) => c,
        Err(e) => return fail(e),
    };

    let outcome = Outcome::from_result(platform, shell_split(&command_line, platform));
    debug!(%platform, rejected = outcome.is_rejected(), "request handled");

    if config.raw.audit.enabled
        && let Some(path) = &config.raw.audit.path
    {
        let ctx = AuditContext {
            timezone: config.timezone,
            digest_policy: config.digest_policy,
        };
        let logged = AuditLogger::open(Path::new(path), ctx).and_then(|mut logger| {
            logger.log_outcome(
                &command_line,
                request.session_id.as_deref(),
                &outcome,
                started,
            )
        });
        if let Err(e) = logged {
            warn!(path = %path, error = %e, "failed to write audit entry");
        }
    }

    let response = format_response(&outcome);
    if outcome.is_rejected() {
        eprintln!("{}", response);
        ExitCode::from(2)
    } else {
        println!("{}", response);
        ExitCode::SUCCESS
    }
}
