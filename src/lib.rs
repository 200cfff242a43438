//! argsplit - portable command-line splitting.
//!
//! Splits a single configured command string into argv tokens using either
//! POSIX shell word-splitting or Windows C runtime rules, plus a handful of
//! cross-platform normalization helpers.

pub mod audit;
pub mod compat;
pub mod config;
pub mod input;
pub mod outcome;
pub mod output;
pub mod shell;

pub use compat::CompatError;
pub use config::{Config, ResolvedConfig};
pub use input::SplitRequest;
pub use outcome::Outcome;
pub use output::format_response;
pub use shell::{Platform, SplitError, shell_split, shell_split_for};
