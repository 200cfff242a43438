//! Command-line splitting for POSIX and Windows dialects.

mod platform;
mod posix;
mod split;
mod windows;

pub use platform::Platform;
pub use split::{Malformation, SplitError, join, shell_split, shell_split_for};
