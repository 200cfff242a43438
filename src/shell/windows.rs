//! Windows argv splitting, following the Microsoft C runtime rules.
//!
//! Backslashes are only special when a run of them ends in a double quote:
//! an even run collapses by half and the quote toggles quoting, an odd run
//! collapses by half and the quote becomes literal.

use super::split::{Malformation, SplitError};

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn push_backslashes(buf: &mut String, count: usize) {
    buf.extend(std::iter::repeat_n('\\', count));
}

/// Split a command line the way `CommandLineToArgvW` would.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open = false;
    let mut quoted = false;
    let mut backslashes = 0usize;

    for c in input.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                push_backslashes(&mut current, backslashes / 2);
                let escaped = backslashes % 2 == 1;
                backslashes = 0;
                open = true;
                if escaped {
                    current.push('"');
                } else {
                    quoted = !quoted;
                }
            }
            _ if is_delimiter(c) && !quoted => {
                push_backslashes(&mut current, backslashes);
                if backslashes > 0 {
                    open = true;
                    backslashes = 0;
                }
                if open {
                    tokens.push(std::mem::take(&mut current));
                    open = false;
                }
            }
            _ => {
                push_backslashes(&mut current, backslashes);
                backslashes = 0;
                open = true;
                current.push(c);
            }
        }
    }

    if quoted {
        return Err(SplitError::malformed(Malformation::UnterminatedQuote, input));
    }

    if backslashes > 0 {
        push_backslashes(&mut current, backslashes);
        open = true;
    }

    if open {
        tokens.push(current);
    }

    Ok(tokens)
}
