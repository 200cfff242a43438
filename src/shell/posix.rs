//! POSIX shell word-splitting (shlex-like, no expansion).

use super::split::{Malformation, SplitError};

/// Lexer position relative to quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Split a command line into words, respecting quotes and escapes.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // A quoted fragment opens a word even if it contributes no characters.
    let mut open = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => {
                        return Err(SplitError::malformed(
                            Malformation::UnterminatedQuote,
                            input,
                        ));
                    }
                },
                _ => current.push(c),
            },
            Quote::None => {
                if is_delimiter(c) {
                    if open {
                        tokens.push(std::mem::take(&mut current));
                        open = false;
                    }
                    continue;
                }

                open = true;
                match c {
                    '\\' => match chars.next() {
                        Some(next) => current.push(next),
                        None => {
                            return Err(SplitError::malformed(
                                Malformation::TrailingEscape,
                                input,
                            ));
                        }
                    },
                    '\'' => quote = Quote::Single,
                    '"' => quote = Quote::Double,
                    _ => current.push(c),
                }
            }
        }
    }

    if quote != Quote::None {
        return Err(SplitError::malformed(Malformation::UnterminatedQuote, input));
    }

    if open {
        tokens.push(current);
    }

    Ok(tokens)
}
