//! String escaping for projected fields.
//!
//! Exactly five characters are escaped: `"`, `\`, line feed, carriage return
//! and tab. Every other character, including the remaining ASCII control
//! characters, is written through unchanged.

use std::borrow::Cow;

use thiserror::Error;

/// The characters that [`escape`] rewrites.
pub const RESERVED: [char; 5] = ['"', '\\', '\n', '\r', '\t'];

/// Error returned by [`unescape`] for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("Trailing backslash at byte {offset}")]
    TrailingBackslash { offset: usize },

    #[error("Unknown escape sequence '{sequence}' at byte {offset}")]
    UnknownEscape { sequence: String, offset: usize },
}

/// Maps a reserved character to the letter that follows the backslash.
fn escape_code(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        _ => None,
    }
}

fn unescape_code(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Escapes the reserved characters. Borrows when nothing needs escaping.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(RESERVED) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match escape_code(c) {
            Some(code) => {
                out.push('\\');
                out.push(code);
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`escape`].
pub fn unescape(input: &str) -> Result<Cow<'_, str>, UnescapeError> {
    if !input.contains('\\') {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, code)) = chars.next() else {
            return Err(UnescapeError::TrailingBackslash { offset });
        };
        match unescape_code(code) {
            Some(decoded) => out.push(decoded),
            None => {
                return Err(UnescapeError::UnknownEscape {
                    sequence: format!("\\{code}"),
                    offset,
                });
            }
        }
    }
    Ok(Cow::Owned(out))
}
