//! Value escaping
//!
//! String values travel with their reserved bytes replaced by two-byte
//! tokens so that spaces, pipes and line breaks never collide with the
//! attribute grammar.
//!
//! ```text
//! raw   \    /    ' '  |    BEL  BS   FF   LF   CR   HT   VT
//! wire  \\   \/   \s   \p   \a   \b   \f   \n   \r   \t   \v
//! ```
//!
//! Both directions are a single left-to-right scan, so a token produced for
//! one byte can never be re-matched as part of another.

use crate::error::{QueryError, Result};

/// Escape marker byte
const MARKER: char = '\\';

/// Wire token character for a reserved raw character
fn token_for(raw: char) -> Option<char> {
    let token = match raw {
        '\\' => '\\',
        '/' => '/',
        ' ' => 's',
        '|' => 'p',
        '\x07' => 'a',
        '\x08' => 'b',
        '\x0C' => 'f',
        '\n' => 'n',
        '\r' => 'r',
        '\t' => 't',
        '\x0B' => 'v',
        _ => return None,
    };
    Some(token)
}

/// Raw character for a wire token character
fn raw_for(token: char) -> Option<char> {
    let raw = match token {
        '\\' => '\\',
        '/' => '/',
        's' => ' ',
        'p' => '|',
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        _ => return None,
    };
    Some(raw)
}

/// Escape a raw value for the wire
pub fn encode(raw: &str) -> String {
    let mut wire = String::with_capacity(raw.len() + raw.len() / 4);

    for c in raw.chars() {
        match token_for(c) {
            Some(token) => {
                wire.push(MARKER);
                wire.push(token);
            }
            None => wire.push(c),
        }
    }

    wire
}

/// Unescape a wire value
///
/// A trailing lone `\` is copied verbatim. A `\` followed by anything
/// other than a known token fails with [`QueryError::InvalidEscape`].
pub fn decode(wire: &str) -> Result<String> {
    // Fast path: nothing to unescape
    if !wire.contains(MARKER) {
        return Ok(wire.to_string());
    }

    let mut raw = String::with_capacity(wire.len());
    let mut chars = wire.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != MARKER {
            raw.push(c);
            continue;
        }

        match chars.next() {
            Some((_, token)) => match raw_for(token) {
                Some(decoded) => raw.push(decoded),
                None => {
                    return Err(QueryError::InvalidEscape {
                        position,
                        found: token,
                    })
                }
            },
            None => raw.push(MARKER),
        }
    }

    Ok(raw)
}
