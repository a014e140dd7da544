//! Status line
//!
//! Every response ends with a status line:
//!
//! ```text
//! error id=<decimal> msg=<escaped text>[ extra_attr=<value> ...]
//! ```
//!
//! `id == 0` means the command succeeded.

use std::fmt;

use crate::entity::codec::parse_uint32;
use crate::error::{QueryError, Result};
use super::escape;

/// Leading token of a status line
pub const STATUS_TOKEN: &str = "error";

/// Result of one command round trip
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    /// Status code (0 = success)
    pub id: u32,

    /// Human-readable message (unescaped)
    pub message: String,
}

impl Status {
    /// Parse a status line
    ///
    /// Attributes other than `id` and `msg` are ignored so that servers
    /// adding fields (`extra_msg`, `failed_permid`, ...) stay compatible.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut tokens = line.split(' ');

        if tokens.next() != Some(STATUS_TOKEN) {
            return Err(QueryError::Protocol(format!(
                "Not a status line: {:?}",
                line
            )));
        }

        let mut id = None;
        let mut message = String::new();

        for token in tokens {
            let (key, value) = match token.split_once('=') {
                Some((key, value)) if !value.contains('=') => (key, value),
                _ => {
                    return Err(QueryError::Protocol(format!(
                        "Malformed status attribute {:?} in: {:?}",
                        token, line
                    )))
                }
            };

            match key {
                "id" => id = Some(parse_uint32(key, value)?),
                "msg" => message = escape::decode(value)?,
                _ => {}
            }
        }

        let id = id.ok_or_else(|| {
            QueryError::Protocol(format!("Status line without id: {:?}", line))
        })?;

        Ok(Self { id, message })
    }

    /// True when the command succeeded
    pub fn is_success(&self) -> bool {
        self.id == 0
    }

    /// Convert into a `Result`, mapping a failure code to [`QueryError::Remote`]
    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(QueryError::Remote {
                id: self.id,
                message: self.message,
            })
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}
