//! Command definitions
//!
//! Builds outgoing command lines:
//!
//! ```text
//! channeledit cid=5 channel_name=Lobby\sTwo -permanent\n
//! ```

use std::fmt;

use crate::error::{QueryError, Result};
use super::escape;

/// An outgoing command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: String,
    parts: Vec<String>,
}

impl Command {
    /// Start a command with the given verb (e.g. `channellist`)
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            parts: Vec::new(),
        }
    }

    /// Append `key=value`, escaping the value
    pub fn arg(mut self, key: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        self.parts.push(format!("{}={}", key, escape::encode(&value)));
        self
    }

    /// Append a bare option such as `-permanent`
    pub fn flag(mut self, name: &str) -> Self {
        self.parts.push(format!("-{}", name));
        self
    }

    /// Append an already serialized attribute string verbatim
    pub fn attributes(mut self, serialized: impl Into<String>) -> Self {
        let serialized = serialized.into();
        if !serialized.is_empty() {
            self.parts.push(serialized);
        }
        self
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Render the command as a single `\n`-terminated line
    pub fn to_line(&self) -> Result<String> {
        if self.verb.is_empty() {
            return Err(QueryError::Protocol("Empty command verb".to_string()));
        }

        let mut line = self.verb.clone();
        for part in &self.parts {
            line.push(' ');
            line.push_str(part);
        }

        if line.contains(['\n', '\r']) {
            return Err(QueryError::Protocol(format!(
                "Command contains a line break: {:?}",
                line
            )));
        }

        line.push('\n');
        Ok(line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for part in &self.parts {
            write!(f, " {}", part)?;
        }
        Ok(())
    }
}
