//! List responses
//!
//! List commands return every entity on one logical line, separated by
//! `|`:
//!
//! ```text
//! cid=1 channel_name=Lobby|cid=2 channel_name=AFK|cid=3 channel_name=Games
//! ```

use crate::error::Result;
use super::schema::{Entity, Schema};

/// Entity separator within a list body
pub const ENTITY_SEPARATOR: char = '|';

impl<E: Default + 'static> Schema<E> {
    /// Split a list body and deserialize each entity
    ///
    /// An empty body yields an empty list. The first failing segment fails
    /// the whole call; a partially filled list is never returned.
    pub fn deserialize_list(&self, body: &str) -> Result<Vec<E>> {
        if body.is_empty() {
            return Ok(Vec::new());
        }

        body.split(ENTITY_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.deserialize_new(segment))
            .collect()
    }
}

/// Deserialize a list body using the entity's own schema
pub fn deserialize_list<E: Entity>(body: &str) -> Result<Vec<E>> {
    E::schema().deserialize_list(body)
}
