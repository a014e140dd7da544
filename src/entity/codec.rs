//! Entity codec
//!
//! Converts between wire attribute strings and typed entities, driven by a
//! [`Schema`].
//!
//! ## Deserialize
//! ```text
//! "cid=1 pid channel_name=Lobby\sOne"
//!   -> cid   = 1
//!   -> pid   = 0        (bare key, empty value)
//!   -> name  = "Lobby One"
//! ```
//!
//! ## Serialize
//! Only the caller's selected fields are emitted, in the caller's order, so
//! an edit never overwrites remote state it did not mean to touch.

use crate::error::{QueryError, Result};
use crate::protocol::{decode, encode};
use super::schema::{Accessor, Entity, FieldDescriptor, Schema};

/// Purpose of a serialize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeMode {
    /// Arguments for an edit command; immutable fields are rejected
    Edit,
    /// Any field may be emitted
    Snapshot,
}

// =============================================================================
// Value Parsing
// =============================================================================

/// Parse an unsigned 32-bit decimal
pub(crate) fn parse_uint32(key: &str, value: &str) -> Result<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_number(key, value));
    }
    value.parse().map_err(|_| invalid_number(key, value))
}

/// Parse a signed 32-bit decimal
pub(crate) fn parse_int32(key: &str, value: &str) -> Result<i32> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_number(key, value));
    }
    value.parse().map_err(|_| invalid_number(key, value))
}

/// Parse a `0`/`1` flag
pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(QueryError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn invalid_number(key: &str, value: &str) -> QueryError {
    QueryError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    }
}

// =============================================================================
// Deserialize
// =============================================================================

impl<E: 'static> Schema<E> {
    /// Apply an attribute string to `target`
    ///
    /// Stops at the first failing token. Fields assigned before it keep
    /// their new values; use [`Schema::deserialize_atomic`] when that is
    /// not acceptable.
    pub fn deserialize(&self, attributes: &str, target: &mut E) -> Result<()> {
        if attributes.is_empty() {
            return Ok(());
        }

        for token in attributes.split(' ') {
            // A bare key carries an empty value
            let (key, raw) = token.split_once('=').unwrap_or((token, ""));

            let field = self.by_wire_name(key).ok_or_else(|| QueryError::UnknownAttribute {
                key: key.to_string(),
                attributes: attributes.to_string(),
            })?;

            assign(field, raw, target)?;
        }

        Ok(())
    }

    /// Like [`Schema::deserialize`], but `target` is only updated when the
    /// whole attribute string applies cleanly
    pub fn deserialize_atomic(&self, attributes: &str, target: &mut E) -> Result<()>
    where
        E: Clone,
    {
        let mut scratch = target.clone();
        self.deserialize(attributes, &mut scratch)?;
        *target = scratch;
        Ok(())
    }

    /// Deserialize into a fresh entity
    pub fn deserialize_new(&self, attributes: &str) -> Result<E>
    where
        E: Default,
    {
        let mut entity = E::default();
        self.deserialize(attributes, &mut entity)?;
        Ok(entity)
    }

    // =========================================================================
    // Serialize
    // =========================================================================

    /// Render the selected fields as `wire_name=value` pairs
    pub fn serialize(&self, entity: &E, idents: &[&str], mode: SerializeMode) -> Result<String> {
        if idents.is_empty() {
            return Err(QueryError::EmptyFieldList);
        }

        let mut pairs = Vec::with_capacity(idents.len());

        for ident in idents {
            let field = self
                .by_ident(ident)
                .ok_or_else(|| QueryError::UnknownField(ident.to_string()))?;

            if mode == SerializeMode::Edit && !field.is_mutable() {
                return Err(QueryError::ImmutableField(field.ident.to_string()));
            }

            pairs.push(format!("{}={}", field.wire_name, render(field, entity)));
        }

        Ok(pairs.join(" "))
    }
}

/// Convert `raw` by the field's kind and store it
///
/// An empty value resets the field: zero, false or the empty string.
fn assign<E: 'static>(field: &FieldDescriptor<E>, raw: &str, target: &mut E) -> Result<()> {
    let key = field.wire_name;

    match &field.accessor {
        Accessor::UInt32 { set, .. } => {
            let value = if raw.is_empty() { 0 } else { parse_uint32(key, raw)? };
            set(target, value);
        }
        Accessor::Int32 { set, .. } => {
            let value = if raw.is_empty() { 0 } else { parse_int32(key, raw)? };
            set(target, value);
        }
        Accessor::Bool { set, .. } => {
            let value = if raw.is_empty() { false } else { parse_bool(key, raw)? };
            set(target, value);
        }
        Accessor::String { set, .. } => set(target, decode(raw)?),
    }

    Ok(())
}

fn render<E: 'static>(field: &FieldDescriptor<E>, entity: &E) -> String {
    match &field.accessor {
        Accessor::UInt32 { get, .. } => get(entity).to_string(),
        Accessor::Int32 { get, .. } => get(entity).to_string(),
        Accessor::Bool { get, .. } => String::from(if get(entity) { "1" } else { "0" }),
        Accessor::String { get, .. } => encode(get(entity)),
    }
}

// =============================================================================
// Entity Shortcuts
// =============================================================================

/// Apply an attribute string to an entity using its own schema
pub fn deserialize<E: Entity>(attributes: &str, target: &mut E) -> Result<()> {
    E::schema().deserialize(attributes, target)
}

/// Serialize the selected fields of an entity using its own schema
pub fn serialize<E: Entity>(entity: &E, idents: &[&str], mode: SerializeMode) -> Result<String> {
    E::schema().serialize(entity, idents, mode)
}
