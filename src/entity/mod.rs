//! Entity Module
//!
//! Schema-driven marshaling between wire attribute strings and typed
//! records.
//!
//! ## Layout
//! - `schema`  - field descriptors and the [`Entity`] trait
//! - `codec`   - deserialize / selective serialize
//! - `list`    - `|`-separated multi-entity bodies
//! - `channel` - the channel entity

mod channel;
pub(crate) mod codec;
mod list;
mod schema;

pub use channel::Channel;
pub use codec::{deserialize, serialize, SerializeMode};
pub use list::{deserialize_list, ENTITY_SEPARATOR};
pub use schema::{Accessor, Entity, FieldDescriptor, FieldKind, Mutability, Schema};
