//! Entity schemas
//!
//! A schema is a static table of field descriptors for one entity kind.
//! Each descriptor binds a wire key to a typed getter/setter pair on the
//! entity, so the codec can walk any entity without reflection.

use std::fmt;

/// Wire type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    UInt32,
    Int32,
    Bool,
    String,
}

/// Whether an edit may change the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    /// Identifiers and server-maintained values
    Immutable,
}

/// Typed get/set binding to a field on `E`
pub enum Accessor<E: 'static> {
    UInt32 {
        get: fn(&E) -> u32,
        set: fn(&mut E, u32),
    },
    Int32 {
        get: fn(&E) -> i32,
        set: fn(&mut E, i32),
    },
    Bool {
        get: fn(&E) -> bool,
        set: fn(&mut E, bool),
    },
    String {
        get: fn(&E) -> &str,
        set: fn(&mut E, String),
    },
}

impl<E: 'static> Accessor<E> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Accessor::UInt32 { .. } => FieldKind::UInt32,
            Accessor::Int32 { .. } => FieldKind::Int32,
            Accessor::Bool { .. } => FieldKind::Bool,
            Accessor::String { .. } => FieldKind::String,
        }
    }
}

/// Describes one field of an entity kind
pub struct FieldDescriptor<E: 'static> {
    /// Identifier used by callers when selecting fields
    pub ident: &'static str,

    /// Attribute name on the wire
    pub wire_name: &'static str,

    pub mutability: Mutability,

    pub accessor: Accessor<E>,
}

impl<E: 'static> FieldDescriptor<E> {
    pub fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }

    pub fn is_mutable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }
}

impl<E: 'static> fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("ident", &self.ident)
            .field("wire_name", &self.wire_name)
            .field("kind", &self.kind())
            .field("mutability", &self.mutability)
            .finish()
    }
}

/// Ordered descriptor table for one entity kind
pub struct Schema<E: 'static> {
    name: &'static str,
    fields: &'static [FieldDescriptor<E>],
}

impl<E: 'static> Schema<E> {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor<E>]) -> Self {
        Self { name, fields }
    }

    /// Entity kind name (for diagnostics)
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor<E>] {
        self.fields
    }

    /// Find a descriptor by its wire key
    pub fn by_wire_name(&self, wire_name: &str) -> Option<&'static FieldDescriptor<E>> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// Find a descriptor by its field identifier
    pub fn by_ident(&self, ident: &str) -> Option<&'static FieldDescriptor<E>> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    /// Identifiers of all fields an edit may change, in schema order
    pub fn mutable_idents(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_mutable())
            .map(|f| f.ident)
            .collect()
    }

    /// First wire key or identifier that appears twice, if any
    pub fn find_duplicate(&self) -> Option<&'static str> {
        for (i, field) in self.fields.iter().enumerate() {
            for other in &self.fields[i + 1..] {
                if field.wire_name == other.wire_name {
                    return Some(field.wire_name);
                }
                if field.ident == other.ident {
                    return Some(field.ident);
                }
            }
        }
        None
    }
}

impl<E: 'static> fmt::Debug for Schema<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A record type described by a static schema
pub trait Entity: Default + 'static {
    fn schema() -> &'static Schema<Self>;
}

/// Build a [`FieldDescriptor`] bound to a struct field.
///
/// ```
/// use ts3query::entity::{Entity, FieldDescriptor, Schema};
/// use ts3query::field;
///
/// #[derive(Default)]
/// struct Server {
///     sid: u32,
///     name: String,
/// }
///
/// static SERVER_FIELDS: [FieldDescriptor<Server>; 2] = [
///     field!(sid: UInt32 => "virtualserver_id", immutable),
///     field!(name: String => "virtualserver_name"),
/// ];
///
/// static SERVER_SCHEMA: Schema<Server> = Schema::new("server", &SERVER_FIELDS);
///
/// impl Entity for Server {
///     fn schema() -> &'static Schema<Self> {
///         &SERVER_SCHEMA
///     }
/// }
/// ```
#[macro_export]
macro_rules! field {
    ($ident:ident : $kind:ident => $wire:literal) => {
        $crate::field!(@build $ident, $kind, $wire, Mutable)
    };
    ($ident:ident : $kind:ident => $wire:literal, immutable) => {
        $crate::field!(@build $ident, $kind, $wire, Immutable)
    };
    (@build $ident:ident, String, $wire:literal, $mutability:ident) => {
        $crate::entity::FieldDescriptor {
            ident: stringify!($ident),
            wire_name: $wire,
            mutability: $crate::entity::Mutability::$mutability,
            accessor: $crate::entity::Accessor::String {
                get: |e| e.$ident.as_str(),
                set: |e, v| e.$ident = v,
            },
        }
    };
    (@build $ident:ident, $kind:ident, $wire:literal, $mutability:ident) => {
        $crate::entity::FieldDescriptor {
            ident: stringify!($ident),
            wire_name: $wire,
            mutability: $crate::entity::Mutability::$mutability,
            accessor: $crate::entity::Accessor::$kind {
                get: |e| e.$ident,
                set: |e, v| e.$ident = v,
            },
        }
    };
}
