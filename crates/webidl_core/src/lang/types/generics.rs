//! Builtin generic type constructors (`sequence<T>`, `Promise<T>`, `record<K, V>`, ...).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `arity` is the number of type arguments the constructor takes.
//!
//! ## Examples
//! ```rust
//! use webidl_core::lang::registry::Support;
//! use webidl_core::lang::types::generics::{self, GenericTypeId};
//!
//! assert_eq!(generics::from_str("sequence"), Some(GenericTypeId::Sequence));
//! assert_eq!(generics::arity(GenericTypeId::Record), 2);
//! assert_eq!(generics::support(GenericTypeId::ObservableArray), Support::Recognized);
//! ```

use crate::lang::registry::Support;

/// Stable identifier for generic type constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericTypeId {
    Sequence,
    FrozenArray,
    ObservableArray,
    Promise,
    Record,
}

/// Metadata for a generic type constructor.
#[derive(Debug, Clone, Copy)]
pub struct GenericTypeInfo {
    pub id: GenericTypeId,
    pub canonical: &'static str,
    pub arity: usize,
    pub support: Support,
    pub description: &'static str,
}

/// Registry of generic type constructors.
pub const GENERIC_TYPES: &[GenericTypeInfo] = &[
    GenericTypeInfo {
        id: GenericTypeId::Sequence,
        canonical: "sequence",
        arity: 1,
        support: Support::Mapped,
        description: "Owned list, emitted as `T[]`.",
    },
    GenericTypeInfo {
        id: GenericTypeId::FrozenArray,
        canonical: "FrozenArray",
        arity: 1,
        support: Support::Mapped,
        description: "Immutable list, emitted as `ReadonlyArray<T>`.",
    },
    GenericTypeInfo {
        id: GenericTypeId::ObservableArray,
        canonical: "ObservableArray",
        arity: 1,
        support: Support::Recognized,
        description: "Live list with mutation hooks; no declaration mapping.",
    },
    GenericTypeInfo {
        id: GenericTypeId::Promise,
        canonical: "Promise",
        arity: 1,
        support: Support::Mapped,
        description: "Asynchronous result, emitted as `Promise<T>`.",
    },
    GenericTypeInfo {
        id: GenericTypeId::Record,
        canonical: "record",
        arity: 2,
        support: Support::Mapped,
        description: "String-keyed map, emitted as `Record<K, V>`.",
    },
];

/// Resolve a spelling to a [`GenericTypeId`].
pub fn from_str(name: &str) -> Option<GenericTypeId> {
    GENERIC_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Canonical spelling.
pub fn as_str(id: GenericTypeId) -> &'static str {
    info_for(id).canonical
}

/// Number of type arguments.
pub fn arity(id: GenericTypeId) -> usize {
    info_for(id).arity
}

/// Backend support level.
pub fn support(id: GenericTypeId) -> Support {
    info_for(id).support
}

/// Full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: GenericTypeId) -> &'static GenericTypeInfo {
    GENERIC_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("generic type info missing")
}
