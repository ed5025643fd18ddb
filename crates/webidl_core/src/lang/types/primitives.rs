//! Primitive (builtin, non-generic) WebIDL type vocabulary.
//!
//! Every entry records the WebIDL spelling (possibly multi-word, e.g. `unsigned long long`) and the TypeScript
//! spelling the declaration backend emits for it.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `DOMString` is builtin, `domstring` is a user type.
//! - Multi-word spellings use a single ASCII space between words; the parser normalizes to that form.
//! - Names not in this table are user-defined references and pass through the type mapper unchanged.
//!
//! ## Examples
//! ```rust
//! use webidl_core::lang::types::primitives::{self, PrimitiveFamily, PrimitiveTypeId};
//!
//! assert_eq!(primitives::from_str("unrestricted double"), Some(PrimitiveTypeId::UnrestrictedDouble));
//! assert_eq!(primitives::family(PrimitiveTypeId::Octet), PrimitiveFamily::Numeric);
//! assert_eq!(primitives::ts_spelling("DOMString"), Some("string"));
//! ```

/// Stable identifier for primitive builtin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    Void,
    Undefined,
    Boolean,

    // Numeric family
    Byte,
    Octet,
    Short,
    UnsignedShort,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    UnrestrictedFloat,
    Double,
    UnrestrictedDouble,
    Bigint,

    // String family
    DomString,
    ByteString,
    UsvString,

    // Opaque
    Any,
    Object,
    Symbol,
    /// Emscripten WebIDL binder raw pointer.
    VoidPtr,
}

/// Coarse grouping of primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveFamily {
    Void,
    Boolean,
    Numeric,
    String,
    Opaque,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveTypeId,
    pub canonical: &'static str,
    pub family: PrimitiveFamily,
    /// TypeScript spelling.
    pub ts: &'static str,
}

/// Registry of primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveTypeId::Void, "void", PrimitiveFamily::Void, "void"),
    info(PrimitiveTypeId::Undefined, "undefined", PrimitiveFamily::Void, "undefined"),
    info(PrimitiveTypeId::Boolean, "boolean", PrimitiveFamily::Boolean, "boolean"),
    // Numeric family
    info(PrimitiveTypeId::Byte, "byte", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Octet, "octet", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Short, "short", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::UnsignedShort, "unsigned short", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Long, "long", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::UnsignedLong, "unsigned long", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::LongLong, "long long", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::UnsignedLongLong, "unsigned long long", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Float, "float", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::UnrestrictedFloat, "unrestricted float", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Double, "double", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::UnrestrictedDouble, "unrestricted double", PrimitiveFamily::Numeric, "number"),
    info(PrimitiveTypeId::Bigint, "bigint", PrimitiveFamily::Numeric, "bigint"),
    // String family
    info(PrimitiveTypeId::DomString, "DOMString", PrimitiveFamily::String, "string"),
    info(PrimitiveTypeId::ByteString, "ByteString", PrimitiveFamily::String, "string"),
    info(PrimitiveTypeId::UsvString, "USVString", PrimitiveFamily::String, "string"),
    // Opaque
    info(PrimitiveTypeId::Any, "any", PrimitiveFamily::Opaque, "any"),
    info(PrimitiveTypeId::Object, "object", PrimitiveFamily::Opaque, "object"),
    info(PrimitiveTypeId::Symbol, "symbol", PrimitiveFamily::Opaque, "symbol"),
    info(PrimitiveTypeId::VoidPtr, "VoidPtr", PrimitiveFamily::Opaque, "unknown"),
];

/// Words that only ever appear as the first word of a multi-word primitive.
pub const PREFIX_WORDS: &[&str] = &["unsigned", "unrestricted"];

/// Resolve a (normalized) WebIDL spelling to a [`PrimitiveTypeId`].
pub fn from_str(name: &str) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Canonical WebIDL spelling.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

/// Family of a primitive.
pub fn family(id: PrimitiveTypeId) -> PrimitiveFamily {
    info_for(id).family
}

/// TypeScript spelling for a WebIDL base name, if it is a builtin.
pub fn ts_spelling(name: &str) -> Option<&'static str> {
    from_str(name).map(|id| info_for(id).ts)
}

/// Return `true` if `word` must be followed by another word to form a primitive (`unsigned`, `unrestricted`).
pub fn is_prefix_word(word: &str) -> bool {
    PREFIX_WORDS.contains(&word)
}

/// Full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("primitive type info missing")
}

const fn info(id: PrimitiveTypeId, canonical: &'static str, family: PrimitiveFamily, ts: &'static str) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        family,
        ts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_family_maps_to_number() {
        for t in PRIMITIVE_TYPES {
            if t.family == PrimitiveFamily::Numeric && t.id != PrimitiveTypeId::Bigint {
                assert_eq!(t.ts, "number", "{} should map to number", t.canonical);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("DOMString"), Some(PrimitiveTypeId::DomString));
        assert_eq!(from_str("domstring"), None);
        assert_eq!(from_str("Long"), None);
    }

    #[test]
    fn test_prefix_words() {
        assert!(is_prefix_word("unsigned"));
        assert!(is_prefix_word("unrestricted"));
        assert!(!is_prefix_word("long"));
    }
}
