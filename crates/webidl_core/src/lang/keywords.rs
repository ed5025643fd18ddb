//! Define the reserved keyword vocabulary for WebIDL.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and backend support.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (WebIDL keywords are).
//! - WebIDL allows most keywords as argument and attribute names; the parser decides when a keyword token may stand
//!   in for an identifier.
//! - Builtin type names (`long`, `DOMString`, ...) are *not* keywords here. They live in
//!   [`crate::lang::types::primitives`] and lex as identifiers.
//!
//! ## Examples
//! ```rust
//! use webidl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("namespace"), Some(KeywordId::Namespace));
//! assert_eq!(keywords::as_str(KeywordId::Setlike), "setlike");
//! assert_eq!(keywords::from_str("Namespace"), None);
//! ```

use super::registry::{Example, Support};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Definitions
    Interface,
    Namespace,
    Enum,
    Dictionary,
    Typedef,
    Callback,
    Partial,
    Mixin,
    Includes,
    Implements,

    // Members
    Attribute,
    Const,
    Constructor,
    Maplike,
    Setlike,
    Iterable,
    Getter,
    Setter,
    Deleter,
    Stringifier,

    // Modifiers
    Readonly,
    Static,
    Async,
    Inherit,
    Optional,
    Required,

    // Type syntax
    Or,

    // Literals
    True,
    False,
    Null,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Definition,
    Member,
    Modifier,
    TypeSyntax,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub support: Support,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Definitions
    info(KeywordId::Interface, "interface", KeywordCategory::Definition),
    info(KeywordId::Namespace, "namespace", KeywordCategory::Definition),
    info(KeywordId::Enum, "enum", KeywordCategory::Definition),
    info(KeywordId::Dictionary, "dictionary", KeywordCategory::Definition),
    info(KeywordId::Typedef, "typedef", KeywordCategory::Definition),
    info(KeywordId::Callback, "callback", KeywordCategory::Definition),
    info(KeywordId::Partial, "partial", KeywordCategory::Definition),
    info(KeywordId::Mixin, "mixin", KeywordCategory::Definition),
    info(KeywordId::Includes, "includes", KeywordCategory::Definition),
    // Legacy Emscripten spelling of `includes`.
    info(KeywordId::Implements, "implements", KeywordCategory::Definition),
    // Members
    info(KeywordId::Attribute, "attribute", KeywordCategory::Member),
    info(KeywordId::Const, "const", KeywordCategory::Member),
    info(KeywordId::Constructor, "constructor", KeywordCategory::Member),
    info(KeywordId::Maplike, "maplike", KeywordCategory::Member),
    info(KeywordId::Setlike, "setlike", KeywordCategory::Member),
    recognized(KeywordId::Iterable, "iterable", KeywordCategory::Member),
    recognized(KeywordId::Getter, "getter", KeywordCategory::Member),
    recognized(KeywordId::Setter, "setter", KeywordCategory::Member),
    recognized(KeywordId::Deleter, "deleter", KeywordCategory::Member),
    recognized(KeywordId::Stringifier, "stringifier", KeywordCategory::Member),
    // Modifiers
    info(KeywordId::Readonly, "readonly", KeywordCategory::Modifier),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    recognized(KeywordId::Async, "async", KeywordCategory::Modifier),
    info(KeywordId::Inherit, "inherit", KeywordCategory::Modifier),
    info(KeywordId::Optional, "optional", KeywordCategory::Modifier),
    info(KeywordId::Required, "required", KeywordCategory::Modifier),
    // Type syntax
    info(KeywordId::Or, "or", KeywordCategory::TypeSyntax),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Backend support level.
pub fn support(id: KeywordId) -> Support {
    info_for(id).support
}

/// Full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        support: Support::Mapped,
        examples: &[],
    }
}

const fn recognized(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        support: Support::Recognized,
        ..info(id, canonical, category)
    }
}
