//! WebIDL vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, punctuation,
//! builtin (primitive) types and builtin generic type constructors. `ts_keywords` lists the TypeScript
//! words an emitted identifier must avoid.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PrimitiveTypeId`) and look up spellings and
//! metadata via const registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings for shared use (diagnostics, mapping).
//!
//! ## Examples
//! ```rust
//! use webidl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("interface"), Some(KeywordId::Interface));
//! assert_eq!(keywords::as_str(KeywordId::Maplike), "maplike");
//! ```

pub mod keywords;
pub mod punctuation;
pub mod registry;
pub mod ts_keywords;
pub mod types;
