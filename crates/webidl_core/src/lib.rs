//! Provide the canonical WebIDL vocabulary shared by the syntax frontend and the declaration backend.
//!
//! This crate is intentionally small and dependency-free. It answers two kinds of questions:
//! - "is this spelling a reserved WebIDL word / punctuation token?" (used by the lexer and parser), and
//! - "what does this WebIDL builtin type spell as in TypeScript?" (used by the type mapper).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Lookups return stable IDs so callers avoid stringly-typed checks.
//!
//! ## Examples
//! ```rust
//! use webidl_core::lang::types::primitives;
//!
//! assert_eq!(primitives::ts_spelling("unsigned long"), Some("number"));
//! assert_eq!(primitives::ts_spelling("MyInterface"), None);
//! ```

pub mod lang;
