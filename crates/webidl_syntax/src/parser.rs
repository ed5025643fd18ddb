//! Parser for WebIDL
//!
//! Converts a token stream into the definition tree ([`Program`]) consumed by the declaration backend.
//!
//! ## Examples
//!
//! ```rust
//! use webidl_syntax::{lexer, parser};
//!
//! let source = "interface Foo {\n    void bar();\n};";
//! let tokens = lexer::lex(source).unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.definitions.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use webidl_core::lang::keywords::KeywordId;
use webidl_core::lang::punctuation::PunctuationId;
use webidl_core::lang::types::primitives;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/members.rs");
include!("parser/types.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
