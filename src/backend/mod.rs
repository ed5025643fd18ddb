//! Declaration backend
//!
//! Turns the WebIDL definition tree from `webidl_syntax` into TypeScript declaration text.
//!
//! The pipeline is:
//! 1. `webidl_syntax::parse_definitions` → [`Program`](webidl_syntax::ast::Program)
//! 2. Each definition → declaration lines ([`declarations`], or [`emscripten`] for enums in Emscripten mode)
//! 3. Lines joined in source order ([`convert`])
//!
//! ## Module Organization
//!
//! - `config.rs` - [`ConvertOptions`]
//! - `errors.rs` - [`UnsupportedConstructError`] and [`ConvertError`]
//! - `type_map.rs` - WebIDL type reference → TypeScript type text
//! - `declarations.rs` - interface/namespace/enum/dictionary/typedef/callback emission
//! - `emscripten.rs` - runtime module preamble and enum materialization
//! - `writer.rs` - indentation-aware line writer
//! - `convert.rs` - document assembly and the public entry point

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod convert;
pub mod declarations;
pub mod emscripten;
pub mod errors;
pub mod type_map;
pub mod writer;

pub use config::ConvertOptions;
pub use convert::{convert, emit_program};
pub use errors::{ConvertError, UnsupportedConstructError};
