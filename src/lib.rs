#![forbid(unsafe_code)]
//! webidl-dts-gen: TypeScript declarations from WebIDL
//!
//! Translates a WebIDL document into an ambient TypeScript declaration document (`.d.ts`), optionally
//! wrapped in the runtime module an Emscripten build exposes.
//!
//! ## Crates
//!
//! - `webidl_core` - vocabulary registries (keywords, punctuation, builtin types)
//! - `webidl_syntax` - lexer, parser, definition tree, diagnostics
//! - this crate - the declaration backend and the CLI
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use webidl_dts_gen::{ConvertOptions, convert};
//!
//! let ts = convert("enum Foo { \"bar\", \"baz\" };", ConvertOptions::default()).unwrap();
//! assert_eq!(ts, "type Foo = \"bar\" | \"baz\";");
//! ```

pub mod backend;
pub mod cli;

pub use webidl_syntax::ast;
pub use webidl_syntax::diagnostics;

pub use backend::{ConvertError, ConvertOptions, UnsupportedConstructError, convert};
