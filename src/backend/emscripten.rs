//! Emscripten runtime module generation
//!
//! With Emscripten output enabled, the document is wrapped in an ambient `Module` declaration that
//! describes the runtime (factory function, allocator, heap views) and every enum is materialized
//! as runtime constants, a `typeof` union alias and one accessor function per member.
//!
//! Enum members declared in a C++ namespace (`"ns::bar"`) are exposed under their bare identifier
//! (`bar`). One constant is declared per identifier per document; [`EnumRegistry`] tracks which ones
//! already exist so a second enum reusing `bar` only references it.

use std::collections::HashSet;

use super::errors::UnsupportedConstructError;
use super::writer::DeclWriter;
use webidl_core::lang::ts_keywords;
use webidl_syntax::ast::EnumDecl;

/// Runtime factory and the body of the module declaration up to the first enum.
pub const PREAMBLE: &str = "\
declare function Module<T>(target?: T): Promise<T & typeof Module>;
declare module Module {
    function destroy(obj: any): void;
    function _malloc(size: number): number;
    function _free(ptr: number): void;
    const HEAP8: Int8Array;
    const HEAP16: Int16Array;
    const HEAP32: Int32Array;
    const HEAPU8: Uint8Array;
    const HEAPU16: Uint16Array;
    const HEAPU32: Uint32Array;
    const HEAPF32: Float32Array;
    const HEAPF64: Float64Array;";

/// Enum member identifiers already declared as module constants in the current document.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    declared: HashSet<String>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`; returns `true` the first time it is seen.
    pub fn declare(&mut self, id: &str) -> bool {
        if self.declared.contains(id) {
            return false;
        }
        self.declared.insert(id.to_string())
    }
}

/// Write the preamble and leave the writer inside the module body.
pub fn open_module(out: &mut DeclWriter) {
    out.write_block(PREAMBLE);
    out.indent();
}

/// Close the module body opened by [`open_module`].
pub fn close_module(out: &mut DeclWriter) {
    out.dedent();
    out.writeln("}");
}

/// Bare identifier of an enum literal: everything after the last `::`.
pub fn enum_identifier(literal: &str) -> &str {
    match literal.rfind("::") {
        Some(idx) => &literal[idx + 2..],
        None => literal,
    }
}

/// Emit constants (first occurrence only), the `typeof` alias and accessors for one enum.
///
/// ## Errors
/// A member whose identifier is not a valid TypeScript identifier, or is a reserved word, cannot
/// become a constant.
pub fn emit_enum(decl: &EnumDecl, registry: &mut EnumRegistry, out: &mut DeclWriter) -> Result<(), UnsupportedConstructError> {
    let mut ids = Vec::with_capacity(decl.values.len());
    for value in &decl.values {
        let id = enum_identifier(&value.node);
        if !is_ts_identifier(id) {
            return Err(UnsupportedConstructError::new(
                format!("enum value \"{}\" (not an identifier after removing its namespace)", value.node),
                value.span,
            )
            .within(&decl.name, None));
        }
        if ts_keywords::is_reserved(id) {
            return Err(UnsupportedConstructError::new(
                format!("enum value \"{}\" ('{}' is a reserved word)", value.node, id),
                value.span,
            )
            .within(&decl.name, None));
        }
        ids.push(id);
    }

    for id in &ids {
        if registry.declare(id) {
            out.writeln(&format!("const {}: unknown;", id));
        } else {
            tracing::debug!(enum_name = %decl.name, id = %id, "reusing enum constant");
        }
    }

    let alias: Vec<String> = ids.iter().map(|id| format!("typeof {}", id)).collect();
    out.writeln(&format!("type {} = {};", decl.name, alias.join(" | ")));

    for id in &ids {
        out.writeln(&format!("function _emscripten_enum_{}_{}(): {};", decl.name, id, decl.name));
    }
    Ok(())
}

fn is_ts_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use webidl_syntax::ast::{Span, Spanned};

    fn enum_decl(name: &str, values: &[&str]) -> EnumDecl {
        EnumDecl {
            name: name.to_string(),
            values: values
                .iter()
                .map(|v| Spanned::new(v.to_string(), Span::default()))
                .collect(),
        }
    }

    #[test]
    fn test_enum_identifier_strips_namespace() {
        assert_eq!(enum_identifier("namespace::bar"), "bar");
        assert_eq!(enum_identifier("a::b::baz"), "baz");
        assert_eq!(enum_identifier("plain"), "plain");
    }

    #[test]
    fn test_preamble_lines() {
        let lines: Vec<&str> = PREAMBLE.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "declare function Module<T>(target?: T): Promise<T & typeof Module>;");
        assert_eq!(lines[12], "    const HEAPF64: Float64Array;");
    }

    #[test]
    fn test_module_wrapping() {
        let mut out = DeclWriter::new();
        open_module(&mut out);
        out.writeln("const x: unknown;");
        close_module(&mut out);
        let text = out.finish();
        assert!(text.starts_with(PREAMBLE));
        assert!(text.ends_with("\n    const x: unknown;\n}"));
    }

    #[test]
    fn test_emit_enum_declares_constants_once() {
        let mut registry = EnumRegistry::new();
        let mut out = DeclWriter::new();
        emit_enum(&enum_decl("Foo", &["ns::bar", "ns::baz"]), &mut registry, &mut out).unwrap();
        emit_enum(&enum_decl("Bar", &["ns::bar", "qux"]), &mut registry, &mut out).unwrap();
        assert_eq!(
            out.finish(),
            [
                "const bar: unknown;",
                "const baz: unknown;",
                "type Foo = typeof bar | typeof baz;",
                "function _emscripten_enum_Foo_bar(): Foo;",
                "function _emscripten_enum_Foo_baz(): Foo;",
                "const qux: unknown;",
                "type Bar = typeof bar | typeof qux;",
                "function _emscripten_enum_Bar_bar(): Bar;",
                "function _emscripten_enum_Bar_qux(): Bar;",
            ]
            .join("\n")
        );
        assert_eq!(registry.declared.len(), 3);
        assert!(registry.declared.contains("qux"));
    }

    #[test]
    fn test_non_identifier_enum_value_rejected() {
        let mut registry = EnumRegistry::new();
        let mut out = DeclWriter::new();
        let err = emit_enum(&enum_decl("Mode", &["read-write"]), &mut registry, &mut out).unwrap_err();
        assert_eq!(err.definition, "Mode");
        assert!(registry.declared.is_empty());
    }

    #[test]
    fn test_reserved_word_enum_value_rejected() {
        let mut registry = EnumRegistry::new();
        let mut out = DeclWriter::new();
        let err = emit_enum(&enum_decl("Mode", &["ns::default", "ns::delete"]), &mut registry, &mut out).unwrap_err();
        assert_eq!(err.definition, "Mode");
        assert_eq!(err.construct, "enum value \"ns::default\" ('default' is a reserved word)");
        assert!(registry.declared.is_empty());
        assert_eq!(out.finish(), "");
    }
}
