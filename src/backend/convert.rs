//! Document assembly: parse, emit every definition in source order, join.

use super::config::ConvertOptions;
use super::declarations::emit_definition;
use super::emscripten::{self, EnumRegistry};
use super::errors::{ConvertError, UnsupportedConstructError};
use super::writer::DeclWriter;
use webidl_syntax::ast::{Definition, Program};

/// Translate a WebIDL document into TypeScript declaration text.
///
/// The output joins lines with `\n` and has no trailing newline. Conversion is deterministic and
/// keeps no state between calls.
///
/// ## Errors
/// - [`ConvertError::Parse`] if the text is not valid WebIDL.
/// - [`ConvertError::Unsupported`] if a definition uses a construct with no mapping.
///
/// ## Examples
/// ```rust
/// use webidl_dts_gen::backend::{ConvertOptions, convert};
///
/// let ts = convert("interface Foo {\n    attribute long? bar;\n};", ConvertOptions::default()).unwrap();
/// assert_eq!(ts, "interface Foo {\n    bar: number | null;\n}");
/// ```
#[tracing::instrument(skip_all, fields(source_len = idl.len(), emscripten = options.emscripten))]
pub fn convert(idl: &str, options: ConvertOptions) -> Result<String, ConvertError> {
    let program = webidl_syntax::parse_definitions(idl)?;
    Ok(emit_program(&program, options)?)
}

/// Emit an already parsed definition tree.
pub fn emit_program(program: &Program, options: ConvertOptions) -> Result<String, UnsupportedConstructError> {
    let mut out = DeclWriter::new();

    if options.emscripten {
        let mut enums = EnumRegistry::new();
        emscripten::open_module(&mut out);
        for def in &program.definitions {
            match &def.node {
                Definition::Enum(decl) => emscripten::emit_enum(decl, &mut enums, &mut out)?,
                _ => emit_definition(def, &mut out)?,
            }
        }
        emscripten::close_module(&mut out);
    } else {
        for def in &program.definitions {
            emit_definition(def, &mut out)?;
        }
    }

    let text = out.finish();
    tracing::debug!(definitions = program.definitions.len(), bytes = text.len(), "emitted declarations");
    Ok(text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(convert("", ConvertOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_empty_document_emscripten_has_module() {
        let ts = convert("", ConvertOptions::new().with_emscripten(true)).unwrap();
        assert_eq!(ts, format!("{}\n}}", emscripten::PREAMBLE));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = convert("interface Foo {", ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn test_unsupported_error_yields_no_output() {
        let err = convert(
            "interface A {\n};\ninterface B {\n    getter long (unsigned long i);\n};",
            ConvertOptions::default(),
        )
        .unwrap_err();
        match err {
            ConvertError::Unsupported(e) => {
                assert_eq!(e.definition, "B");
                assert_eq!(e.construct, "getter declaration");
            }
            other => panic!("expected unsupported construct, got {:?}", other),
        }
    }

    #[test]
    fn test_emscripten_interfaces_are_indented_inside_module() {
        let ts = convert(
            "interface Foo {\n    attribute unsigned long[] bar;\n};",
            ConvertOptions::new().with_emscripten(true),
        )
        .unwrap();
        assert!(ts.ends_with("\n    interface Foo {\n        bar: ReadonlyArray<number>;\n    }\n}"));
    }
}
