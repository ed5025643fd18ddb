//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use webidl_syntax::{diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::backend::{ConvertError, ConvertOptions, convert};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Convert a WebIDL file and write the declarations to `output` (or stdout).
///
/// Written files end with a newline; the declaration text itself does not.
pub fn convert_file(input: &str, output: Option<&Path>, options: ConvertOptions) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let declarations = convert(&source, options).map_err(|err| CliError::failure(render_convert_error(input, &source, err)))?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", declarations))
                .map_err(|e| CliError::failure(format!("Error writing file '{}': {}", path.display(), e)))?;
            tracing::info!(input, output = %path.display(), emscripten = options.emscripten, "wrote declarations");
        }
        None => println!("{}", declarations),
    }
    Ok(ExitCode::SUCCESS)
}

/// Render a conversion failure with its source context.
///
/// The first problem gets a full `miette` report; further syntax errors are listed below it.
fn render_convert_error(file_path: &str, source: &str, err: ConvertError) -> String {
    let extra: Vec<diagnostics::CompileError> = match &err {
        ConvertError::Parse(parse) => parse.errors.iter().skip(1).cloned().collect(),
        ConvertError::Unsupported(_) => Vec::new(),
    };

    let report = Report::new(err).with_source_code(NamedSource::new(file_path, source.to_string()));
    let mut msg = format!("{:?}", report);
    for e in &extra {
        msg.push('\n');
        msg.push_str(&diagnostics::format_error(file_path, source, e));
    }
    msg.trim_end().to_string()
}

/// Render every diagnostic with plain-text source context.
fn format_errors(file_path: &str, source: &str, errs: &[diagnostics::CompileError]) -> String {
    let mut msg = String::new();
    for err in errs {
        msg.push_str(&diagnostics::format_error(file_path, source, err));
    }
    msg.trim_end().to_string()
}

/// Tokenize a file and print the tokens (debug).
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| CliError::failure(format_errors(file_path, &source, &errs)))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print the definition tree (debug).
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| CliError::failure(format_errors(file_path, &source, &errs)))?;

    match parser::parse(&tokens) {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(ExitCode::SUCCESS)
        }
        Err(errs) => Err(CliError::failure(format_errors(file_path, &source, &errs))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("webidl_dts_gen_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_convert_file_writes_trailing_newline() {
        let input = temp_path("ops.webidl");
        let output = temp_path("ops.d.ts");
        fs::write(&input, "interface Foo {\n    void bar();\n};\n").unwrap();

        let code = convert_file(&input.to_string_lossy(), Some(&output), ConvertOptions::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(fs::read_to_string(&output).unwrap(), "interface Foo {\n    bar(): void;\n}\n");

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_convert_file_reports_parse_errors() {
        let input = temp_path("broken.webidl");
        let output = temp_path("broken.d.ts");
        fs::write(&input, "interface Foo {\n    void bar(\n};\n").unwrap();

        let err = convert_file(&input.to_string_lossy(), Some(&output), ConvertOptions::default()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Expected type"), "got: {}", err.message);
        assert!(!output.exists(), "no output is written on failure");

        let _ = fs::remove_file(&input);
    }

    #[test]
    fn test_missing_file() {
        let err = read_source("/definitely/not/here.webidl").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_format_errors_lists_every_error() {
        let source = "interface Foo { # $ };";
        let errs = lexer::lex(source).unwrap_err();
        let msg = format_errors("in.webidl", source, &errs);
        assert_eq!(msg.matches("error: Unexpected character").count(), 2);
    }
}
