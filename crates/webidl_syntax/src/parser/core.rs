/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at member
///   (`;` / `}`) and definition (`;`) boundaries, so one run reports every problem.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `webidl_syntax::lexer` (must end with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns every [`CompileError`] collected during the run if any definition failed to parse.
    pub fn parse(mut self) -> Result<Program, Vec<CompileError>> {
        let mut definitions = Vec::new();

        while !self.is_at_end() {
            match self.definition() {
                Ok(def) => definitions.push(def),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_definition();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Program { definitions })
        } else {
            Err(self.errors)
        }
    }
}
