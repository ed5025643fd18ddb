//! Declaration output writer with indentation tracking
//!
//! Lines are separated by `\n`; [`DeclWriter::finish`] drops the final separator so documents never
//! end with a newline.

/// Spaces per indentation level in generated declarations.
pub const INDENT_WIDTH: usize = 4;

/// Writer that tracks indentation and builds declaration text
#[derive(Debug, Default)]
pub struct DeclWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
}

impl DeclWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the output, without a trailing newline
    pub fn finish(mut self) -> String {
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one indented line
    pub fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent_level * INDENT_WIDTH {
            self.output.push(' ');
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Write a multi-line block, indenting every line at the current level
    pub fn write_block(&mut self, block: &str) {
        for line in block.lines() {
            self.writeln(line);
        }
    }

    /// Write `header`, then the body one level deeper, then `}`.
    pub fn braced<E>(&mut self, header: &str, body: impl FnOnce(&mut Self) -> Result<(), E>) -> Result<(), E> {
        self.writeln(header);
        self.indent();
        let result = body(self);
        self.dedent();
        self.writeln("}");
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(DeclWriter::new().finish(), "");
    }

    #[test]
    fn test_finish_strips_single_trailing_newline() {
        let mut w = DeclWriter::new();
        w.writeln("type A = number;");
        w.writeln("type B = string;");
        assert_eq!(w.finish(), "type A = number;\ntype B = string;");
    }

    #[test]
    fn test_indent_uses_four_spaces() {
        let mut w = DeclWriter::new();
        w.indent();
        w.writeln("bar(): void;");
        w.indent();
        w.writeln("x");
        assert_eq!(w.finish(), "    bar(): void;\n        x");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = DeclWriter::new();
        w.dedent();
        assert_eq!(w.indent_level, 0);
    }

    #[test]
    fn test_braced_restores_indent_on_error() {
        let mut w = DeclWriter::new();
        let result: Result<(), &str> = w.braced("interface Foo {", |w| {
            w.writeln("a: number;");
            Err("boom")
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(w.indent_level, 0);
    }

    #[test]
    fn test_write_block_indents_each_line() {
        let mut w = DeclWriter::new();
        w.indent();
        w.write_block("a\nb");
        assert_eq!(w.finish(), "    a\n    b");
    }
}
