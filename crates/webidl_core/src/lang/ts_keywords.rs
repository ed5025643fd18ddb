//! TypeScript reserved words (for emitted identifier checks).

/// Words that cannot name a `const` in a TypeScript declaration file: ECMAScript reserved words plus
/// the strict-mode and module reservations that apply to ambient declarations.
pub const TS_RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "new", "null",
    "return", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
    "implements", "interface", "let", "package", "private", "protected", "public", "static", "yield", "await",
];

/// Check whether an identifier is reserved in TypeScript.
pub fn is_reserved(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved("default"));
        assert!(is_reserved("delete"));
        assert!(is_reserved("await"));
        assert!(!is_reserved("Default"));
        assert!(!is_reserved("number"));
        assert!(!is_reserved("type"));
    }
}
