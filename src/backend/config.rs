//! Conversion options

/// Options for [`convert`](crate::backend::convert).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Wrap the output in an Emscripten runtime module (`declare module Module { ... }`) and
    /// materialize enums as runtime constants plus accessor functions.
    pub emscripten: bool,
}

impl ConvertOptions {
    /// Create options with default settings (plain declarations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable Emscripten module output.
    pub fn with_emscripten(mut self, emscripten: bool) -> Self {
        self.emscripten = emscripten;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_declarations() {
        assert!(!ConvertOptions::default().emscripten);
        assert_eq!(ConvertOptions::new(), ConvertOptions::default());
    }

    #[test]
    fn test_with_emscripten() {
        let options = ConvertOptions::new().with_emscripten(true);
        assert!(options.emscripten);
        assert!(!options.with_emscripten(false).emscripten);
    }
}
