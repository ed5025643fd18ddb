/// Miscellaneous parser utilities.
///
/// Identifier and string literal handling plus skipping of default/constant values,
/// which never reach the declaration output.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("Expected identifier")),
        }
    }

    /// Parse an identifier, allowing keywords in positions where WebIDL permits them
    /// (attribute, operation, argument and dictionary member names).
    fn identifier_or_keyword(&mut self) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            TokenKind::Keyword(id) => {
                let name = webidl_core::lang::keywords::as_str(*id).to_string();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("Expected identifier")),
        }
    }

    /// Consume the identifier `word` if it is next (builtin type words are not keywords).
    fn match_ident(&mut self, word: &str) -> bool {
        if matches!(&self.peek().kind, TokenKind::Ident(name) if name == word) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn string_literal_spanned(&mut self) -> Result<Spanned<String>, CompileError> {
        match &self.peek().kind {
            TokenKind::String(s) => {
                let span = self.current_span();
                let s = s.clone();
                self.advance();
                Ok(Spanned::new(s, span))
            }
            _ => Err(self.error_here("Expected string literal")),
        }
    }

    /// Skip a default or constant value: a literal, `-Infinity`-style identifier, `[]` or `{}`.
    fn skip_default_value(&mut self) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::LBracket) {
            self.expect_punct(PunctuationId::RBracket, "Expected ']' in empty sequence default")?;
            return Ok(());
        }
        if self.match_punct(PunctuationId::LBrace) {
            self.expect_punct(PunctuationId::RBrace, "Expected '}' in empty dictionary default")?;
            return Ok(());
        }
        match &self.peek().kind {
            TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::String(_) | TokenKind::Ident(_) => {
                self.advance();
                Ok(())
            }
            TokenKind::Keyword(KeywordId::True | KeywordId::False | KeywordId::Null) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error_here("Expected default value")),
        }
    }
}
