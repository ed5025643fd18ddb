/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Skipping extended attributes
/// - Error recovery (`synchronize_member`, `synchronize_definition`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Build a syntax error at the current token: "`msg`, found `<token>`".
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, self.peek().kind.describe()),
            self.current_span(),
        )
    }

    /// Skip an extended attribute list (`[Const, Prefix="x"]`) if present.
    ///
    /// Extended attributes carry binding hints only; nothing in the declaration output depends on them.
    fn skip_extended_attributes(&mut self) -> Result<(), CompileError> {
        while self.check_punct(PunctuationId::LBracket) {
            let open = self.current_span();
            self.advance();
            let mut depth = 1usize;
            while depth > 0 {
                if self.is_at_end() {
                    return Err(CompileError::syntax(
                        "Unterminated extended attribute list".to_string(),
                        open,
                    )
                    .with_hint("Close the list with ']'"));
                }
                match self.peek().kind.punctuation_id() {
                    Some(PunctuationId::LBracket) => depth += 1,
                    Some(PunctuationId::RBracket) => depth -= 1,
                    _ => {}
                }
                self.advance();
            }
        }
        Ok(())
    }

    /// Recover inside a member list: skip past the next `;` or stop before the closing `}`.
    fn synchronize_member(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.peek().kind.punctuation_id() {
                Some(PunctuationId::Semicolon) if depth == 0 => {
                    self.advance();
                    return;
                }
                Some(PunctuationId::RBrace) if depth == 0 => return,
                Some(PunctuationId::LBrace | PunctuationId::LParen | PunctuationId::LBracket) => depth += 1,
                Some(PunctuationId::RBrace | PunctuationId::RParen | PunctuationId::RBracket) => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Recover at top level: skip past the `;` that closes the broken definition.
    fn synchronize_definition(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.peek().kind.punctuation_id() {
                Some(PunctuationId::Semicolon) if depth == 0 => {
                    self.advance();
                    return;
                }
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
    }
}
