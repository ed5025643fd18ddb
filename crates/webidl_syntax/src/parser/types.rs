/// Type reference parsing.
///
/// Handles:
/// - Single-word and multi-word builtins (`long`, `unsigned long long`, `unrestricted double`)
/// - Generic types (`sequence<T>`, `record<K, V>`, `Promise<T>`)
/// - Unions (`(A or B)`)
/// - Suffixes: `?` (nullable), `[]` (Emscripten array sugar), and `?` after the array suffix
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_ref(&mut self) -> Result<TypeRef, CompileError> {
        self.skip_extended_attributes()?;
        let start = self.current_span();

        let kind = if self.check_punct(PunctuationId::LParen) {
            self.union_type()?
        } else {
            self.named_or_generic_type()?
        };

        let nullable = self.match_punct(PunctuationId::Question);

        let mut array_depth = 0u8;
        while self.check_punct(PunctuationId::LBracket) && self.peek_next().is_punctuation(PunctuationId::RBracket) {
            self.advance();
            self.advance();
            array_depth = array_depth.saturating_add(1);
        }
        let array_nullable = array_depth > 0 && self.match_punct(PunctuationId::Question);

        Ok(TypeRef {
            kind,
            nullable,
            array_depth,
            array_nullable,
            span: start.merge(self.previous_span()),
        })
    }

    fn named_or_generic_type(&mut self) -> Result<TypeKind, CompileError> {
        let first = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.error_here("Expected type")),
        };
        let start = self.current_span();
        self.advance();

        if primitives::is_prefix_word(&first) {
            let word = match &self.peek().kind {
                TokenKind::Ident(word) => word.clone(),
                _ => return Err(self.error_here(&format!("Expected type name after '{}'", first))),
            };
            self.advance();
            let mut name = format!("{} {}", first, word);
            if word == "long" && self.match_ident("long") {
                name.push_str(" long");
            }
            if primitives::from_str(&name).is_none() {
                return Err(CompileError::syntax(
                    format!("Unknown builtin type '{}'", name),
                    start.merge(self.previous_span()),
                )
                .with_hint("Only numeric types take an 'unsigned' or 'unrestricted' prefix"));
            }
            return Ok(TypeKind::Named(name));
        }

        if first == "long" && self.match_ident("long") {
            return Ok(TypeKind::Named("long long".to_string()));
        }

        if self.match_punct(PunctuationId::LAngle) {
            let mut args = vec![self.type_ref()?];
            while self.match_punct(PunctuationId::Comma) {
                args.push(self.type_ref()?);
            }
            self.expect_punct(PunctuationId::RAngle, &format!("Expected '>' to close '{}<...>'", first))?;
            return Ok(TypeKind::Generic { name: first, args });
        }

        Ok(TypeKind::Named(first))
    }

    /// `(A or B or ...)`
    fn union_type(&mut self) -> Result<TypeKind, CompileError> {
        let open = self.current_span();
        self.advance();
        let mut types = vec![self.type_ref()?];
        while self.match_keyword(KeywordId::Or) {
            types.push(self.type_ref()?);
        }
        self.expect_punct(PunctuationId::RParen, "Expected 'or' or ')' in union type")?;
        if types.len() < 2 {
            return Err(CompileError::syntax(
                "Union type needs at least two member types".to_string(),
                open.merge(self.previous_span()),
            ));
        }
        Ok(TypeKind::Union(types))
    }
}
