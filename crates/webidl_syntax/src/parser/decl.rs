/// Top-level definition parsing.
///
/// This chunk handles everything that can appear at document level:
/// - `interface` / `interface mixin` / `callback interface` (optionally `partial`)
/// - `namespace`, `dictionary` (optionally `partial`)
/// - `enum`, `typedef`, `callback`
/// - `A includes B;` (and the legacy `A implements B;`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Definitions
    // ========================================================================

    fn definition(&mut self) -> Result<Spanned<Definition>, CompileError> {
        self.skip_extended_attributes()?;
        let start = self.current_span();

        let def = if self.match_keyword(KeywordId::Partial) {
            if self.match_keyword(KeywordId::Interface) {
                let kind = if self.match_keyword(KeywordId::Mixin) {
                    InterfaceKind::Mixin
                } else {
                    InterfaceKind::Plain
                };
                self.interface(kind, true)?
            } else if self.match_keyword(KeywordId::Namespace) {
                self.namespace(true)?
            } else if self.match_keyword(KeywordId::Dictionary) {
                self.dictionary(true)?
            } else {
                return Err(self.error_here("Expected 'interface', 'namespace' or 'dictionary' after 'partial'"));
            }
        } else if self.match_keyword(KeywordId::Interface) {
            let kind = if self.match_keyword(KeywordId::Mixin) {
                InterfaceKind::Mixin
            } else {
                InterfaceKind::Plain
            };
            self.interface(kind, false)?
        } else if self.match_keyword(KeywordId::Callback) {
            if self.match_keyword(KeywordId::Interface) {
                self.interface(InterfaceKind::Callback, false)?
            } else {
                self.callback()?
            }
        } else if self.match_keyword(KeywordId::Namespace) {
            self.namespace(false)?
        } else if self.match_keyword(KeywordId::Enum) {
            self.enum_decl()?
        } else if self.match_keyword(KeywordId::Dictionary) {
            self.dictionary(false)?
        } else if self.match_keyword(KeywordId::Typedef) {
            self.typedef()?
        } else if matches!(self.peek().kind, TokenKind::Ident(_))
            && (self.peek_next().is_keyword(KeywordId::Includes) || self.peek_next().is_keyword(KeywordId::Implements))
        {
            self.includes()?
        } else {
            return Err(self
                .error_here("Expected definition")
                .with_hint("Top-level definitions start with 'interface', 'namespace', 'enum', 'dictionary', 'typedef' or 'callback'"));
        };

        Ok(Spanned::new(def, start.merge(self.previous_span())))
    }

    /// `interface Name (: Base)? { members };` after the introducing keywords.
    fn interface(&mut self, kind: InterfaceKind, partial: bool) -> Result<Definition, CompileError> {
        let name = self.identifier()?;
        let inherits = if self.match_punct(PunctuationId::Colon) {
            Some(self.identifier()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to open interface '{}'", name))?;
        let members = self.member_list(&name)?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after interface body")?;
        Ok(Definition::Interface(InterfaceDecl {
            name,
            kind,
            partial,
            inherits,
            members,
        }))
    }

    fn namespace(&mut self, partial: bool) -> Result<Definition, CompileError> {
        let name = self.identifier()?;
        self.expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to open namespace '{}'", name))?;
        let members = self.member_list(&name)?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after namespace body")?;
        Ok(Definition::Namespace(NamespaceDecl { name, partial, members }))
    }

    fn enum_decl(&mut self) -> Result<Definition, CompileError> {
        let name = self.identifier()?;
        let open = self.current_span();
        self.expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to open enum '{}'", name))?;

        let mut values = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) {
            values.push(self.string_literal_spanned()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected ',' or '}' in enum value list")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after enum body")?;

        if values.is_empty() {
            return Err(CompileError::syntax(
                format!("Enum '{}' must have at least one value", name),
                open.merge(self.previous_span()),
            ));
        }
        Ok(Definition::Enum(EnumDecl { name, values }))
    }

    fn dictionary(&mut self, partial: bool) -> Result<Definition, CompileError> {
        let name = self.identifier()?;
        let inherits = if self.match_punct(PunctuationId::Colon) {
            Some(self.identifier()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to open dictionary '{}'", name))?;

        let mut fields = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            match self.dictionary_field() {
                Ok(field) => fields.push(field),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, &format!("Expected '}}' to close dictionary '{}'", name))?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after dictionary body")?;

        Ok(Definition::Dictionary(DictionaryDecl {
            name,
            partial,
            inherits,
            fields,
        }))
    }

    fn dictionary_field(&mut self) -> Result<Spanned<DictionaryField>, CompileError> {
        self.skip_extended_attributes()?;
        let start = self.current_span();
        let required = self.match_keyword(KeywordId::Required);
        let ty = self.type_ref()?;
        let name = self.identifier_or_keyword()?;
        if self.match_punct(PunctuationId::Equals) {
            self.skip_default_value()?;
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after dictionary field")?;
        Ok(Spanned::new(
            DictionaryField { name, ty, required },
            start.merge(self.previous_span()),
        ))
    }

    fn typedef(&mut self) -> Result<Definition, CompileError> {
        let ty = self.type_ref()?;
        let name = self.identifier()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after typedef")?;
        Ok(Definition::Typedef(TypedefDecl { name, ty }))
    }

    /// `callback Name = Ret (params);`
    fn callback(&mut self) -> Result<Definition, CompileError> {
        let name = self.identifier()?;
        self.expect_punct(PunctuationId::Equals, &format!("Expected '=' after callback name '{}'", name))?;
        let return_type = self.type_ref()?;
        let params = self.params()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after callback")?;
        Ok(Definition::Callback(CallbackDecl {
            name,
            return_type,
            params,
        }))
    }

    fn includes(&mut self) -> Result<Definition, CompileError> {
        let target = self.identifier()?;
        // `includes` or legacy `implements`; checked by the caller.
        self.advance();
        let mixin = self.identifier()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after includes statement")?;
        Ok(Definition::Includes(IncludesDecl { target, mixin }))
    }
}
