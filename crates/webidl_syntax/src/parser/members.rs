/// Interface and namespace member parsing.
///
/// Operations, attributes, constants, constructors and the collection declarations
/// (`maplike`, `setlike`, `iterable`). Special operations (`getter`, `setter`, `deleter`,
/// `stringifier`) are recognized and skipped as a whole so the backend can report them.
impl<'a> Parser<'a> {
    // ========================================================================
    // Members
    // ========================================================================

    /// Parse members up to (and including) the closing `}`, recovering per member.
    fn member_list(&mut self, owner: &str) -> Result<Vec<Spanned<Member>>, CompileError> {
        let mut members = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            match self.member() {
                Ok(member) => members.push(member),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, &format!("Expected '}}' to close '{}'", owner))?;
        Ok(members)
    }

    fn member(&mut self) -> Result<Spanned<Member>, CompileError> {
        self.skip_extended_attributes()?;
        let start = self.current_span();

        let member = match self.peek().kind.keyword_id() {
            Some(KeywordId::Const) => {
                self.advance();
                self.const_member()?
            }
            Some(KeywordId::Constructor) => {
                self.advance();
                let params = self.params()?;
                self.expect_punct(PunctuationId::Semicolon, "Expected ';' after constructor")?;
                Member::Constructor(params)
            }
            Some(KeywordId::Readonly) => {
                self.advance();
                if self.match_keyword(KeywordId::Maplike) {
                    self.maplike(true)?
                } else if self.match_keyword(KeywordId::Setlike) {
                    self.setlike(true)?
                } else {
                    self.attribute(true, false)?
                }
            }
            Some(KeywordId::Maplike) => {
                self.advance();
                self.maplike(false)?
            }
            Some(KeywordId::Setlike) => {
                self.advance();
                self.setlike(false)?
            }
            Some(KeywordId::Async | KeywordId::Iterable) => self.iterable()?,
            Some(KeywordId::Getter) => self.special(SpecialKind::Getter),
            Some(KeywordId::Setter) => self.special(SpecialKind::Setter),
            Some(KeywordId::Deleter) => self.special(SpecialKind::Deleter),
            Some(KeywordId::Stringifier) => self.special(SpecialKind::Stringifier),
            Some(KeywordId::Static) => {
                self.advance();
                if self.check_keyword(KeywordId::Attribute) || self.check_keyword(KeywordId::Readonly) {
                    let readonly = self.match_keyword(KeywordId::Readonly);
                    self.attribute(readonly, true)?
                } else {
                    self.operation(true)?
                }
            }
            Some(KeywordId::Inherit) => {
                self.advance();
                let readonly = self.match_keyword(KeywordId::Readonly);
                self.attribute(readonly, false)?
            }
            Some(KeywordId::Attribute) => self.attribute(false, false)?,
            _ => self.operation(false)?,
        };

        Ok(Spanned::new(member, start.merge(self.previous_span())))
    }

    /// `attribute T name;` with any `readonly`/`static` prefix already consumed.
    fn attribute(&mut self, readonly: bool, is_static: bool) -> Result<Member, CompileError> {
        self.expect_keyword(KeywordId::Attribute, "Expected 'attribute'")?;
        let ty = self.type_ref()?;
        let name = self.identifier_or_keyword()?;
        self.expect_punct(PunctuationId::Semicolon, &format!("Expected ';' after attribute '{}'", name))?;
        Ok(Member::Attribute(AttributeMember {
            name,
            ty,
            readonly,
            is_static,
        }))
    }

    /// `Ret name(params);`
    fn operation(&mut self, is_static: bool) -> Result<Member, CompileError> {
        let return_type = self.type_ref()?;
        let name = self.identifier_or_keyword()?;
        let params = self.params()?;
        self.expect_punct(PunctuationId::Semicolon, &format!("Expected ';' after operation '{}'", name))?;
        Ok(Member::Operation(OperationMember {
            name,
            is_static,
            return_type,
            params,
        }))
    }

    /// `const T NAME = value;` after `const`.
    fn const_member(&mut self) -> Result<Member, CompileError> {
        let ty = self.type_ref()?;
        let name = self.identifier_or_keyword()?;
        self.expect_punct(PunctuationId::Equals, &format!("Expected '=' after const '{}'", name))?;
        self.skip_default_value()?;
        self.expect_punct(PunctuationId::Semicolon, &format!("Expected ';' after const '{}'", name))?;
        Ok(Member::Const(ConstMember { name, ty }))
    }

    fn maplike(&mut self, readonly: bool) -> Result<Member, CompileError> {
        self.expect_punct(PunctuationId::LAngle, "Expected '<' after 'maplike'")?;
        let key = self.type_ref()?;
        self.expect_punct(PunctuationId::Comma, "Expected ',' between maplike key and value types")?;
        let value = self.type_ref()?;
        self.expect_punct(PunctuationId::RAngle, "Expected '>' to close 'maplike'")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after maplike declaration")?;
        Ok(Member::Maplike(MaplikeMember { key, value, readonly }))
    }

    fn setlike(&mut self, readonly: bool) -> Result<Member, CompileError> {
        self.expect_punct(PunctuationId::LAngle, "Expected '<' after 'setlike'")?;
        let element = self.type_ref()?;
        self.expect_punct(PunctuationId::RAngle, "Expected '>' to close 'setlike'")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after setlike declaration")?;
        Ok(Member::Setlike(SetlikeMember { element, readonly }))
    }

    /// `iterable<V>;`, `iterable<K, V>;` or `async iterable<V>(params);`
    fn iterable(&mut self) -> Result<Member, CompileError> {
        let is_async = self.match_keyword(KeywordId::Async);
        self.expect_keyword(KeywordId::Iterable, "Expected 'iterable'")?;
        self.expect_punct(PunctuationId::LAngle, "Expected '<' after 'iterable'")?;
        let first = self.type_ref()?;
        let second = if self.match_punct(PunctuationId::Comma) {
            Some(self.type_ref()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::RAngle, "Expected '>' to close 'iterable'")?;
        if is_async && self.check_punct(PunctuationId::LParen) {
            self.params()?;
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after iterable declaration")?;

        let (key, value) = match second {
            Some(value) => (Some(first), value),
            None => (None, first),
        };
        Ok(Member::Iterable(IterableMember { is_async, key, value }))
    }

    /// Consume a special operation through its terminating `;`.
    fn special(&mut self, kind: SpecialKind) -> Member {
        self.synchronize_member();
        Member::Special(kind)
    }

    /// `( [optional] T [...] name [= default], ... )`
    fn params(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '(' to start parameter list")?;
        let mut params = Vec::new();
        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.param()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ',' or ')' in parameter list")?;
        Ok(params)
    }

    fn param(&mut self) -> Result<Param, CompileError> {
        self.skip_extended_attributes()?;
        let optional = self.match_keyword(KeywordId::Optional);
        let ty = self.type_ref()?;
        let variadic = self.match_punct(PunctuationId::Ellipsis);
        let name = self.identifier_or_keyword()?;
        if self.match_punct(PunctuationId::Equals) {
            self.skip_default_value()?;
        }
        Ok(Param {
            name,
            ty,
            optional,
            variadic,
        })
    }
}
