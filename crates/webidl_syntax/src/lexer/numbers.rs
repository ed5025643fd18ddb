//! Numeric literal scanning.
//!
//! WebIDL integers are decimal, hexadecimal (`0x1F`) or octal (leading `0`); floats need a `.` or an exponent.
//! A leading `-` has already been consumed by the caller and is passed in as `negative`.
//! Integers cover the union of `long long` and `unsigned long long`, so the sign is applied before the range check.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, first: char, negative: bool) {
        let digits_start = self.current_pos - first.len_utf8();

        if first == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            self.advance();
            let hex_start = self.current_pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
                self.advance();
            }
            let text = &self.source[hex_start..self.current_pos];
            self.push_int(text, 16, start, negative);
            return;
        }

        let mut is_float = first == '.';
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if !is_float && self.peek() == Some('.') && self.peek_next() != Some('.') {
            is_float = true;
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_float = true;
            self.advance();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }
            let exp_start = self.current_pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
            if exp_start == self.current_pos {
                self.errors.push(CompileError::new(
                    "Invalid number literal: missing exponent digits".to_string(),
                    Span::new(start, self.current_pos),
                ));
                return;
            }
        }

        let text = &self.source[digits_start..self.current_pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(v) => self.add_token(TokenKind::Float(if negative { -v } else { v }), start),
                Err(_) => self.errors.push(CompileError::new(
                    format!("Invalid number literal '{}'", text),
                    Span::new(start, self.current_pos),
                )),
            }
        } else if text.len() > 1 && text.starts_with('0') {
            self.push_int(&text[1..], 8, start, negative);
        } else {
            self.push_int(text, 10, start, negative);
        }
    }

    fn push_int(&mut self, digits: &str, radix: u32, start: usize, negative: bool) {
        let value = i128::from_str_radix(digits, radix)
            .ok()
            .map(|v| if negative { -v } else { v })
            .filter(|v| (i128::from(i64::MIN)..=i128::from(u64::MAX)).contains(v));
        match value {
            Some(v) => self.add_token(TokenKind::Int(v), start),
            None => self.errors.push(CompileError::new(
                format!("Invalid integer literal '{}'", &self.source[start..self.current_pos]),
                Span::new(start, self.current_pos),
            )),
        }
    }
}
