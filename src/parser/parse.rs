//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, token-stream helper methods, and the
//! `program … var … begin … end.` entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and the program skeleton
//! - `declarations`: the variable declaration section
//! - `statements`: statement dispatch and the six statement forms
//! - `expressions`: the tiered expression grammar
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared parser state.
//!
//! A single walk both validates the grammar and builds the AST; there is
//! no separate validation-only pass.

use crate::parser::ast::{Program, SourceLocation};
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for Slate programs
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over a token sequence produced by the lexer.
    ///
    /// The sequence is expected to end with an `Eof` token; one is appended
    /// when the caller's sequence lacks it, so lookahead never runs off the
    /// end of the stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let location = tokens
                .last()
                .map(|t| t.location)
                .unwrap_or_else(|| SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", location));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program:
    /// `'program' 'var' declarations 'begin' statements 'end.'`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        self.expect(TokenKind::Program, "Expected 'program' at start of program")?;
        self.expect(TokenKind::Var, "Expected 'var' after 'program'")?;

        program.declarations = self.parse_declarations()?;

        self.expect(TokenKind::Begin, "Expected 'begin' before statements")?;

        program.statements = self.parse_statements()?;

        self.expect(TokenKind::End, "Expected 'end.' after statements")?;

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.error_at_current(&format!("Expected identifier {ctx}")))
        }
    }

    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        ParseError {
            message: format!("{}, found {}", message, self.peek()),
            location: self.current_location(),
        }
    }
}
