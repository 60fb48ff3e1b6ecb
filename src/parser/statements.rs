//! Statement parsing implementation
//!
//! This module handles the statement list between `begin` and `end.` and
//! the six statement forms. Dispatch is purely by the kind of the current
//! token; any other leading token is a syntax error.
//!
//! # Grammar
//!
//! ```text
//! statement  ::= assignment | if_stmt | for_stmt | while_stmt
//!              | read_stmt | write_stmt
//! assignment ::= ident 'as' expression
//! if_stmt    ::= 'if' expression 'then' statement ('else' statement)?
//! for_stmt   ::= 'for' assignment 'to' expression 'do' statement
//! while_stmt ::= 'while' expression 'do' statement
//! read_stmt  ::= 'read' '(' ident (',' ident)* ')'
//! write_stmt ::= 'write' '(' expression (',' expression)* ')'
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::AstNode;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse the statement list between `begin` and `end.`. The `;`
    /// separator is required between statements and optional before the
    /// final `end.`.
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::End) && !self.is_at_end() {
            statements.push(self.parse_statement()?);

            if !self.check(TokenKind::End) && !self.is_at_end() {
                self.expect(TokenKind::Semicolon, "Expected ';' between statements")?;
            }
        }

        Ok(statements)
    }

    /// Parse a single statement, dispatching on the current token kind.
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        match self.peek().kind {
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Read => self.parse_read_statement(),
            TokenKind::Write => self.parse_write_statement(),
            _ => Err(self.error_at_current("Unexpected statement")),
        }
    }

    /// Parse an assignment: `ident 'as' expression`.
    pub(crate) fn parse_assignment(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        let target = self.expect_identifier("as assignment target")?;

        self.expect(TokenKind::As, "Expected 'as' in assignment")?;

        let value = Box::new(self.parse_expression()?);

        Ok(AstNode::Assignment {
            target,
            value,
            location,
        })
    }

    /// Parse `'if' expression 'then' statement ('else' statement)?`.
    fn parse_if_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'if'

        let condition = Box::new(self.parse_expression()?);

        self.expect(TokenKind::Then, "Expected 'then' after condition")?;

        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(AstNode::If {
            condition,
            then_branch,
            else_branch,
            location,
        })
    }

    /// Parse a fixed-count loop:
    /// `'for' assignment 'to' expression 'do' statement`.
    ///
    /// The initializer must be a full assignment statement, not a bare
    /// identifier or expression.
    fn parse_for_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'for'

        let init = Box::new(self.parse_assignment()?);

        self.expect(TokenKind::To, "Expected 'to' after loop assignment")?;

        let bound = Box::new(self.parse_expression()?);

        self.expect(TokenKind::Do, "Expected 'do' after loop bound")?;

        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::For {
            init,
            bound,
            body,
            location,
        })
    }

    /// Parse a conditional loop: `'while' expression 'do' statement`.
    fn parse_while_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'while'

        let condition = Box::new(self.parse_expression()?);

        self.expect(TokenKind::Do, "Expected 'do' after loop condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::While {
            condition,
            body,
            location,
        })
    }

    /// Parse `'read' '(' ident (',' ident)* ')'`; the list must not be
    /// empty.
    fn parse_read_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'read'

        self.expect(TokenKind::LParen, "Expected '(' after 'read'")?;

        let mut targets = Vec::new();
        loop {
            let target_location = self.current_location();
            let name = self.expect_identifier("in 'read' list")?;
            targets.push(AstNode::Variable(name, target_location));

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RParen, "Expected ')' after 'read' list")?;

        Ok(AstNode::Read { targets, location })
    }

    /// Parse `'write' '(' expression (',' expression)* ')'`; the list must
    /// not be empty.
    fn parse_write_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'write'

        self.expect(TokenKind::LParen, "Expected '(' after 'write'")?;

        let mut values = vec![self.parse_expression()?];
        while self.match_kind(TokenKind::Comma) {
            values.push(self.parse_expression()?);
        }

        self.expect(TokenKind::RParen, "Expected ')' after 'write' list")?;

        Ok(AstNode::Write { values, location })
    }
}
