//! Declaration parsing implementation
//!
//! This module handles the variable declaration section between `var` and
//! `begin`:
//!
//! ```text
//! declarations ::= (ident (',' ident)* ':' sigil ';')*
//! sigil        ::= '%' | '!' | '$'
//! ```
//!
//! Every identifier in a comma-separated list yields its own
//! [`AstNode::VarDecl`] carrying the list's resolved type.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{AstNode, ValueType};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse the declaration section, stopping at `begin`.
    pub(crate) fn parse_declarations(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut declarations = Vec::new();

        while !self.check(TokenKind::Begin) && !self.is_at_end() {
            let mut names = Vec::new();
            loop {
                let location = self.current_location();
                let name = self.expect_identifier("in declaration")?;
                names.push((name, location));

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }

            self.expect(TokenKind::Colon, "Expected ':' after identifier list")?;

            let var_type = self.parse_type_sigil()?;

            self.expect(TokenKind::Semicolon, "Expected ';' after declaration")?;

            for (name, location) in names {
                declarations.push(AstNode::VarDecl {
                    name,
                    var_type,
                    location,
                });
            }
        }

        Ok(declarations)
    }

    /// Parse one of the three type sigils.
    fn parse_type_sigil(&mut self) -> Result<ValueType, ParseError> {
        let var_type = match self.peek().kind {
            TokenKind::IntegerType => ValueType::Integer,
            TokenKind::FloatType => ValueType::Float,
            TokenKind::BooleanType => ValueType::Boolean,
            _ => return Err(self.error_at_current("Expected type sigil ('%', '!' or '$')")),
        };

        self.advance();
        Ok(var_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Program;
    use crate::parser::lexer::Lexer;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        Parser::new(tokens).parse_program()
    }

    #[test]
    fn test_shared_type_in_identifier_list() {
        let program = parse("program var x, y, z : !; begin end.").unwrap();

        assert_eq!(program.declarations.len(), 3);
        for (node, expected) in program.declarations.iter().zip(["x", "y", "z"]) {
            assert!(matches!(
                node,
                AstNode::VarDecl { name, var_type: ValueType::Float, .. } if name == expected
            ));
        }
    }

    #[test]
    fn test_multiple_declaration_groups() {
        let program = parse("program var x : %; flag : $; begin end.").unwrap();

        assert!(matches!(
            &program.declarations[0],
            AstNode::VarDecl { var_type: ValueType::Integer, .. }
        ));
        assert!(matches!(
            &program.declarations[1],
            AstNode::VarDecl { name, var_type: ValueType::Boolean, .. } if name == "flag"
        ));
    }

    #[test]
    fn test_declaration_group_just_before_begin() {
        let program = parse("program var x : %; begin end.").unwrap();
        assert_eq!(program.declarations.len(), 1);
    }

    #[test]
    fn test_missing_semicolon_before_begin() {
        let err = parse("program var x : % begin end.").unwrap_err();
        assert!(err.message.contains("Expected ';' after declaration"));
    }

    #[test]
    fn test_missing_colon() {
        let err = parse("program var x %; begin end.").unwrap_err();
        assert!(err.message.contains("Expected ':' after identifier list"));
    }

    #[test]
    fn test_missing_type_sigil() {
        let err = parse("program var x : ; begin end.").unwrap_err();
        assert!(err.message.contains("Expected type sigil"));
    }

    #[test]
    fn test_declaration_needs_identifier() {
        let err = parse("program var : %; begin end.").unwrap_err();
        assert!(err.message.contains("Expected identifier in declaration"));
    }
}
