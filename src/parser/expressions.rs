//! Expression parsing implementation
//!
//! Three precedence tiers, lowest first, each left-associative and built by
//! folding the running left operand into a new [`AstNode::BinaryOp`]:
//!
//! ```text
//! expression ::= operand (('NE'|'EQ'|'LT'|'LE'|'GT'|'GE') operand)*
//! operand    ::= summand (('plus'|'min'|'or') summand)*
//! summand    ::= multiplier (('mult'|'div'|'and') multiplier)*
//! multiplier ::= ident | literal | '~' multiplier | '(' expression ')'
//! ```
//!
//! Unary `~` recurses into another multiplier, so it binds tighter than any
//! binary operator.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{AstNode, BinOp, UnOp, ValueType};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse an expression (relational tier, lowest precedence).
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_operand()?;

        while let Some(op) = relational_op(self.peek().kind) {
            let location = self.current_location();
            self.advance();
            let right = Box::new(self.parse_operand()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location,
            };
        }

        Ok(left)
    }

    /// Parse an operand (additive tier).
    fn parse_operand(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_summand()?;

        while let Some(op) = additive_op(self.peek().kind) {
            let location = self.current_location();
            self.advance();
            let right = Box::new(self.parse_summand()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location,
            };
        }

        Ok(left)
    }

    /// Parse a summand (multiplicative tier).
    fn parse_summand(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_multiplier()?;

        while let Some(op) = multiplicative_op(self.peek().kind) {
            let location = self.current_location();
            self.advance();
            let right = Box::new(self.parse_multiplier()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location,
            };
        }

        Ok(left)
    }

    /// Parse a multiplier: identifier, literal, unary negation, or a
    /// parenthesized expression.
    fn parse_multiplier(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();

        match self.peek().kind {
            TokenKind::Identifier => {
                let name = self.advance().lexeme.clone();
                Ok(AstNode::Variable(name, location))
            }
            TokenKind::IntLiteral => {
                let value = self.advance().lexeme.clone();
                Ok(AstNode::Literal {
                    value,
                    value_type: ValueType::Integer,
                    location,
                })
            }
            TokenKind::FloatLiteral => {
                let value = self.advance().lexeme.clone();
                Ok(AstNode::Literal {
                    value,
                    value_type: ValueType::Float,
                    location,
                })
            }
            TokenKind::BoolLiteral => {
                let value = self.advance().lexeme.clone();
                Ok(AstNode::Literal {
                    value,
                    value_type: ValueType::Boolean,
                    location,
                })
            }
            TokenKind::Not => {
                self.advance();
                let operand = Box::new(self.parse_multiplier()?);
                Ok(AstNode::UnaryOp {
                    op: UnOp::Not,
                    operand,
                    location,
                })
            }
            TokenKind::LParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::RParen, "Expected ')' after expression")?;
                Ok(expression)
            }
            _ => Err(self.error_at_current("Unexpected token in expression")),
        }
    }
}

fn relational_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Ne => Some(BinOp::Ne),
        TokenKind::Eq => Some(BinOp::Eq),
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::Le => Some(BinOp::Le),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::Ge => Some(BinOp::Ge),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Min => Some(BinOp::Sub),
        TokenKind::Or => Some(BinOp::Or),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Mult => Some(BinOp::Mul),
        TokenKind::Div => Some(BinOp::Div),
        TokenKind::And => Some(BinOp::And),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    /// Parse `expr` as the value of a single assignment statement.
    fn parse_expression(expr: &str) -> AstNode {
        let source = format!("program var a, b, c, x : %; begin x as {} end.", expr);
        let tokens = Lexer::new(&source).tokenize().expect("lexing failed");
        let mut program = Parser::new(tokens).parse_program().expect("parsing failed");

        match program.statements.remove(0) {
            AstNode::Assignment { value, .. } => *value,
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_fold() {
        // a plus b plus c => (a plus b) plus c
        match parse_expression("a plus b plus c") {
            AstNode::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, AstNode::BinaryOp { op: BinOp::Add, .. }));
                assert!(matches!(*right, AstNode::Variable(name, _) if name == "c"));
            }
            other => panic!("Expected binary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplicative_binds_tighter() {
        // a plus b mult c => a plus (b mult c)
        match parse_expression("a plus b mult c") {
            AstNode::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, AstNode::Variable(name, _) if name == "a"));
                assert!(matches!(*right, AstNode::BinaryOp { op: BinOp::Mul, .. }));
            }
            other => panic!("Expected binary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_relational_is_lowest_tier() {
        // a plus b LT c mult a => (a plus b) LT (c mult a)
        match parse_expression("a plus b LT c mult a") {
            AstNode::BinaryOp {
                op: BinOp::Lt,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, AstNode::BinaryOp { op: BinOp::Add, .. }));
                assert!(matches!(*right, AstNode::BinaryOp { op: BinOp::Mul, .. }));
            }
            other => panic!("Expected binary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_parentheses_override_precedence() {
        // (a plus b) mult c
        match parse_expression("(a plus b) mult c") {
            AstNode::BinaryOp {
                op: BinOp::Mul,
                left,
                ..
            } => {
                assert!(matches!(*left, AstNode::BinaryOp { op: BinOp::Add, .. }));
            }
            other => panic!("Expected binary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_negation_binds_tightest() {
        // ~a mult b => (~a) mult b
        match parse_expression("~a mult b") {
            AstNode::BinaryOp {
                op: BinOp::Mul,
                left,
                ..
            } => {
                assert!(matches!(*left, AstNode::UnaryOp { op: UnOp::Not, .. }));
            }
            other => panic!("Expected binary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_negation_chains() {
        match parse_expression("~~a") {
            AstNode::UnaryOp { operand, .. } => {
                assert!(matches!(*operand, AstNode::UnaryOp { op: UnOp::Not, .. }));
            }
            other => panic!("Expected unary operation, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_types() {
        assert!(matches!(
            parse_expression("42"),
            AstNode::Literal { value_type: ValueType::Integer, .. }
        ));
        assert!(matches!(
            parse_expression("3.5"),
            AstNode::Literal { value_type: ValueType::Float, .. }
        ));
        assert!(matches!(
            parse_expression("true"),
            AstNode::Literal { value_type: ValueType::Boolean, .. }
        ));
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let source = "program var x : %; begin x as (x plus 1 end.";
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let err = Parser::new(tokens).parse_program().unwrap_err();
        assert!(err.message.contains("Expected ')' after expression"));
    }

    #[test]
    fn test_unexpected_multiplier() {
        let source = "program var x : %; begin x as then end.";
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let err = Parser::new(tokens).parse_program().unwrap_err();
        assert!(err.message.contains("Unexpected token in expression"));
    }
}
