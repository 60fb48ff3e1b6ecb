//! Two-pass semantic analyzer
//!
//! The analyzer runs over the finished token sequence, not the AST. The
//! registration pass collects declared variables into the symbol table;
//! the validation pass visits every `as` token and every operator covered
//! by [`rules::OPERATOR_RULES`](crate::semantics::rules::OPERATOR_RULES)
//! and inspects only the tokens immediately adjacent to the site. A nested
//! sub-expression is therefore validated at its own operator sites and
//! nowhere else; a parenthesis or `~` sitting next to a checked site has
//! no locally determinable type and is rejected.
//!
//! Declaring the same name twice keeps the later declaration's type.

use rustc_hash::FxHashMap;

use crate::parser::ast::ValueType;
use crate::parser::lexer::{Token, TokenKind};
use crate::semantics::errors::{OperandSide, SemanticError};
use crate::semantics::rules::{assignable, operator_rule, sigil_value_type, OperatorRule};

/// Semantic analyzer for one compilation.
///
/// Holds no state beyond its own symbol table; create a fresh instance per
/// token sequence.
pub struct SemanticAnalyzer<'a> {
    tokens: &'a [Token],
    symbol_table: FxHashMap<String, ValueType>,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            symbol_table: FxHashMap::default(),
        }
    }

    /// Run both passes: registration, then validation.
    pub fn analyze(&mut self) -> Result<(), SemanticError> {
        self.register_variables();
        self.check_type_consistency()
    }

    /// The finished symbol table (name → declared type).
    pub fn symbol_table(&self) -> &FxHashMap<String, ValueType> {
        &self.symbol_table
    }

    /// Declared type of a variable, if it was registered.
    pub fn variable_type(&self, name: &str) -> Option<ValueType> {
        self.symbol_table.get(name).copied()
    }

    /// Registration pass: scan for `var`, then group each identifier/comma
    /// run under the type token that follows it, until `begin`.
    fn register_variables(&mut self) {
        let mut pos = 0;
        while pos < self.tokens.len() {
            if self.tokens[pos].kind != TokenKind::Var {
                pos += 1;
                continue;
            }
            pos += 1;

            while pos < self.tokens.len() && self.tokens[pos].kind != TokenKind::Begin {
                let mut names = Vec::new();
                while pos < self.tokens.len()
                    && matches!(
                        self.tokens[pos].kind,
                        TokenKind::Identifier | TokenKind::Comma
                    )
                {
                    if self.tokens[pos].kind == TokenKind::Identifier {
                        names.push(self.tokens[pos].lexeme.clone());
                    }
                    pos += 1;
                }

                if pos < self.tokens.len() && self.tokens[pos].kind == TokenKind::Colon {
                    pos += 1;
                }

                if pos < self.tokens.len() {
                    let declared = sigil_value_type(self.tokens[pos].kind);
                    for name in names {
                        // A redeclared name keeps the later type.
                        self.symbol_table.insert(name, declared);
                    }
                }
                pos += 1;
            }
        }
    }

    /// Validation pass: visit every assignment site and every operator the
    /// rule table covers.
    fn check_type_consistency(&self) -> Result<(), SemanticError> {
        for pos in 0..self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if kind == TokenKind::As {
                self.validate_assignment(pos)?;
            } else if let Some(rule) = operator_rule(kind) {
                self.validate_operation(pos, rule)?;
            }
        }
        Ok(())
    }

    /// Check one assignment site: the token before `as` is the target, the
    /// token after it is the value. Only these two neighbors are
    /// inspected.
    fn validate_assignment(&self, as_pos: usize) -> Result<(), SemanticError> {
        let (Some(target), Some(value)) = (
            as_pos.checked_sub(1).map(|i| &self.tokens[i]),
            self.tokens.get(as_pos + 1),
        ) else {
            return Ok(());
        };

        let target_type = match self.symbol_table.get(target.lexeme.as_str()) {
            Some(var_type) => *var_type,
            None => {
                return Err(SemanticError::UndeclaredVariable {
                    name: target.lexeme.clone(),
                    location: target.location,
                });
            }
        };

        let value_type =
            self.operand_type(value)
                .ok_or_else(|| SemanticError::UnknownValueType {
                    text: value.lexeme.clone(),
                    location: value.location,
                })?;

        if !assignable(target_type, value_type) {
            return Err(SemanticError::TypeMismatch {
                target: target.lexeme.clone(),
                target_type,
                value_type,
                location: value.location,
            });
        }

        Ok(())
    }

    /// Check one operator site against its rule: both neighbor tokens must
    /// carry a type from the rule's accepted set.
    fn validate_operation(&self, op_pos: usize, rule: &OperatorRule) -> Result<(), SemanticError> {
        let (Some(left), Some(right)) = (
            op_pos.checked_sub(1).map(|i| &self.tokens[i]),
            self.tokens.get(op_pos + 1),
        ) else {
            return Ok(());
        };
        let operator = &self.tokens[op_pos];

        self.check_operand(operator, left, rule.left, OperandSide::Left)?;
        self.check_operand(operator, right, rule.right, OperandSide::Right)
    }

    fn check_operand(
        &self,
        operator: &Token,
        operand: &Token,
        accepted: &[ValueType],
        side: OperandSide,
    ) -> Result<(), SemanticError> {
        let matches_rule = self
            .operand_type(operand)
            .is_some_and(|operand_type| accepted.contains(&operand_type));

        if matches_rule {
            Ok(())
        } else {
            Err(SemanticError::InvalidOperand {
                operator: operator.lexeme.clone(),
                side,
                operand: operand.lexeme.clone(),
                location: operand.location,
            })
        }
    }

    /// Type of a single operand token: literals carry their own type,
    /// identifiers resolve through the symbol table. Anything else has no
    /// locally determinable type.
    fn operand_type(&self, token: &Token) -> Option<ValueType> {
        match token.kind {
            TokenKind::Identifier => self.variable_type(&token.lexeme),
            TokenKind::IntLiteral => Some(ValueType::Integer),
            TokenKind::FloatLiteral => Some(ValueType::Float),
            TokenKind::BoolLiteral => Some(ValueType::Boolean),
            _ => None,
        }
    }
}
