//! Type rule tables
//!
//! Two closed tables drive the analyzer: assignment compatibility and the
//! per-operator operand rules. Extending type checking to another operator
//! means adding an entry to [`OPERATOR_RULES`]; operators without an entry
//! are not type-checked at all.

use crate::parser::ast::ValueType;
use crate::parser::lexer::TokenKind;

/// Accepted operand types and result type for one binary operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRule {
    pub left: &'static [ValueType],
    pub right: &'static [ValueType],
    pub result: ValueType,
}

const NUMERIC: &[ValueType] = &[ValueType::Integer, ValueType::Float];

/// Operand rules for the operators the analyzer covers.
pub const OPERATOR_RULES: &[(TokenKind, OperatorRule)] = &[
    (
        TokenKind::Plus,
        OperatorRule {
            left: NUMERIC,
            right: NUMERIC,
            result: ValueType::Integer,
        },
    ),
    (
        TokenKind::Min,
        OperatorRule {
            left: NUMERIC,
            right: NUMERIC,
            result: ValueType::Integer,
        },
    ),
    (
        TokenKind::Lt,
        OperatorRule {
            left: NUMERIC,
            right: NUMERIC,
            result: ValueType::Boolean,
        },
    ),
    (
        TokenKind::Gt,
        OperatorRule {
            left: NUMERIC,
            right: NUMERIC,
            result: ValueType::Boolean,
        },
    ),
];

/// Look up the rule for an operator token, if the table covers it.
pub fn operator_rule(kind: TokenKind) -> Option<&'static OperatorRule> {
    OPERATOR_RULES
        .iter()
        .find(|(rule_kind, _)| *rule_kind == kind)
        .map(|(_, rule)| rule)
}

/// Assignment compatibility: integer and boolean targets take only their
/// own type; a float target also accepts an integer value.
pub fn assignable(target: ValueType, value: ValueType) -> bool {
    match target {
        ValueType::Integer => value == ValueType::Integer,
        ValueType::Float => matches!(value, ValueType::Float | ValueType::Integer),
        ValueType::Boolean => value == ValueType::Boolean,
    }
}

/// Map a type sigil token to the declared type. Anything else falls back
/// to float; a token sequence that survived parsing never reaches the
/// fallback.
pub fn sigil_value_type(kind: TokenKind) -> ValueType {
    match kind {
        TokenKind::IntegerType => ValueType::Integer,
        TokenKind::FloatType => ValueType::Float,
        TokenKind::BooleanType => ValueType::Boolean,
        _ => ValueType::Float,
    }
}
