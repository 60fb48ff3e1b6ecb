//! Semantic error types
//!
//! This module defines [`SemanticError`], which represents everything the
//! analyzer can reject: undeclared names, incompatible assignments, and
//! operands outside an operator's accepted types.
//!
//! All semantic errors are fatal; the pipeline stops at the first one.

use crate::parser::ast::{SourceLocation, ValueType};
use std::fmt;

/// Which side of a binary operator an operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left"),
            OperandSide::Right => write!(f, "right"),
        }
    }
}

/// Errors reported by the semantic analyzer
#[derive(Debug, Clone)]
pub enum SemanticError {
    /// Assignment to a name missing from the symbol table
    UndeclaredVariable {
        name: String,
        location: SourceLocation,
    },

    /// Assignment whose value type is incompatible with the target type
    TypeMismatch {
        target: String,
        target_type: ValueType,
        value_type: ValueType,
        location: SourceLocation,
    },

    /// Value token whose type cannot be derived from the token itself
    UnknownValueType {
        text: String,
        location: SourceLocation,
    },

    /// Operand outside the accepted type set of a table-covered operator
    InvalidOperand {
        operator: String,
        side: OperandSide,
        operand: String,
        location: SourceLocation,
    },
}

impl SemanticError {
    /// Get the source location of this error
    pub fn location(&self) -> &SourceLocation {
        match self {
            SemanticError::UndeclaredVariable { location, .. } => location,
            SemanticError::TypeMismatch { location, .. } => location,
            SemanticError::UnknownValueType { location, .. } => location,
            SemanticError::InvalidOperand { location, .. } => location,
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::UndeclaredVariable { name, location } => {
                write!(
                    f,
                    "Undeclared variable '{}' at line {}",
                    name, location.line
                )
            }
            SemanticError::TypeMismatch {
                target,
                target_type,
                value_type,
                location,
            } => {
                write!(
                    f,
                    "Type mismatch at line {}: cannot assign {} value to {} variable '{}'",
                    location.line, value_type, target_type, target
                )
            }
            SemanticError::UnknownValueType { text, location } => {
                write!(
                    f,
                    "Cannot determine the type of '{}' at line {}",
                    text, location.line
                )
            }
            SemanticError::InvalidOperand {
                operator,
                side,
                operand,
                location,
            } => {
                write!(
                    f,
                    "Invalid {} operand '{}' for operator '{}' at line {}",
                    side, operand, operator, location.line
                )
            }
        }
    }
}

impl std::error::Error for SemanticError {}
