//! Semantic analysis for Slate token streams
//!
//! Builds a symbol table from the declaration section and checks type
//! compatibility at assignment and operator sites:
//! - [`analyzer`]: the two-pass [`analyzer::SemanticAnalyzer`]
//! - [`rules`]: the assignment-compatibility and operator rule tables
//! - [`errors`]: semantic error definitions
//!
//! The analyzer works directly on the flat token sequence, inspecting only
//! the tokens adjacent to each `as` or operator site. Nested
//! sub-expressions are validated at their own operator sites, never
//! through tree-based inference; broadening the check would change which
//! programs are accepted.

pub mod analyzer;
pub mod errors;
pub mod rules;
