//! # Introduction
//!
//! Slate is a compiler front-end for a small Pascal-like teaching
//! language: typed variables declared with sigils, `as` assignments,
//! `if/then/else`, a fixed-count `for` loop, a conditional `while` loop,
//! and `read`/`write` I/O statements. Source text is turned into a
//! validated abstract syntax tree; there is no code generation and no
//! execution.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Semantic Analyzer
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source into a flat token
//!    sequence.
//! 2. [`parser`] — recursive descent over the tokens, building the
//!    [`parser::ast::Program`] tree in the same walk that validates the
//!    grammar.
//! 3. [`semantics`] — registers declared variables in a symbol table,
//!    then checks assignments and covered operators against the type rule
//!    tables, scanning the token stream directly.
//! 4. [`compiler`] — ties the stages together: [`compiler::compile`] runs
//!    them fail-fast and returns tokens plus AST, or the first error.
//!
//! Compilation halts on the first error; there is no recovery and no
//! warnings tier. Every compilation uses fresh lexer, parser, and
//! analyzer state, and every scanning loop strictly advances its
//! position, so malformed input always ends in an explicit error.

pub mod compiler;
pub mod parser;
pub mod semantics;
