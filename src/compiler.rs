//! Compilation pipeline
//!
//! [`compile`] runs the front-end stages in order (lexical analysis, then
//! syntax analysis, then semantic analysis) and stops at the first
//! failure. Every call constructs fresh lexer, parser, and analyzer state;
//! nothing is shared across compilations.

use std::fmt;

use crate::parser::ast::Program;
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::parse::{ParseError, Parser};
use crate::semantics::analyzer::SemanticAnalyzer;
use crate::semantics::errors::SemanticError;

/// Any error the pipeline can stop on, tagged by stage.
#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Semantic(SemanticError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(err) => write!(f, "{}", err),
            CompileError::Parse(err) => write!(f, "{}", err),
            CompileError::Semantic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<SemanticError> for CompileError {
    fn from(err: SemanticError) -> Self {
        CompileError::Semantic(err)
    }
}

/// Everything a successful compilation produces: the ordered token
/// sequence and the validated AST root.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
}

/// Compile Slate source text into tokens and a validated AST.
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;
    tracing::debug!(tokens = tokens.len(), "lexical analysis complete");

    let mut parser = Parser::new(tokens.clone());
    let program = parser.parse_program()?;
    tracing::debug!(
        declarations = program.declarations.len(),
        statements = program.statements.len(),
        "syntax analysis complete"
    );

    let mut analyzer = SemanticAnalyzer::new(&tokens);
    analyzer.analyze()?;
    tracing::debug!(
        symbols = analyzer.symbol_table().len(),
        "semantic analysis complete"
    );

    Ok(Compilation { tokens, program })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tagging() {
        assert!(matches!(
            compile("program var x : %; begin x as @ end."),
            Err(CompileError::Lex(_))
        ));
        assert!(matches!(
            compile("program var x : %; begin x as end."),
            Err(CompileError::Parse(_))
        ));
        assert!(matches!(
            compile("program var x : %; begin z as 1 end."),
            Err(CompileError::Semantic(_))
        ));
    }

    #[test]
    fn test_successful_pipeline() {
        let compilation = compile("program var x : %; begin x as 5 end.").unwrap();
        assert!(!compilation.tokens.is_empty());
        assert_eq!(compilation.program.statements.len(), 1);
    }
}
