// Integration tests for the Slate compiler front-end

use slate::compiler::{compile, CompileError};
use slate::parser::ast::{AstNode, BinOp, ValueType};
use slate::parser::lexer::Lexer;
use slate::semantics::analyzer::SemanticAnalyzer;
use slate::semantics::errors::SemanticError;

#[test]
fn test_minimal_program() {
    let source = "program var x : %; begin x as 5 end.";

    let compilation = compile(source).expect("Compilation failed");
    assert_eq!(compilation.program.declarations.len(), 1);
    assert_eq!(compilation.program.statements.len(), 1);

    // The analyzer registers exactly one integer variable.
    let mut analyzer = SemanticAnalyzer::new(&compilation.tokens);
    analyzer.analyze().expect("Analysis failed");
    assert_eq!(analyzer.symbol_table().len(), 1);
    assert_eq!(analyzer.variable_type("x"), Some(ValueType::Integer));
}

#[test]
fn test_boolean_target_rejects_integer_value() {
    let source = "program var x : $; begin x as 5 end.";

    match compile(source) {
        Err(CompileError::Semantic(SemanticError::TypeMismatch {
            target,
            target_type,
            value_type,
            ..
        })) => {
            assert_eq!(target, "x");
            assert_eq!(target_type, ValueType::Boolean);
            assert_eq!(value_type, ValueType::Integer);
        }
        other => panic!("Expected a type mismatch, got {:?}", other),
    }
}

#[test]
fn test_shared_declaration_and_binary_operation() {
    let source = "program var x, y : %; begin x as 1; y as x plus 2 end.";

    let compilation = compile(source).expect("Compilation failed");
    let program = &compilation.program;

    assert_eq!(program.declarations.len(), 2);
    assert!(matches!(
        &program.declarations[0],
        AstNode::VarDecl { name, var_type: ValueType::Integer, .. } if name == "x"
    ));
    assert!(matches!(
        &program.declarations[1],
        AstNode::VarDecl { name, var_type: ValueType::Integer, .. } if name == "y"
    ));

    assert_eq!(program.statements.len(), 2);
    match &program.statements[1] {
        AstNode::Assignment { target, value, .. } => {
            assert_eq!(target, "y");
            match value.as_ref() {
                AstNode::BinaryOp {
                    op: BinOp::Add,
                    left,
                    right,
                    ..
                } => {
                    assert!(matches!(left.as_ref(), AstNode::Variable(name, _) if name == "x"));
                    assert!(matches!(
                        right.as_ref(),
                        AstNode::Literal { value, value_type: ValueType::Integer, .. }
                            if value == "2"
                    ));
                }
                other => panic!("Expected binary operation, got {:?}", other),
            }
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_undeclared_assignment_target() {
    let source = "program var x : %; begin z as 1 end.";

    match compile(source) {
        Err(CompileError::Semantic(SemanticError::UndeclaredVariable { name, .. })) => {
            assert_eq!(name, "z");
        }
        other => panic!("Expected an undeclared-variable error, got {:?}", other),
    }
}

#[test]
fn test_unterminated_comment_terminates_with_error() {
    let source = "program var x : %; begin x as 5 end. { never closed";

    match compile(source) {
        Err(CompileError::Lex(err)) => {
            assert!(err.message.contains("Unterminated comment"));
        }
        other => panic!("Expected a lexical error, got {:?}", other),
    }
}

#[test]
fn test_conditional_with_else_has_three_children() {
    let source = "program var x, y, z : %; \
                  begin if x LT y then z as x plus y else z as x min y end.";

    let compilation = compile(source).expect("Compilation failed");

    match &compilation.program.statements[0] {
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            assert!(matches!(
                condition.as_ref(),
                AstNode::BinaryOp { op: BinOp::Lt, .. }
            ));
            assert!(matches!(then_branch.as_ref(), AstNode::Assignment { .. }));
            let else_branch = else_branch.as_ref().expect("else branch missing");
            assert!(matches!(else_branch.as_ref(), AstNode::Assignment { .. }));
        }
        other => panic!("Expected a conditional, got {:?}", other),
    }
}

#[test]
fn test_declaration_boundary_before_begin() {
    // With the separator the declaration registers; without it the parse
    // fails.
    let compilation = compile("program var x : %; begin x as 1 end.").expect("Compilation failed");
    let mut analyzer = SemanticAnalyzer::new(&compilation.tokens);
    analyzer.analyze().expect("Analysis failed");
    assert_eq!(analyzer.variable_type("x"), Some(ValueType::Integer));

    match compile("program var x : % begin x as 1 end.") {
        Err(CompileError::Parse(err)) => {
            assert!(err.message.contains("Expected ';' after declaration"));
        }
        other => panic!("Expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_analysis_is_repeatable() {
    let source = "program var x, y : %; begin x as 1; y as x plus 2 end.";
    let tokens = Lexer::new(source).tokenize().expect("Lexing failed");

    let mut analyzer = SemanticAnalyzer::new(&tokens);
    analyzer.analyze().expect("First analysis failed");
    let first = analyzer.symbol_table().clone();

    analyzer.analyze().expect("Second analysis failed");
    assert_eq!(&first, analyzer.symbol_table());
}

#[test]
fn test_full_sample_program() {
    let source = r#"
        { Sample program exercising every statement form }
        program var
            x, y, z, result : %;
        begin
            x as 10;
            y as 20;

            if x LT y then
                z as x plus y
            else
                z as x min y;

            for x as 0 to 10 do
                y as y plus x;

            while x GT 0 do
                x as x min 1;

            read(x, y);
            write(z, result)
        end.
    "#;

    let compilation = compile(source).expect("Compilation failed");
    let program = &compilation.program;

    assert_eq!(program.declarations.len(), 4);
    assert_eq!(program.statements.len(), 7);
    assert!(matches!(&program.statements[2], AstNode::If { .. }));
    assert!(matches!(&program.statements[3], AstNode::For { .. }));
    assert!(matches!(&program.statements[4], AstNode::While { .. }));
    assert!(matches!(&program.statements[5], AstNode::Read { .. }));
    assert!(matches!(&program.statements[6], AstNode::Write { .. }));
}

#[test]
fn test_empty_statement_list_compiles() {
    let compilation = compile("program var begin end.").expect("Compilation failed");
    assert!(compilation.program.declarations.is_empty());
    assert!(compilation.program.statements.is_empty());
}

#[test]
fn test_errors_carry_locations() {
    let err = compile("program var x : %;\nbegin\n  x as @\nend.").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 3"), "{}", message);
}
