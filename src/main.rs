// Slate: compiler front-end for a small Pascal-like teaching language

use std::fs;
use std::path::Path;
use std::process;

use tracing_subscriber::{fmt, EnvFilter};

use slate::compiler::{compile, Compilation};
use slate::parser::ast::AstNode;

fn main() {
    fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("slate");

    let mut verbose = false;
    let mut file = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            _ => file = Some(arg.clone()),
        }
    }

    let Some(file) = file else {
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.sl> [--verbose]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/sample.sl            # Compile the sample program",
            program_name
        );
        eprintln!(
            "  {} demos/sample.sl --verbose  # Also dump tokens and the AST",
            program_name
        );
        process::exit(1);
    };

    if !Path::new(&file).exists() {
        eprintln!("Error: File '{}' not found", file);
        eprintln!("Usage: {} <file.sl> [--verbose]", program_name);
        process::exit(1);
    }

    let source = match fs::read_to_string(&file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Failed to read '{}': {}", file, err);
            process::exit(1);
        }
    };

    match compile(&source) {
        Ok(compilation) => {
            if verbose {
                dump_tokens(&compilation);
                dump_ast(&compilation);
            }
            println!(
                "Compilation succeeded: {} declarations, {} statements",
                compilation.program.declarations.len(),
                compilation.program.statements.len()
            );
        }
        Err(err) => {
            eprintln!("Compilation failed: {}", err);
            process::exit(1);
        }
    }
}

fn dump_tokens(compilation: &Compilation) {
    println!("Tokens:");
    for token in &compilation.tokens {
        println!(
            "  {:?} '{}' (line {}, column {})",
            token.kind, token.lexeme, token.location.line, token.location.column
        );
    }
}

fn dump_ast(compilation: &Compilation) {
    println!("AST:");
    for node in &compilation.program.declarations {
        print_node(node, 1);
    }
    for node in &compilation.program.statements {
        print_node(node, 1);
    }
}

/// Print one node and its children, indented by depth.
fn print_node(node: &AstNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        AstNode::VarDecl { name, var_type, .. } => {
            println!("{}VarDecl: {} : {}", indent, name, var_type);
        }
        AstNode::Assignment { target, value, .. } => {
            println!("{}Assignment: {}", indent, target);
            print_node(value, depth + 1);
        }
        AstNode::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            println!("{}If", indent);
            print_node(condition, depth + 1);
            print_node(then_branch, depth + 1);
            if let Some(else_branch) = else_branch {
                print_node(else_branch, depth + 1);
            }
        }
        AstNode::For {
            init, bound, body, ..
        } => {
            println!("{}For", indent);
            print_node(init, depth + 1);
            print_node(bound, depth + 1);
            print_node(body, depth + 1);
        }
        AstNode::While {
            condition, body, ..
        } => {
            println!("{}While", indent);
            print_node(condition, depth + 1);
            print_node(body, depth + 1);
        }
        AstNode::Read { targets, .. } => {
            println!("{}Read", indent);
            for target in targets {
                print_node(target, depth + 1);
            }
        }
        AstNode::Write { values, .. } => {
            println!("{}Write", indent);
            for value in values {
                print_node(value, depth + 1);
            }
        }
        AstNode::BinaryOp {
            op, left, right, ..
        } => {
            println!("{}BinaryOp: {:?}", indent, op);
            print_node(left, depth + 1);
            print_node(right, depth + 1);
        }
        AstNode::UnaryOp { op, operand, .. } => {
            println!("{}UnaryOp: {:?}", indent, op);
            print_node(operand, depth + 1);
        }
        AstNode::Literal {
            value, value_type, ..
        } => {
            println!("{}Literal: {} ({})", indent, value, value_type);
        }
        AstNode::Variable(name, _) => {
            println!("{}Variable: {}", indent, name);
        }
    }
}
