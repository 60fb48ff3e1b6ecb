//! Lexer (tokenizer) for Slate source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser and the semantic analyzer. Comments are brace-delimited and do
//! not nest: the first `}` after a `{` ends the comment regardless of any
//! interior braces. That is a documented limitation of the language, not a
//! bug in the lexer.
//!
//! Operator lookup runs before identifier scanning, so a word-form operator
//! also matches at the head of a longer word: `orange` tokenizes as `or`
//! followed by the identifier `ange`. Identifiers may contain `.`, which is
//! what lets the program terminator `end.` resolve as a single keyword.

use super::ast::SourceLocation;
use std::fmt;

/// All token kinds produced by the lexer.
///
/// The set is closed: keywords, word-form and symbolic operators, literals,
/// identifiers, punctuation, and the three type sigils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Relational operators
    Ne,
    Eq,
    Lt,
    Le,
    Gt,
    Ge,

    // Additive operators
    Plus,
    Min,
    Or,

    // Multiplicative operators
    Mult,
    Div,
    And,

    // Unary negation
    Not, // ~

    // Identifiers and literals
    Identifier,
    IntLiteral,
    FloatLiteral,
    BoolLiteral,

    // Punctuation
    LParen,    // (
    RParen,    // )
    Semicolon, // ;
    Colon,     // :
    Comma,     // ,

    // Keywords
    Program,
    Var,
    Begin,
    End, // end.
    As,
    If,
    Then,
    Else,
    For,
    To,
    Do,
    While,
    Read,
    Write,

    // Type sigils
    IntegerType, // %
    FloatType,   // !
    BooleanType, // $

    // End of input
    Eof,
}

/// A single token: kind, original text, and where it starts.
///
/// Every token carries a [`SourceLocation`] so that diagnostics can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::IntLiteral => write!(f, "integer literal {}", self.lexeme),
            TokenKind::FloatLiteral => write!(f, "float literal {}", self.lexeme),
            TokenKind::BoolLiteral => write!(f, "boolean literal {}", self.lexeme),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Fixed operator table, matched by exact prefix at the read position.
///
/// First match wins, so no entry may be a proper prefix of another entry;
/// [`Lexer::new`] asserts this and a unit test pins it.
const OPERATOR_TABLE: &[(&str, TokenKind)] = &[
    ("NE", TokenKind::Ne),
    ("EQ", TokenKind::Eq),
    ("LT", TokenKind::Lt),
    ("LE", TokenKind::Le),
    ("GT", TokenKind::Gt),
    ("GE", TokenKind::Ge),
    ("plus", TokenKind::Plus),
    ("min", TokenKind::Min),
    ("or", TokenKind::Or),
    ("mult", TokenKind::Mult),
    ("div", TokenKind::Div),
    ("and", TokenKind::And),
    ("~", TokenKind::Not),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    (",", TokenKind::Comma),
];

/// Characters a numeric literal may contain after its leading digit: hex
/// digits, radix suffix letters, and the decimal point.
const NUMBER_CHARS: &str = "ABCDEFabcdefHhOoBbDd.";

/// True when no table entry is a proper prefix of another entry.
fn operator_table_is_prefix_free() -> bool {
    OPERATOR_TABLE.iter().all(|&(text, _)| {
        OPERATOR_TABLE
            .iter()
            .filter(|&&(other, _)| other != text)
            .all(|&(other, _)| !other.starts_with(text))
    })
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for Slate source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        debug_assert!(
            operator_table_is_prefix_free(),
            "operator table entries must not prefix each other"
        );
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let ch = self.input[self.position];

            if ch == '{' {
                self.skip_comment()?;
                continue;
            }

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if let Some(token) = self.type_sigil(ch) {
                tokens.push(token);
                continue;
            }

            // Operators before identifiers; word operators win at the head
            // of a longer word.
            if let Some(token) = self.operator() {
                tokens.push(token);
                continue;
            }

            if ch.is_alphabetic() {
                tokens.push(self.identifier_or_keyword());
                continue;
            }

            if ch.is_ascii_digit() {
                tokens.push(self.number_literal()?);
                continue;
            }

            return Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: self.current_location(),
            });
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.current_location()));
        Ok(tokens)
    }

    /// Skip a brace comment. The first `}` ends the comment; running out of
    /// input first is an error rather than a hang.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // consume '{'

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '}' {
                return Ok(());
            }
        }

        Err(LexError {
            message: "Unterminated comment".to_string(),
            location: start_loc,
        })
    }

    /// Produce a type token for one of the sigils `%`, `!`, `$`.
    fn type_sigil(&mut self, ch: char) -> Option<Token> {
        let kind = match ch {
            '%' => TokenKind::IntegerType,
            '!' => TokenKind::FloatType,
            '$' => TokenKind::BooleanType,
            _ => return None,
        };

        let loc = self.current_location();
        self.advance();
        Some(Token::new(kind, ch.to_string(), loc))
    }

    /// Match an operator from the fixed table at the read position.
    fn operator(&mut self) -> Option<Token> {
        let loc = self.current_location();

        for &(text, kind) in OPERATOR_TABLE {
            if self.matches_at_position(text) {
                for _ in 0..text.chars().count() {
                    self.advance();
                }
                return Some(Token::new(kind, text, loc));
            }
        }

        None
    }

    /// True when the remaining input starts with `text`.
    fn matches_at_position(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(offset, ch)| self.input.get(self.position + offset) == Some(&ch))
    }

    /// Scan an identifier and resolve it against the keyword table.
    ///
    /// `.` is a valid identifier character so `end.` arrives at the lookup
    /// as one word.
    fn identifier_or_keyword(&mut self) -> Token {
        let loc = self.current_location();
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_alphabetic() || ch.is_ascii_digit() || ch == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();

        let kind = match text.as_str() {
            "program" => TokenKind::Program,
            "var" => TokenKind::Var,
            "begin" => TokenKind::Begin,
            "end." => TokenKind::End,
            "true" | "false" => TokenKind::BoolLiteral,
            "as" => TokenKind::As,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "to" => TokenKind::To,
            "do" => TokenKind::Do,
            "while" => TokenKind::While,
            "read" => TokenKind::Read,
            "write" => TokenKind::Write,
            _ => TokenKind::Identifier,
        };

        Token::new(kind, text, loc)
    }

    /// Scan a maximal digit run (plus radix letters and the decimal point)
    /// and classify it afterwards.
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || NUMBER_CHARS.contains(ch) {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();

        let kind = classify_number(&text).ok_or_else(|| LexError {
            message: format!("Invalid numeric literal: {}", text),
            location: loc,
        })?;

        Ok(Token::new(kind, text, loc))
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Classify a scanned digit run, checking the literal forms in the order
/// the language defines them: binary, octal, plain decimal, float with an
/// optional exponent, hexadecimal. Suffix letters are case-insensitive.
fn classify_number(text: &str) -> Option<TokenKind> {
    if is_radix_form(text, 'b', |c| c == '0' || c == '1') {
        return Some(TokenKind::IntLiteral);
    }
    if is_radix_form(text, 'o', |c| ('0'..='7').contains(&c)) {
        return Some(TokenKind::IntLiteral);
    }
    if is_decimal(text) {
        return Some(TokenKind::IntLiteral);
    }
    if is_float(text) {
        return Some(TokenKind::FloatLiteral);
    }
    if is_radix_form(text, 'h', |c| c.is_ascii_hexdigit()) {
        return Some(TokenKind::IntLiteral);
    }
    None
}

/// `body` + `suffix` where the suffix letter matches case-insensitively and
/// every body character satisfies `is_digit`.
fn is_radix_form(text: &str, suffix: char, is_digit: fn(char) -> bool) -> bool {
    let Some(body) = text
        .strip_suffix(suffix)
        .or_else(|| text.strip_suffix(suffix.to_ascii_uppercase()))
    else {
        return false;
    };

    !body.is_empty() && body.chars().all(is_digit)
}

/// Plain decimal digits with an optional `d`/`D` suffix.
fn is_decimal(text: &str) -> bool {
    let body = text
        .strip_suffix('d')
        .or_else(|| text.strip_suffix('D'))
        .unwrap_or(text);

    !body.is_empty() && body.chars().all(|c| c.is_ascii_digit())
}

/// Digits around a single decimal point, optionally followed by `E`/`e`,
/// an optional sign, and a non-empty exponent. The scanner itself never
/// produces a signed exponent (`+`/`-` stop the digit run), but the full
/// form is accepted for direct callers.
fn is_float(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(|c| c == 'e' || c == 'E') {
        Some(split) => (&text[..split], Some(&text[split + 1..])),
        None => (text, None),
    };

    if let Some(exp) = exponent {
        let digits = exp
            .strip_prefix('+')
            .or_else(|| exp.strip_prefix('-'))
            .unwrap_or(exp);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }

    let Some((whole, frac)) = mantissa.split_once('.') else {
        return false;
    };

    if whole.is_empty() && frac.is_empty() {
        return false;
    }

    whole.chars().all(|c| c.is_ascii_digit()) && frac.chars().all(|c| c.is_ascii_digit())
}
