use logos::Logos;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::ParseError,
    interpreter::{
        operator::{self, Operator},
        parser::core::ParseResult,
    },
};

/// Raw lexical units, before operator disambiguation.
///
/// Operators are matched longest-first by logos, so `>>` wins over `>` and
/// `&&` over `&`. Characters that start no lexeme surface as lexer errors.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// Numeric literal tokens, such as `42`, `3.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x`, `add3` or
    /// `π`. Any Unicode letter starts one.
    #[regex(r"\p{L}[\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Any operator lexeme of the operator table.
    ///
    /// Keep in sync with `operator_table!` in `operator.rs`.
    #[token("!")]
    #[token("~")]
    #[token("√")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("+")]
    #[token("-")]
    #[token("<<")]
    #[token(">>")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("&")]
    #[token("^")]
    #[token("|")]
    #[token("&&")]
    #[token("||")]
    #[token("=")]
    Symbol,
    /// Unicode whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// A lexical token of a formula.
///
/// Tokens carry no position information; they are consumed by the parser and
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// A variable or function name.
    Identifier(String),
    /// An operator, with prefix minus already told apart from binary minus.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits `input` into tokens.
///
/// A single pass tracks whether a value (number, identifier, prefix operator or
/// `(`) is expected next. That state decides whether `-` is a prefix or an
/// infix minus, and rejects adjacent values or adjacent infix operators as soon
/// as they appear.
///
/// # Errors
/// - `UnexpectedNumber` / `UnexpectedIdentifier` when a value follows a value.
/// - `OperandMissing` when an infix operator appears where a value is expected.
/// - `BadOperator` when a symbol matches no known operator, or a prefix
///   operator appears where an infix one is expected.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::{BinaryOperator, UnaryOperator},
///     interpreter::{lexer::{Token, tokenize}, operator::Operator},
/// };
///
/// let tokens = tokenize("2--3").unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator(Operator::Binary(BinaryOperator::Sub)),
///                 Token::Operator(Operator::Unary(UnaryOperator::Negate)),
///                 Token::Number(3.0)]);
/// ```
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut expect_value = true;
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Number(value)) => {
                if !expect_value {
                    return Err(ParseError::UnexpectedNumber);
                }
                expect_value = false;
                Token::Number(value)
            },
            Ok(Lexeme::Identifier(name)) => {
                if !expect_value {
                    return Err(ParseError::UnexpectedIdentifier);
                }
                expect_value = false;
                Token::Identifier(name)
            },
            Ok(Lexeme::LParen) => {
                expect_value = true;
                Token::LParen
            },
            Ok(Lexeme::RParen) => {
                expect_value = false;
                Token::RParen
            },
            Ok(Lexeme::Comma) => {
                expect_value = true;
                Token::Comma
            },
            Ok(Lexeme::Symbol) => {
                let op = resolve_operator(lexer.slice(), expect_value)?;
                expect_value = true;
                Token::Operator(op)
            },
            Ok(Lexeme::Ignored) => continue,
            Err(()) => return Err(ParseError::BadOperator),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Maps an operator lexeme to its operator, given the expectation state.
///
/// When a value is expected only prefix operators are valid, and `-` denotes
/// negation. Otherwise only infix operators are valid.
fn resolve_operator(lexeme: &str, expect_value: bool) -> ParseResult<Operator> {
    let op = operator::lookup(lexeme).ok_or(ParseError::BadOperator)?;

    match (op, expect_value) {
        (Operator::Binary(BinaryOperator::Sub), true) => Ok(UnaryOperator::Negate.into()),
        (Operator::Unary(_), true) | (Operator::Binary(_) | Operator::Assign, false) => Ok(op),
        (Operator::Binary(_) | Operator::Assign, true) => Err(ParseError::OperandMissing),
        (Operator::Unary(_), false) => Err(ParseError::BadOperator),
    }
}
