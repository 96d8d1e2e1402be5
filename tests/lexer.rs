use exprcalc::{
    ParseError,
    ast::{BinaryOperator, UnaryOperator},
    interpreter::{
        lexer::{Token, tokenize},
        operator::{Associativity, LEXEMES, OPERATORS, Operator, lookup},
    },
};
use rstest::rstest;

fn op(lexeme: &str) -> Token {
    Token::Operator(lookup(lexeme).unwrap())
}

fn num(value: f64) -> Token {
    Token::Number(value)
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[rstest]
#[case("", vec![])]
#[case("2", vec![num(2.0)])]
#[case("  1 \t+\n2 ", vec![num(1.0), op("+"), num(2.0)])]
#[case("2+3/234.0", vec![num(2.0), op("+"), num(3.0), op("/"), num(234.0)])]
#[case("2+-3", vec![num(2.0), op("+"), op("-u"), num(3.0)])]
#[case("2--3", vec![num(2.0), op("-"), op("-u"), num(3.0)])]
#[case("-(-2)", vec![op("-u"), Token::LParen, op("-u"), num(2.0), Token::RParen])]
#[case("---2", vec![op("-u"), op("-u"), op("-u"), num(2.0)])]
#[case("1>2", vec![num(1.0), op(">"), num(2.0)])]
#[case("1>-2", vec![num(1.0), op(">"), op("-u"), num(2.0)])]
#[case("1>>2", vec![num(1.0), op(">>"), num(2.0)])]
#[case("1>>-2", vec![num(1.0), op(">>"), op("-u"), num(2.0)])]
#[case("1>>!2", vec![num(1.0), op(">>"), op("!"), num(2.0)])]
#[case("1&&2", vec![num(1.0), op("&&"), num(2.0)])]
#[case("1&&", vec![num(1.0), op("&&")])]
#[case("1<=2!=0", vec![num(1.0), op("<="), num(2.0), op("!="), num(0.0)])]
#[case("√x", vec![op("√"), ident("x")])]
#[case("a_1 + B2", vec![ident("a_1"), op("+"), ident("B2")])]
#[case("f(1, x)", vec![ident("f"), Token::LParen, num(1.0), Token::Comma, ident("x"), Token::RParen])]
#[case("x=-1", vec![ident("x"), op("="), op("-u"), num(1.0)])]
#[case("π", vec![ident("π")])]
#[case("é1_ä + x", vec![ident("é1_ä"), op("+"), ident("x")])]
#[case("√π", vec![op("√"), ident("π")])]
#[case("1\u{a0}+\u{2003}2\u{b}", vec![num(1.0), op("+"), num(2.0)])]
fn tokenizes(#[case] src: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(src), Ok(expected));
}

#[rstest]
#[case("1 1", ParseError::UnexpectedNumber)]
#[case("x 1", ParseError::UnexpectedNumber)]
#[case("1x", ParseError::UnexpectedIdentifier)]
#[case(") x", ParseError::UnexpectedIdentifier)]
#[case("*1", ParseError::OperandMissing)]
#[case("(=1", ParseError::OperandMissing)]
#[case("1 ~ 2", ParseError::BadOperator)]
#[case("1 $ 2", ParseError::BadOperator)]
fn rejects(#[case] src: &str, #[case] expected: ParseError) {
    assert_eq!(tokenize(src), Err(expected));
}

#[test]
fn every_lexeme_tokenizes_to_its_operator() {
    for def in OPERATORS.iter().filter(|def| def.lexeme != "-u") {
        let src = if def.operator.is_unary() {
            format!("{}2", def.lexeme)
        } else {
            format!("1{}2", def.lexeme)
        };
        let tokens = tokenize(&src).unwrap();
        let ops: Vec<_> = tokens.iter()
                                .filter_map(|token| match token {
                                    Token::Operator(op) => Some(*op),
                                    _ => None,
                                })
                                .collect();

        assert_eq!(ops, vec![def.operator], "{src}");
    }
}

#[test]
fn lexemes_are_unique() {
    for (i, lexeme) in LEXEMES.iter().enumerate() {
        assert!(!LEXEMES[i + 1..].contains(lexeme), "{lexeme} listed twice");
    }
}

#[test]
fn prefix_operators_bind_tightest_and_assignment_loosest() {
    let loosest_unary = OPERATORS.iter()
                                 .filter(|def| def.operator.is_unary())
                                 .map(|def| def.precedence)
                                 .min()
                                 .unwrap();
    let tightest_binary = OPERATORS.iter()
                                   .filter(|def| !def.operator.is_unary())
                                   .map(|def| def.precedence)
                                   .max()
                                   .unwrap();
    assert!(loosest_unary > tightest_binary);

    let assign = Operator::Assign.def();
    assert_eq!(assign.associativity, Associativity::Right);
    assert!(OPERATORS.iter().all(|def| def.precedence >= assign.precedence));
}

#[test]
fn operators_convert_from_their_kinds() {
    assert_eq!(Some(Operator::from(UnaryOperator::Negate)), lookup("-u"));
    assert_eq!(Some(Operator::from(BinaryOperator::BitXor)), lookup("^"));
}

#[test]
fn operators_display_as_their_lexeme() {
    assert_eq!(lookup("<<").unwrap().to_string(), "<<");
    assert_eq!(lookup("-u").unwrap().to_string(), "-u");
    assert_eq!(lookup("=").unwrap().arity(), 2);
    assert_eq!(lookup("√").unwrap().arity(), 1);
}
