use crate::{
    ast::{Expr, Functions, Variables},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::stack::{Marker, Stacks},
    },
};

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a formula into an expression tree.
///
/// The whole input behaves as if wrapped in one more pair of parentheses, so a
/// top-level comma list such as `x = 2, x * 3` evaluates every item and yields
/// the last one. Empty input yields the constant `0`.
///
/// Identifiers found in `functions` must be followed by an argument list. Every
/// other identifier is a variable: it is looked up in `variables`, and inserted
/// there with value `0` when missing. Passing the same `variables` map to
/// several calls lets formulas share state.
///
/// # Parameters
/// - `input`: The formula text.
/// - `variables`: Caller-owned variable cells; read and extended.
/// - `functions`: Caller-owned function implementations; read only.
///
/// Parsing runs on explicit stacks and accepts any nesting depth. The tree it
/// returns is walked recursively, see [`Expr::eval`] for that limit.
///
/// # Errors
/// Returns the first [`ParseError`] found; no partial tree is produced.
///
/// # Example
/// ```
/// use exprcalc::{Functions, Variables, parse};
///
/// let mut vars = Variables::new();
/// let funcs = Functions::new();
///
/// let _ = parse("x = 10", &mut vars, &funcs).unwrap().eval();
/// let next = parse("x + 1", &mut vars, &funcs).unwrap();
///
/// assert_eq!(next.eval(), 11.0);
/// ```
pub fn parse(input: &str, variables: &mut Variables, functions: &Functions) -> ParseResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { stacks: Stacks::new(),
                              variables,
                              functions,
                              expect_call: false };

    parser.open_paren();
    for token in tokens {
        parser.accept(token)?;
    }
    parser.close_paren()?;

    parser.stacks.finish()
}

/// Per-parse state: the stacks plus the caller's tables.
struct Parser<'a> {
    stacks:      Stacks,
    variables:   &'a mut Variables,
    functions:   &'a Functions,
    /// Set right after a function name; only `(` may follow.
    expect_call: bool,
}

impl Parser<'_> {
    /// Feeds one token into the stacks.
    fn accept(&mut self, token: Token) -> ParseResult<()> {
        match token {
            Token::LParen => self.open_paren(),
            _ if self.expect_call => return Err(ParseError::BadCall),
            Token::RParen => self.close_paren()?,
            Token::Comma => self.stacks.fold_to_paren()?,
            Token::Number(value) => self.stacks.push_value(Expr::Constant(value)),
            Token::Operator(op) => self.stacks.push_operator(op)?,
            Token::Identifier(name) => self.identifier(name),
        }
        Ok(())
    }

    fn open_paren(&mut self) {
        self.expect_call = false;
        self.stacks.open_group();
    }

    fn close_paren(&mut self) -> ParseResult<()> {
        if self.expect_call {
            return Err(ParseError::BadCall);
        }
        self.stacks.close_group()
    }

    /// Resolves a name to a pending call or a variable reference.
    fn identifier(&mut self, name: String) {
        if let Some(func) = self.functions.get(&name) {
            self.stacks.markers.push(Marker::Call(func.clone()));
            self.expect_call = true;
            return;
        }

        let var = self.variables.entry(name).or_default().clone();
        self.stacks.push_value(Expr::Variable(var));
    }
}
