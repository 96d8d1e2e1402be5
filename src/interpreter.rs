/// The evaluator module computes the value of expression trees.
///
/// Evaluation is a recursive walk over [`Expr`](crate::ast::Expr) that never
/// fails: every operator has a defined numeric result for every input.
///
/// # Responsibilities
/// - Applies unary and binary operators to `f64` operands.
/// - Runs bound function calls against their private environments.
/// - Provides the builtin function library.
pub mod evaluator;
/// The lexer module tokenizes formulas for further parsing.
///
/// The lexer reads the raw formula text and produces a flat stream of tokens:
/// numbers, identifiers, operators, parentheses and commas. It tells prefix
/// minus from infix minus and rejects adjacent values or operators early.
pub mod lexer;
/// The operator table.
///
/// Maps every operator lexeme to its operator kind, arity, precedence and
/// associativity.
pub mod operator;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Runs the two-stack precedence algorithm over the token stream.
/// - Binds function names to argument lists and comma groups to the
///   last-argument function.
/// - Resolves variables against the caller's table.
pub mod parser;
