//! # exprcalc
//!
//! exprcalc is a small arithmetic-expression engine written in Rust.
//! It parses a formula once into an expression tree, which can then be
//! evaluated cheaply as many times as needed, while the caller changes the
//! variables it refers to.
//!
//! ```
//! use exprcalc::{Functions, Var, Variables, parse};
//!
//! let mut vars = Variables::new();
//! vars.insert("x".to_string(), Var::new(2.0));
//!
//! let expr = parse("x * x + 1", &mut vars, &Functions::new()).unwrap();
//! assert_eq!(expr.eval(), 5.0);
//!
//! vars["x"].set(3.0);
//! assert_eq!(expr.eval(), 10.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` tree, the operator kinds it uses, and the
/// handles through which it refers to caller-owned state: `Var` cells and
/// `Func` implementations.
///
/// # Responsibilities
/// - Defines one node type per construct: constant, variable, unary, binary,
///   assignment and call.
/// - Models shared variable cells and per-call-site environments.
/// - Renders trees as text for debugging.
pub mod ast;
/// Provides the error type for parsing.
///
/// Only parsing can fail; evaluation always produces a number.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Holds the operator table, the lexer, the parser and the evaluator.
/// - Exposes the builtin function library.
pub mod interpreter;
/// General numeric helpers.
///
/// Total conversions between `f64` and `i64`, and the integer and remainder
/// operations used by the evaluator.
pub mod util;

pub use crate::{
    ast::{Call, Expr, Func, FuncEnv, Function, Functions, Var, Variables},
    error::ParseError,
    interpreter::{evaluator::function::builtin, parser::core::parse},
};

/// Parses and evaluates a formula once.
///
/// The formula sees a fresh, empty variable table and the builtin functions.
///
/// # Errors
/// Returns the [`ParseError`] raised while parsing.
///
/// # Examples
/// ```
/// use exprcalc::{ParseError, evaluate};
///
/// assert_eq!(evaluate("4/2+8*4/2"), Ok(18.0));
/// assert_eq!(evaluate("max(1, 5, 3) % 3"), Ok(-1.0));
/// assert_eq!(evaluate("2 = 3"), Err(ParseError::BadAssignment));
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    let mut variables = Variables::new();
    let expr = parse(source, &mut variables, &builtin::functions())?;
    Ok(expr.eval())
}
