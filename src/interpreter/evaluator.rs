/// Binary operator evaluation logic.
///
/// Arithmetic, shifts, comparisons, bitwise and logical operators over `f64`,
/// including the "division by zero yields zero" policy.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Negation, logical NOT, bitwise complement and square root.
pub mod unary;

/// Core evaluation: the recursive tree walk over [`Expr`](crate::ast::Expr).
pub mod core;

/// Function calls.
///
/// Evaluation of bound call nodes, the last-argument function used for comma
/// groups, and the standard library of built-in functions.
pub mod function;
