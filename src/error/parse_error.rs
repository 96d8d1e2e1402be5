use thiserror::Error;

/// Represents all errors that can occur while tokenizing or parsing a formula.
///
/// Errors are kinds only; they carry no source position. Evaluation never
/// fails, so this is the only error type of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unbalanced or misplaced parentheses.
    #[error("parenthesis mismatch")]
    ParenthesisMismatch,
    /// A number appeared where an operator was expected.
    #[error("unexpected number")]
    UnexpectedNumber,
    /// An identifier appeared where an operator was expected.
    #[error("unexpected identifier")]
    UnexpectedIdentifier,
    /// A function name was not followed by an argument list.
    #[error("function call expected")]
    BadCall,
    /// The left side of `=` is not a variable.
    #[error("variable expected in assignment")]
    BadAssignment,
    /// A symbol that is not a known operator in its position.
    #[error("unknown operator")]
    BadOperator,
    /// An operator lacks one of its operands.
    #[error("missing operand")]
    OperandMissing,
    /// Reserved: adjacent values are reported as `UnexpectedNumber` or
    /// `UnexpectedIdentifier` instead.
    #[error("missing operator")]
    OperatorMissing,
}
