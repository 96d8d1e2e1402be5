/// Parsing errors.
///
/// Defines every error that can occur while tokenizing or parsing a formula:
/// unbalanced parentheses, misplaced values, unknown operators, malformed calls
/// and invalid assignments.
pub mod parse_error;

pub use parse_error::ParseError;
