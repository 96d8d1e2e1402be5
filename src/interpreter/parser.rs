/// Parser entry point.
///
/// Drives the token stream through the operator and value stacks and returns
/// the finished expression tree.
pub mod core;

/// Operator and value stacks.
///
/// Holds the pending operators, calls and group boundaries, and binds them
/// into tree nodes.
pub mod stack;
