/// Built-in function implementations.
///
/// A small standard library (`abs`, `min`, `max`, `if`, `accum`, ...) that
/// callers can pass to the parser as a ready-made function table.
pub mod builtin;

/// Call evaluation and the last-argument function.
pub mod core;

pub use self::core::last_arg;
