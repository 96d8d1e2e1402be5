use crate::{
    ast::UnaryOperator,
    util::num::{bool_to_f64, f64_to_i64, i64_to_f64},
};

impl UnaryOperator {
    /// Applies the operator to an evaluated operand.
    ///
    /// - `Negate`: arithmetic negation.
    /// - `Not`: `1` if the operand is `0`, else `0`.
    /// - `BitNot`: complement of the operand truncated to `i64`.
    /// - `Sqrt`: real square root; NaN for negative operands.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.apply(5.0), -5.0);
    /// assert_eq!(UnaryOperator::BitNot.apply(9.0), -10.0);
    /// assert_eq!(UnaryOperator::Not.apply(9.0), 0.0);
    /// assert_eq!(UnaryOperator::Sqrt.apply(16.0), 4.0);
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Not => bool_to_f64(value == 0.0),
            Self::BitNot => i64_to_f64(!f64_to_i64(value)),
            Self::Sqrt => value.sqrt(),
        }
    }
}
