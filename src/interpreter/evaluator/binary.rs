use crate::{
    ast::{BinaryOperator, Expr},
    util::num::{bool_to_f64, f64_to_i64, i64_to_f64, ieee_remainder, shift_left, shift_right},
};

impl Expr {
    /// Evaluates both operands, left first, and combines them with `op`.
    pub(crate) fn eval_binary(op: BinaryOperator, left: &Self, right: &Self) -> f64 {
        let a = left.eval();
        let b = right.eval();
        op.apply(a, b)
    }
}

impl BinaryOperator {
    /// Combines two evaluated operands.
    ///
    /// Division and remainder by exactly `0` yield `0`. Shifts and bitwise
    /// operators work on the operands truncated to `i64`. Comparisons and
    /// logical operators yield `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(9.0, 4.0), 2.25);
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 0.0), 0.0);
    /// assert_eq!(BinaryOperator::Rem.apply(9.0, 4.0), 1.0);
    /// assert_eq!(BinaryOperator::Shl.apply(5.0, 1.0), 10.0);
    /// assert_eq!(BinaryOperator::BitAnd.apply(10.0, 7.0), 2.0);
    /// assert_eq!(BinaryOperator::Or.apply(0.0, 4.0), 1.0);
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Mul => a * b,
            Self::Div => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            },
            Self::Rem => {
                if b == 0.0 {
                    0.0
                } else {
                    ieee_remainder(a, b)
                }
            },
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Shl => i64_to_f64(shift_left(f64_to_i64(a), f64_to_i64(b))),
            Self::Shr => i64_to_f64(shift_right(f64_to_i64(a), f64_to_i64(b))),
            Self::Less => bool_to_f64(a < b),
            Self::LessEqual => bool_to_f64(a <= b),
            Self::Greater => bool_to_f64(a > b),
            Self::GreaterEqual => bool_to_f64(a >= b),
            Self::Equal => bool_to_f64(a == b),
            Self::NotEqual => bool_to_f64(a != b),
            Self::BitAnd => i64_to_f64(f64_to_i64(a) & f64_to_i64(b)),
            Self::BitXor => i64_to_f64(f64_to_i64(a) ^ f64_to_i64(b)),
            Self::BitOr => i64_to_f64(f64_to_i64(a) | f64_to_i64(b)),
            Self::And => bool_to_f64(a != 0.0 && b != 0.0),
            Self::Or => bool_to_f64(a != 0.0 || b != 0.0),
        }
    }
}
