use crate::ast::Expr;

impl Expr {
    /// Evaluates the tree and returns its value.
    ///
    /// Evaluation never fails: every operator has a defined numeric result
    /// (division by zero yields `0`, a negative square root yields NaN).
    /// Operands are evaluated strictly left to right and both sides of `&&`
    /// and `||` are always evaluated. The only state that changes is the
    /// contents of variable cells (through `=`) and call environments.
    ///
    /// # Recursion
    /// The walk recurses once per nesting level, and so does dropping a tree.
    /// A few thousand levels fit on a default thread stack; tens of thousands
    /// of chained prefix operators can overflow it.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{Functions, Variables, parse};
    ///
    /// let mut vars = Variables::new();
    /// let expr = parse("(x = 1, x = 2, x)", &mut vars, &Functions::new()).unwrap();
    ///
    /// assert_eq!(expr.eval(), 2.0);
    /// assert_eq!(vars["x"].eval(), 2.0);
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable(var) => var.eval(),
            Self::Unary { op, operand } => op.apply(operand.eval()),
            Self::Binary { op, left, right } => Self::eval_binary(*op, left, right),
            Self::Assign { target, value } => {
                let value = value.eval();
                target.set(value);
                value
            },
            Self::Call(call) => call.eval(),
        }
    }
}
