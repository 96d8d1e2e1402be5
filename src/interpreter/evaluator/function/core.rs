use crate::ast::{Call, Expr, Func, FuncEnv};

impl Call {
    /// Runs the implementation over the argument nodes and this call site's
    /// environment.
    ///
    /// Arguments are handed over unevaluated; the implementation decides which
    /// of them to evaluate. Changes the implementation makes to the environment
    /// are visible to the next evaluation of the same node.
    #[must_use]
    pub fn eval(&self) -> f64 {
        let mut env = self.env.borrow_mut();
        self.func.call(&self.args, &mut env)
    }
}

/// Returns the last-argument function.
///
/// It evaluates every argument from left to right, for their side effects, and
/// returns the value of the last one (`0` without arguments). The parser binds
/// it to parenthesised comma lists that are not argument lists, giving
/// `(a, b, c)` the "evaluate in sequence, keep the last" meaning.
///
/// # Example
/// ```
/// use exprcalc::{Expr, Var, interpreter::evaluator::function::last_arg};
///
/// let x = Var::new(3.0);
/// let group = last_arg().bind(vec![Expr::Constant(2.0),
///                                  Expr::Variable(x.clone()),
///                                  Expr::Constant(7.0)]);
///
/// assert_eq!(group.eval(), 7.0);
/// ```
#[must_use]
pub fn last_arg() -> Func {
    Func::new(|args: &[Expr], _: &mut FuncEnv| args.iter().fold(0.0, |_, arg| arg.eval()))
}
