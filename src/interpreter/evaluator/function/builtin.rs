use crate::ast::{Expr, Func, FuncEnv, Functions};

/// Type alias for builtin function handlers.
///
/// A builtin receives its unevaluated argument nodes and the environment of
/// its call site.
type BuiltinFn = fn(&[Expr], &mut FuncEnv) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"   => abs,
    "ceil"  => ceil,
    "floor" => floor,
    "round" => round,
    "trunc" => trunc,
    "sign"  => sign,
    "min"   => |args, _| extremum(args, f64::min),
    "max"   => |args, _| extremum(args, f64::max),
    "pow"   => |args, _| arg(args, 0).powf(arg(args, 1)),
    "if"    => if_else,
    "accum" => accum,
}

/// Returns a function table holding every builtin.
///
/// Each call returns fresh handles; the table can be extended with caller
/// functions before it is handed to the parser.
///
/// # Example
/// ```
/// use exprcalc::{Variables, interpreter::evaluator::function::builtin::functions, parse};
///
/// let expr = parse("max(2, abs(-7), 3)", &mut Variables::new(), &functions()).unwrap();
///
/// assert_eq!(expr.eval(), 7.0);
/// ```
#[must_use]
pub fn functions() -> Functions {
    BUILTIN_TABLE.iter()
                 .map(|def| (def.name.to_string(), Func::new(def.func)))
                 .collect()
}

/// Evaluates argument `index`, or yields `0` when it is missing.
fn arg(args: &[Expr], index: usize) -> f64 {
    args.get(index).map_or(0.0, Expr::eval)
}

/// Generates a builtin that applies an `f64` method to its first argument.
macro_rules! unary_builtin {
    ($fname:ident) => {
        #[doc = concat!("Applies `f64::", stringify!($fname), "` to the first argument.")]
        pub fn $fname(args: &[Expr], _env: &mut FuncEnv) -> f64 {
            arg(args, 0).$fname()
        }
    };
}

unary_builtin!(abs);
unary_builtin!(ceil);
unary_builtin!(floor);
unary_builtin!(round);
unary_builtin!(trunc);

/// Returns `-1`, `0` or `1` following the sign of the first argument.
///
/// Unlike `f64::signum`, zero maps to `0`.
pub fn sign(args: &[Expr], _env: &mut FuncEnv) -> f64 {
    let value = arg(args, 0);
    if value == 0.0 { 0.0 } else { value.signum() }
}

/// Folds every argument, evaluated left to right, with `pick`.
///
/// Yields `0` without arguments.
fn extremum(args: &[Expr], pick: fn(f64, f64) -> f64) -> f64 {
    args.iter()
        .map(Expr::eval)
        .reduce(pick)
        .unwrap_or(0.0)
}

/// `if(cond, then, else)`.
///
/// Evaluates the condition, then only the selected branch.
///
/// # Example
/// ```
/// use exprcalc::{Variables, interpreter::evaluator::function::builtin::functions, parse};
///
/// let mut vars = Variables::new();
/// let expr = parse("if(1, x = 5, y = 6)", &mut vars, &functions()).unwrap();
///
/// assert_eq!(expr.eval(), 5.0);
/// assert_eq!(vars["x"].eval(), 5.0);
/// assert_eq!(vars["y"].eval(), 0.0);
/// ```
pub fn if_else(args: &[Expr], _env: &mut FuncEnv) -> f64 {
    if arg(args, 0) == 0.0 {
        arg(args, 2)
    } else {
        arg(args, 1)
    }
}

/// Adds the first argument to a running total kept by the call site, and
/// returns the total.
///
/// # Example
/// ```
/// use exprcalc::{Variables, interpreter::evaluator::function::builtin::functions, parse};
///
/// let expr = parse("accum(2) + accum(10)", &mut Variables::new(), &functions()).unwrap();
///
/// assert_eq!(expr.eval(), 12.0);
/// assert_eq!(expr.eval(), 24.0);
/// ```
pub fn accum(args: &[Expr], env: &mut FuncEnv) -> f64 {
    let value = arg(args, 0);
    let total = env.entry("total".to_string()).or_insert(0.0);
    *total += value;
    *total
}
