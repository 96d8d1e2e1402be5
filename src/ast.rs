use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    fmt,
    rc::Rc,
};

/// Caller-owned table of variable cells, keyed by name.
///
/// The parser reads and writes this map: unknown names get a fresh cell with
/// value `0`. Reusing the same map across several [`parse`](crate::parse) calls
/// makes variables persist between formulas.
pub type Variables = HashMap<String, Var>;

/// Caller-owned table of function implementations, keyed by name.
pub type Functions = HashMap<String, Func>;

/// Private state of one call site, kept across evaluations of the same tree.
pub type FuncEnv = HashMap<String, f64>;

/// A shared, mutable numeric storage cell.
///
/// Cloning a `Var` yields another handle to the same cell, so every tree that
/// references a variable observes assignments made through any other handle.
///
/// ## Example
/// ```
/// use exprcalc::Var;
///
/// let x = Var::new(3.0);
/// let alias = x.clone();
/// alias.set(5.0);
///
/// assert_eq!(x.eval(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Var(Rc<Cell<f64>>);

impl Var {
    /// Creates a new cell holding `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    /// Returns the value currently stored in the cell.
    #[must_use]
    pub fn eval(&self) -> f64 {
        self.0.get()
    }

    /// Overwrites the value stored in the cell.
    pub fn set(&self, value: f64) {
        self.0.set(value);
    }

    /// Returns `true` when both handles point at the same cell.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::Var;
    ///
    /// let x = Var::new(1.0);
    ///
    /// assert!(x.ptr_eq(&x.clone()));
    /// assert!(!x.ptr_eq(&Var::new(1.0)));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The evaluation half of a function implementation.
///
/// An implementation receives its argument nodes unevaluated, together with
/// the private environment of the call site. It decides whether, how often and
/// in which order the arguments are evaluated.
///
/// Every closure of the shape `Fn(&[Expr], &mut FuncEnv) -> f64` implements
/// this trait.
pub trait Function {
    /// Computes the value of one call.
    fn call(&self, args: &[Expr], env: &mut FuncEnv) -> f64;
}

impl<F> Function for F where F: Fn(&[Expr], &mut FuncEnv) -> f64
{
    fn call(&self, args: &[Expr], env: &mut FuncEnv) -> f64 {
        self(args, env)
    }
}

/// A function implementation that can be bound to argument lists.
///
/// ## Example
/// ```
/// use exprcalc::{Expr, Func};
///
/// let accumulate = Func::new(|args, env| {
///     let total = env.entry("total".to_string()).or_insert(0.0);
///     *total += args[0].eval();
///     *total
/// });
///
/// let call = accumulate.bind(vec![Expr::Constant(2.0)]);
/// assert_eq!(call.eval(), 2.0);
/// assert_eq!(call.eval(), 4.0);
///
/// // A second binding starts from an empty environment.
/// let other = accumulate.bind(vec![Expr::Constant(10.0)]);
/// assert_eq!(other.eval(), 10.0);
/// ```
#[derive(Clone)]
pub struct Func(Rc<dyn Function>);

impl Func {
    /// Wraps a closure as a function implementation.
    pub fn new<F>(eval: F) -> Self
        where F: Fn(&[Expr], &mut FuncEnv) -> f64 + 'static
    {
        Self(Rc::new(eval))
    }

    /// Wraps any [`Function`] implementation.
    pub fn from_function(function: impl Function + 'static) -> Self {
        Self(Rc::new(function))
    }

    /// Creates a call node over `args` with a fresh, empty environment.
    #[must_use]
    pub fn bind(&self, args: Vec<Expr>) -> Expr {
        Expr::Call(Call { func: self.clone(),
                          args,
                          env: RefCell::new(FuncEnv::new()) })
    }

    pub(crate) fn call(&self, args: &[Expr], env: &mut FuncEnv) -> f64 {
        self.0.call(args, env)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func(..)")
    }
}

/// A function bound to one call site.
///
/// Owns its argument nodes and an environment that lives as long as the node
/// itself; the environment is never shared with other call sites, even when
/// they use the same [`Func`].
pub struct Call {
    /// The implementation being called.
    pub func: Func,
    /// Argument nodes, in source order.
    pub args: Vec<Expr>,
    /// State private to this call site.
    pub env:  RefCell<FuncEnv>,
}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
         .field("func", &self.func)
         .field("args", &self.args)
         .field("env", &self.env.borrow())
         .finish()
    }
}

/// A node of a parsed expression tree.
///
/// Trees are produced by [`parse`](crate::parse) and evaluated with
/// [`Expr::eval`]. Their shape never changes after parsing; only variable
/// cells and call environments do.
#[derive(Debug)]
pub enum Expr {
    /// A numeric literal.
    Constant(f64),
    /// A reference to a caller-owned variable cell.
    Variable(Var),
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operation other than assignment.
    Binary {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment of a value to a variable (`x = ...`).
    Assign {
        /// The cell written on evaluation.
        target: Var,
        /// The assigned expression.
        value:  Box<Self>,
    },
    /// A function bound to its arguments.
    Call(Call),
}

impl Default for Expr {
    fn default() -> Self {
        Self::Constant(0.0)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
    /// Bitwise complement of the integer part (`~x`).
    BitNot,
    /// Square root (`√x`).
    Sqrt,
}

/// Represents a binary operator.
///
/// Assignment is not a binary operator at the tree level: it has its own
/// [`Expr::Assign`] node whose target is always a variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// IEEE remainder (`%`)
    Rem,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Shift left (`<<`)
    Shl,
    /// Shift right (`>>`)
    Shr,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Sqrt => "√",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mul, NotEqual, Or, Rem, Shl, Shr, Sub,
        };
        let operator = match self {
            Mul => "*",
            Div => "/",
            Rem => "%",
            Add => "+",
            Sub => "-",
            Shl => "<<",
            Shr => ">>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            BitAnd => "&",
            BitXor => "^",
            BitOr => "|",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree fully parenthesised.
///
/// Variables show their current value in braces, calls show as `fn(...)`.
///
/// ## Example
/// ```
/// use exprcalc::{Functions, Variables, parse};
///
/// let mut vars = Variables::new();
/// let expr = parse("-2 + x * 3", &mut vars, &Functions::new()).unwrap();
///
/// assert_eq!(expr.to_string(), "((-2) + ({0} * 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(var) => write!(f, "{{{}}}", var.eval()),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assign { target, value } => write!(f, "({{{}}} = {value})", target.eval()),
            Self::Call(call) => {
                write!(f, "fn(")?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}
