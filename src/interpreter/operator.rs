use std::fmt;

use crate::ast::{BinaryOperator, UnaryOperator};

/// How operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a = b = c` groups as `a = (b = c)`.
    Right,
}

/// Every operator the grammar knows about.
///
/// Assignment is kept apart from [`BinaryOperator`] because it binds to a
/// variable rather than to an arbitrary left operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// A prefix operator.
    Unary(UnaryOperator),
    /// An infix operator.
    Binary(BinaryOperator),
    /// `=`
    Assign,
}

/// One row of the operator table.
#[derive(Debug)]
pub struct OperatorDef {
    /// The lexeme as produced by the tokenizer.
    pub lexeme:        &'static str,
    /// The operator it denotes.
    pub operator:      Operator,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

/// Defines the operator table.
///
/// Each row maps a lexeme to its operator, precedence and associativity. The
/// macro produces `OPERATORS` (the static table) and `LEXEMES` (every lexeme,
/// in table order).
macro_rules! operator_table {
    (
        $(
            $lexeme:literal => $operator:expr, $precedence:literal, $assoc:ident
        );* $(;)?
    ) => {
        /// The static operator table, tightest-binding operators first.
        pub static OPERATORS: &[OperatorDef] = &[
            $(
                OperatorDef { lexeme:        $lexeme,
                              operator:      $operator,
                              precedence:    $precedence,
                              associativity: Associativity::$assoc },
            )*
        ];
        /// All known lexemes.
        pub const LEXEMES: &[&str] = &[
            $($lexeme,)*
        ];
    };
}

use BinaryOperator as B;
use UnaryOperator as U;

// `-u` is the synthesized prefix-minus lexeme: the tokenizer rewrites `-` to it
// whenever a value is expected. Every other lexeme also needs a `#[token]` on
// `Lexeme::Symbol` in `lexer.rs`.
operator_table! {
    "-u" => Operator::Unary(U::Negate),        12, Right;
    "!"  => Operator::Unary(U::Not),           12, Right;
    "~"  => Operator::Unary(U::BitNot),        12, Right;
    "√"  => Operator::Unary(U::Sqrt),          12, Right;
    "*"  => Operator::Binary(B::Mul),          11, Left;
    "/"  => Operator::Binary(B::Div),          11, Left;
    "%"  => Operator::Binary(B::Rem),          11, Left;
    "+"  => Operator::Binary(B::Add),          10, Left;
    "-"  => Operator::Binary(B::Sub),          10, Left;
    "<<" => Operator::Binary(B::Shl),           9, Left;
    ">>" => Operator::Binary(B::Shr),           9, Left;
    "<"  => Operator::Binary(B::Less),          8, Left;
    "<=" => Operator::Binary(B::LessEqual),     8, Left;
    ">"  => Operator::Binary(B::Greater),       8, Left;
    ">=" => Operator::Binary(B::GreaterEqual),  8, Left;
    "==" => Operator::Binary(B::Equal),         7, Left;
    "!=" => Operator::Binary(B::NotEqual),      7, Left;
    "&"  => Operator::Binary(B::BitAnd),        6, Left;
    "^"  => Operator::Binary(B::BitXor),        5, Left;
    "|"  => Operator::Binary(B::BitOr),         4, Left;
    "&&" => Operator::Binary(B::And),           3, Left;
    "||" => Operator::Binary(B::Or),            2, Left;
    "="  => Operator::Assign,                   1, Right;
}

/// Looks up the operator denoted by `lexeme`.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::BinaryOperator,
///     interpreter::operator::{Operator, lookup},
/// };
///
/// assert_eq!(lookup(">>"), Some(Operator::Binary(BinaryOperator::Shr)));
/// assert_eq!(lookup("@"), None);
/// ```
#[must_use]
pub fn lookup(lexeme: &str) -> Option<Operator> {
    OPERATORS.iter()
             .find(|def| def.lexeme == lexeme)
             .map(|def| def.operator)
}

impl Operator {
    /// Returns the table row describing `self`.
    #[must_use]
    pub fn def(self) -> &'static OperatorDef {
        // Every variant has a row; the fallback is the loosest operator.
        OPERATORS.iter()
                 .find(|def| def.operator == self)
                 .unwrap_or(&OPERATORS[OPERATORS.len() - 1])
    }

    /// The lexeme of this operator.
    #[must_use]
    pub fn lexeme(self) -> &'static str {
        self.def().lexeme
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        self.def().precedence
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) | Self::Assign => 2,
        }
    }

    /// Returns `true` for operators that group left to right.
    #[must_use]
    pub fn is_left_assoc(self) -> bool {
        self.def().associativity == Associativity::Left
    }

    /// Returns `true` for prefix operators.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Unary(_))
    }

    /// Decides whether `self`, already waiting on the operator stack, has to be
    /// bound before `incoming` is pushed on top of it.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::operator::lookup;
    ///
    /// let mul = lookup("*").unwrap();
    /// let add = lookup("+").unwrap();
    /// let assign = lookup("=").unwrap();
    ///
    /// assert!(mul.binds_before(add));
    /// assert!(add.binds_before(add));
    /// assert!(!add.binds_before(mul));
    /// assert!(!assign.binds_before(assign));
    /// ```
    #[must_use]
    pub fn binds_before(self, incoming: Self) -> bool {
        if incoming.is_left_assoc() {
            self.precedence() >= incoming.precedence()
        } else {
            self.precedence() > incoming.precedence()
        }
    }
}

/// ## Example
/// ```
/// use exprcalc::{ast::UnaryOperator, interpreter::operator::{Operator, lookup}};
///
/// assert_eq!(Some(Operator::from(UnaryOperator::Sqrt)), lookup("√"));
/// ```
impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

/// ## Example
/// ```
/// use exprcalc::{ast::BinaryOperator, interpreter::operator::{Operator, lookup}};
///
/// let shl: Operator = BinaryOperator::Shl.into();
/// assert_eq!(shl.lexeme(), "<<");
/// assert_eq!(Some(shl), lookup("<<"));
/// ```
impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
