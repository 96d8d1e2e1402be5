use crate::{
    ast::{Expr, Func},
    error::ParseError,
    interpreter::{evaluator::function::last_arg, operator::Operator, parser::core::ParseResult},
};

/// An entry of the operator stack.
#[derive(Debug, Clone)]
pub enum Marker {
    /// An open parenthesis; mirrored by a boundary on the value stack.
    Paren,
    /// A function name waiting for its argument list.
    Call(Func),
    /// An operator waiting for its operands.
    Operator(Operator),
}

/// The two stacks of the shunting-yard parser.
///
/// `values` holds `None` as a group boundary: one is pushed together with
/// every [`Marker::Paren`], so the values of a parenthesised group or argument
/// list are exactly those above the topmost boundary.
#[derive(Debug, Default)]
pub struct Stacks {
    /// Pending parens, calls and operators.
    pub markers: Vec<Marker>,
    /// Operands, with `None` delimiting groups.
    pub values:  Vec<Option<Expr>>,
}

impl Stacks {
    /// Creates empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a group: pushes a paren marker and a value boundary.
    pub fn open_group(&mut self) {
        self.markers.push(Marker::Paren);
        self.values.push(None);
    }

    /// Pushes a finished operand.
    pub fn push_value(&mut self, expr: Expr) {
        self.values.push(Some(expr));
    }

    /// Binds operators until the topmost paren marker, leaving it in place.
    ///
    /// # Errors
    /// - `ParenthesisMismatch` if there is no open paren.
    /// - Any error raised while binding operators.
    pub fn fold_to_paren(&mut self) -> ParseResult<()> {
        loop {
            match self.markers.last() {
                Some(Marker::Paren) => return Ok(()),
                Some(Marker::Operator(op)) => {
                    let op = *op;
                    self.markers.pop();
                    self.bind_operator(op)?;
                },
                Some(Marker::Call(_)) => return Err(ParseError::BadCall),
                None => return Err(ParseError::ParenthesisMismatch),
            }
        }
    }

    /// Closes the innermost group.
    ///
    /// When the group was the argument list of a pending call, the call is
    /// bound to the group's values. Otherwise the group collapses into a single
    /// value: `0` when empty, the value itself when alone, and a last-argument
    /// call (evaluate everything, keep the last) for a comma list.
    ///
    /// # Errors
    /// - `ParenthesisMismatch` if there is no open paren.
    /// - Any error raised while binding operators.
    pub fn close_group(&mut self) -> ParseResult<()> {
        self.fold_to_paren()?;
        self.markers.pop();

        let mut group = self.take_group();
        let expr = if let Some(Marker::Call(func)) = self.markers.last() {
            let expr = func.bind(group);
            self.markers.pop();
            expr
        } else {
            match group.len() {
                0 => Expr::default(),
                1 => group.pop().unwrap_or_default(),
                _ => last_arg().bind(group),
            }
        };
        self.push_value(expr);
        Ok(())
    }

    /// Binds pending operators that must be applied before `incoming`, then
    /// pushes `incoming`.
    ///
    /// # Errors
    /// Any error raised while binding operators.
    pub fn push_operator(&mut self, incoming: Operator) -> ParseResult<()> {
        while let Some(Marker::Operator(top)) = self.markers.last() {
            let top = *top;
            if !top.binds_before(incoming) {
                break;
            }
            self.markers.pop();
            self.bind_operator(top)?;
        }
        self.markers.push(Marker::Operator(incoming));
        Ok(())
    }

    /// Binds every remaining marker at end of input and returns the result.
    ///
    /// # Errors
    /// - `ParenthesisMismatch` for an unclosed paren.
    /// - `BadCall` for a function name without an argument list.
    /// - Any error raised while binding operators.
    pub fn finish(mut self) -> ParseResult<Expr> {
        while let Some(marker) = self.markers.pop() {
            match marker {
                Marker::Operator(op) => self.bind_operator(op)?,
                Marker::Paren => return Err(ParseError::ParenthesisMismatch),
                Marker::Call(_) => return Err(ParseError::BadCall),
            }
        }
        Ok(self.values.pop().flatten().unwrap_or_default())
    }

    /// Pops the operands of `op` and pushes the resulting node.
    ///
    /// # Errors
    /// - `OperandMissing` if an operand would be taken from across a group
    ///   boundary or from an empty stack.
    /// - `BadAssignment` if the left side of `=` is not a variable.
    pub fn bind_operator(&mut self, op: Operator) -> ParseResult<()> {
        let expr = match op {
            Operator::Unary(op) => {
                let operand = self.pop_operand()?;
                Expr::Unary { op,
                              operand: Box::new(operand) }
            },
            Operator::Binary(op) => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                Expr::Binary { op,
                               left: Box::new(left),
                               right: Box::new(right) }
            },
            Operator::Assign => {
                let value = self.pop_operand()?;
                match self.pop_operand()? {
                    Expr::Variable(target) => Expr::Assign { target,
                                                             value: Box::new(value) },
                    _ => return Err(ParseError::BadAssignment),
                }
            },
        };
        self.push_value(expr);
        Ok(())
    }

    /// Pops one operand; boundaries are never operands.
    fn pop_operand(&mut self) -> ParseResult<Expr> {
        match self.values.pop() {
            Some(Some(expr)) => Ok(expr),
            _ => Err(ParseError::OperandMissing),
        }
    }

    /// Removes the values above the topmost boundary, and the boundary itself.
    ///
    /// The values are returned in the order they were pushed.
    fn take_group(&mut self) -> Vec<Expr> {
        let start = self.values
                        .iter()
                        .rposition(Option::is_none)
                        .unwrap_or(0);
        let group = self.values.split_off(start);
        group.into_iter().flatten().collect()
    }
}
