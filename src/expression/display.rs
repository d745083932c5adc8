use std::fmt;

use crate::expression::ast::{Expression, Number, Operator};

/// Whether a child rooted at `child` must be wrapped when placed under `parent`
pub(crate) fn needs_parens(parent: Operator, child: Option<Operator>) -> bool {
    let Some(child) = child else {
        return false;
    };
    if !parent.is_commutative() && parent.precedence() == child.precedence() {
        return true;
    }
    parent.precedence() > child.precedence()
}

/// Render an expression, returning the text and the operator at its root
fn render(expr: &Expression) -> (String, Option<Operator>) {
    match expr {
        Expression::Leaf(n) => (n.to_string(), None),
        Expression::Binary(op, l, r) => {
            let (mut left, left_op) = render(l);
            let (mut right, right_op) = render(r);
            if needs_parens(*op, left_op) {
                left = format!("({})", left);
            }
            if needs_parens(*op, right_op) {
                right = format!("({})", right);
            }
            (format!("{} {} {}", left, op.symbol(), right), Some(*op))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self).0)
    }
}
