use crate::expression::ast::{Expression, Operator};
use crate::expression::display::needs_parens;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, whose operands never need parentheses
    /// - Puts exponents in braces; a compound base is parenthesized
    pub fn to_latex(&self) -> String {
        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Leaf(n) => n.to_string(),
                Expression::Binary(Operator::Div, l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r))
                }
                Expression::Binary(Operator::Pow, l, r) => {
                    let mut base = fmt(l);
                    if l.root_operator().is_some() {
                        base = wrap_parens(base);
                    }
                    format!("{}^{{{}}}", base, fmt(r))
                }
                Expression::Binary(op, l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if needs_parens(*op, l.root_operator()) {
                        ls = wrap_parens(ls);
                    }
                    if needs_parens(*op, r.root_operator()) {
                        rs = wrap_parens(rs);
                    }
                    let symbol = match op {
                        Operator::Mul => "\\cdot",
                        other => other.symbol(),
                    };
                    format!("{} {} {}", ls, symbol, rs)
                }
            }
        }

        fmt(self)
    }
}
