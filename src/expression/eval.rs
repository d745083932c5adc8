use std::cmp::Ordering;

use log::trace;

use crate::expression::ast::{Expression, Operator};
use crate::expression::value::Value;

/// Operator count assigned to an evaluation that hit a domain guard
pub const SENTINEL_COST: u32 = 1000;

/// Largest exponent allowed for a base of 2 or more
pub const DEFAULT_MAX_EXPONENT: i128 = 7;

/// Value of an expression together with its operator count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    pub cost: u32,
}

impl Evaluation {
    fn disqualified() -> Self {
        Self {
            value: Value::integer(0),
            cost: SENTINEL_COST,
        }
    }

    /// True when a guard fired somewhere in the tree
    pub fn is_disqualified(&self) -> bool {
        self.cost >= SENTINEL_COST
    }
}

fn pow_is_disqualified(base: Value, exponent: Value, max_exponent: i128) -> bool {
    if base.is_zero() && exponent.is_negative() {
        trace!("Zero raised to negative power {}", exponent);
        return true;
    }
    if base.cmp_integer(2).is_some_and(|o| o != Ordering::Less)
        && exponent.cmp_integer(max_exponent) == Some(Ordering::Greater)
    {
        trace!("Exponent {} too large for base {}", exponent, base);
        return true;
    }
    if base.is_negative() && !exponent.is_integer() {
        trace!("Negative base {} with fractional exponent {}", base, exponent);
        return true;
    }
    false
}

impl Expression {
    /// Evaluate with the default exponent limit.
    ///
    /// Never fails: a division by zero or an out-of-domain power yields value
    /// 0 with [`SENTINEL_COST`], and parents keep adding their own operator.
    pub fn evaluate(&self) -> Evaluation {
        self.evaluate_with_limit(DEFAULT_MAX_EXPONENT)
    }

    pub fn evaluate_with_limit(&self, max_exponent: i128) -> Evaluation {
        match self {
            Expression::Leaf(n) => Evaluation {
                value: Value::from_unsigned(n.value),
                cost: 0,
            },
            Expression::Binary(op, l, r) => {
                let left = l.evaluate_with_limit(max_exponent);
                let right = r.evaluate_with_limit(max_exponent);
                let cost = left.cost.saturating_add(right.cost).saturating_add(1);

                let value = match op {
                    Operator::Add => left.value + right.value,
                    Operator::Sub => left.value - right.value,
                    Operator::Mul => left.value * right.value,
                    Operator::Div => {
                        if right.value.is_zero() {
                            trace!("Division by zero in {}", self);
                            return Evaluation::disqualified();
                        }
                        left.value / right.value
                    }
                    Operator::Pow => {
                        if pow_is_disqualified(left.value, right.value, max_exponent) {
                            return Evaluation::disqualified();
                        }
                        left.value.pow(right.value)
                    }
                };

                Evaluation { value, cost }
            }
        }
    }
}
