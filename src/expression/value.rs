use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};

pub type Rational = Ratio<i128>;

/// Numeric value of an expression.
///
/// Arithmetic stays exact while every intermediate fits in an `i128`
/// rational. Overflow and fractional exponents fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Exact(Rational),
    Approx(f64),
}

impl Value {
    pub fn integer(n: i128) -> Self {
        Value::Exact(Rational::from_integer(n))
    }

    pub fn from_unsigned(n: u128) -> Self {
        match i128::try_from(n) {
            Ok(i) => Value::integer(i),
            Err(_) => Value::Approx(n as f64),
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Value::Exact(r) => *r.numer() as f64 / *r.denom() as f64,
            Value::Approx(v) => v,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Value::Exact(_))
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Exact(r) => r.is_zero(),
            Value::Approx(v) => v == 0.0,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Value::Exact(r) => r.is_negative(),
            Value::Approx(v) => v < 0.0,
        }
    }

    /// Strict integrality, no tolerance
    pub fn is_integer(self) -> bool {
        match self {
            Value::Exact(r) => r.is_integer(),
            Value::Approx(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    /// The integer this value stands for, within `epsilon` for approximations
    pub fn as_integer(self, epsilon: f64) -> Option<i128> {
        match self {
            Value::Exact(r) => r.is_integer().then(|| r.to_integer()),
            Value::Approx(v) => {
                let rounded = v.round();
                // beyond 2^100 the cast would saturate
                if !v.is_finite() || rounded.abs() > 2_f64.powi(100) {
                    return None;
                }
                ((v - rounded).abs() < epsilon).then_some(rounded as i128)
            }
        }
    }

    /// Compare against an integer; `None` for NaN
    pub fn cmp_integer(self, n: i128) -> Option<Ordering> {
        match self {
            Value::Exact(r) => Some(r.cmp(&Rational::from_integer(n))),
            Value::Approx(v) => v.partial_cmp(&(n as f64)),
        }
    }

    pub fn pow(self, exponent: Value) -> Value {
        if let (Value::Exact(base), Value::Exact(exp)) = (self, exponent)
            && exp.is_integer()
            && let Some(r) = checked_pow(base, exp.to_integer())
        {
            return Value::Exact(r);
        }
        Value::Approx(self.to_f64().powf(exponent.to_f64()))
    }

    fn combine(
        self,
        rhs: Value,
        exact: impl FnOnce(&Rational, &Rational) -> Option<Rational>,
        approx: impl FnOnce(f64, f64) -> f64,
    ) -> Value {
        if let (Value::Exact(a), Value::Exact(b)) = (self, rhs)
            && let Some(r) = exact(&a, &b)
        {
            return Value::Exact(r);
        }
        Value::Approx(approx(self.to_f64(), rhs.to_f64()))
    }
}

fn checked_pow(base: Rational, exp: i128) -> Option<Rational> {
    if base.is_zero() {
        return match exp.cmp(&0) {
            Ordering::Less => None,
            Ordering::Equal => Some(Rational::one()),
            Ordering::Greater => Some(Rational::zero()),
        };
    }
    if base.is_one() {
        return Some(base);
    }
    if base == -Rational::one() {
        return Some(if exp % 2 == 0 { Rational::one() } else { base });
    }

    let factor = if exp < 0 { base.recip() } else { base };
    let mut result = Rational::one();
    // |factor| != 1 here, so the product overflows within 127 steps
    for _ in 0..exp.unsigned_abs() {
        result = result.checked_mul(&factor)?;
    }
    Some(result)
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self.combine(rhs, |a, b| a.checked_add(b), |a, b| a + b)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self.combine(rhs, |a, b| a.checked_sub(b), |a, b| a - b)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self.combine(rhs, |a, b| a.checked_mul(b), |a, b| a * b)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self.combine(rhs, |a, b| a.checked_div(b), |a, b| a / b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Exact(r) if r.is_integer() => write!(f, "{}", r.numer()),
            Value::Exact(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::Approx(v) => write!(f, "{}", v),
        }
    }
}
