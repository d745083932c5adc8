/// A decimal number made of one or more consecutive digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    pub value: u128,
    pub digits: u32,
}

impl Number {
    pub fn from_digit(digit: u8) -> Self {
        Self {
            value: u128::from(digit),
            digits: 1,
        }
    }

    /// Append a digit as the new lowest-order decimal digit
    pub fn absorb(self, digit: u8) -> Self {
        Self {
            value: self.value * 10 + u128::from(digit),
            digits: self.digits + 1,
        }
    }
}

/// The five binary operators available to the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// All operators, in the order trees are generated
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

/// Represents an expression tree built over a grouping of digits
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Leaf(Number),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn leaf(value: u128) -> Self {
        let digits = value.checked_ilog10().map_or(1, |log| log + 1);
        Expression::Leaf(Number { value, digits })
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Operator at the root, `None` for a leaf
    pub fn root_operator(&self) -> Option<Operator> {
        match self {
            Expression::Leaf(_) => None,
            Expression::Binary(op, _, _) => Some(*op),
        }
    }

    /// Leaves in left-to-right order
    pub fn leaves(&self) -> Vec<Number> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expression::Leaf(n) => out.push(*n),
                Expression::Binary(_, l, r) => {
                    stack.push(r.as_ref());
                    stack.push(l.as_ref());
                }
            }
        }
        out
    }

    /// Number of binary operators in the tree
    pub fn operator_count(&self) -> u32 {
        match self {
            Expression::Leaf(_) => 0,
            Expression::Binary(_, l, r) => 1 + l.operator_count() + r.operator_count(),
        }
    }
}
