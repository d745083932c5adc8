use crate::expression::{Expression, Number, Operator};

/// Every full binary tree over `numbers`, in order, with every operator
/// assignment.
///
/// Split points go left to right; for each, left subtrees vary slowest and
/// operators fastest.
pub fn generate_trees(numbers: &[Number]) -> Vec<Expression> {
    match numbers {
        [] => Vec::new(),
        [single] => vec![Expression::Leaf(*single)],
        _ => {
            let mut trees = Vec::new();
            for split in 1..numbers.len() {
                let (head, tail) = numbers.split_at(split);
                let lefts = generate_trees(head);
                let rights = generate_trees(tail);

                for left in &lefts {
                    for right in &rights {
                        trees.extend(
                            Operator::ALL
                                .iter()
                                .map(|&op| Expression::binary(op, left.clone(), right.clone())),
                        );
                    }
                }
            }
            trees
        }
    }
}

fn catalan(n: usize) -> u128 {
    let mut table: Vec<u128> = vec![1];
    for _ in 0..n {
        let next = table.iter().zip(table.iter().rev()).map(|(a, b)| a * b).sum();
        table.push(next);
    }
    table.last().copied().unwrap_or(1)
}

/// Number of trees [`generate_trees`] yields for `leaves` numbers
pub fn tree_count(leaves: usize) -> u128 {
    match leaves {
        0 => 0,
        n => catalan(n - 1) * 5u128.pow((n - 1) as u32),
    }
}
