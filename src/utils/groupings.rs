use crate::expression::Number;

/// Every way to merge adjacent digits into numbers, keeping their order.
///
/// The groupings of `d1..dn` are built from those of `d1..d(n-1)`: each one
/// is extended by `dn` as a new number and, unless its last number is a bare
/// 0, also by appending `dn` to that last number. No multi-digit number
/// therefore starts with 0.
pub fn generate_groupings(digits: &[u8]) -> Vec<Vec<Number>> {
    let Some((&last, rest)) = digits.split_last() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![vec![Number::from_digit(last)]];
    }

    let mut result = Vec::new();
    for grouping in generate_groupings(rest) {
        let mut appended = grouping.clone();
        appended.push(Number::from_digit(last));
        result.push(appended);

        if let Some((&previous, head)) = grouping.split_last()
            && previous.value != 0
        {
            let mut merged = head.to_vec();
            merged.push(previous.absorb(last));
            result.push(merged);
        }
    }
    result
}
