use std::collections::HashSet;

use crate::expression::Number;
use crate::utils::{
    UtilsError, generate_groupings, parse_year, unique_permutations, validate_digits,
    validate_year_string, year_to_digits,
};

fn values(grouping: &[Number]) -> Vec<u128> {
    grouping.iter().map(|n| n.value).collect()
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

fn multinomial(digits: &[u8]) -> usize {
    let mut counts = [0usize; 10];
    for &d in digits {
        if let Some(c) = counts.get_mut(usize::from(d)) {
            *c += 1;
        }
    }
    counts
        .iter()
        .fold(factorial(digits.len()), |acc, &c| acc / factorial(c))
}

#[test]
fn test_year_to_digits() {
    assert_eq!(year_to_digits(2020), Ok(vec![2, 0, 2, 0]));
    assert_eq!(year_to_digits(1), Ok(vec![1]));
    assert_eq!(year_to_digits(1000), Ok(vec![1, 0, 0, 0]));
    assert_eq!(year_to_digits(0), Err(UtilsError::ZeroYear));
}

#[test]
fn test_parse_year() {
    assert_eq!(parse_year("1987"), Ok(vec![1, 9, 8, 7]));
    assert_eq!(parse_year("0042"), Ok(vec![4, 2]));
    assert_eq!(parse_year("000"), Err(UtilsError::ZeroYear));
    assert_eq!(parse_year(""), Err(UtilsError::EmptyDigitString));
    assert!(matches!(
        parse_year("19a7"),
        Err(UtilsError::InvalidDigitString(_))
    ));
}

#[test]
fn test_validate_year_string_valid() {
    assert!(validate_year_string("2024").is_ok());
    assert!(validate_year_string("1").is_ok());
    assert!(validate_year_string("0100").is_ok());
}

#[test]
fn test_validate_year_string_invalid() {
    assert!(validate_year_string("").is_err());
    assert!(validate_year_string("0").is_err());
    assert!(validate_year_string("-2024").is_err());
    assert!(validate_year_string("20.24").is_err());
    assert!(validate_year_string(" 2024").is_err());
}

#[test]
fn test_validate_digits() {
    assert!(validate_digits(&[2, 0, 2, 4]).is_ok());
    assert!(validate_digits(&[0]).is_ok());
    assert_eq!(validate_digits(&[]), Err(UtilsError::EmptyDigitString));
    assert_eq!(validate_digits(&[1, 10]), Err(UtilsError::InvalidDigit(10)));
}

#[test]
fn test_permutations_identity_first() {
    let perms = unique_permutations(&[3, 1, 2]);
    assert_eq!(perms.first(), Some(&vec![3, 1, 2]));
}

#[test]
fn test_permutations_distinct_digits() {
    let perms = unique_permutations(&[1, 2, 3, 4]);
    assert_eq!(perms.len(), 24);
    let unique: HashSet<_> = perms.iter().collect();
    assert_eq!(unique.len(), 24);
}

#[test]
fn test_permutations_repeated_digits_collapse() {
    let perms = unique_permutations(&[2, 0, 2, 0]);
    assert_eq!(perms.len(), 6);

    let perms = unique_permutations(&[7, 7, 7]);
    assert_eq!(perms, vec![vec![7, 7, 7]]);
}

#[test]
fn test_permutations_multinomial_count() {
    let cases: [&[u8]; 6] = [
        &[1],
        &[1, 1],
        &[1, 2, 1],
        &[1, 1, 2, 2, 3],
        &[9, 0, 9, 0, 9],
        &[1, 2, 3, 4, 5, 6],
    ];
    for digits in cases {
        let perms = unique_permutations(digits);
        let unique: HashSet<_> = perms.iter().collect();
        assert_eq!(unique.len(), perms.len(), "duplicates for {:?}", digits);
        assert_eq!(perms.len(), multinomial(digits), "count for {:?}", digits);
        for perm in &perms {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            let mut expected = digits.to_vec();
            expected.sort_unstable();
            assert_eq!(sorted, expected);
        }
    }
}

#[test]
fn test_permutations_empty() {
    assert!(unique_permutations(&[]).is_empty());
}

#[test]
fn test_groupings_single_digit() {
    let groupings = generate_groupings(&[7]);
    assert_eq!(groupings, vec![vec![Number::from_digit(7)]]);
}

#[test]
fn test_groupings_three_digits() {
    let groupings: Vec<Vec<u128>> = generate_groupings(&[1, 2, 3])
        .iter()
        .map(|g| values(g))
        .collect();
    assert_eq!(
        groupings,
        vec![vec![1, 2, 3], vec![1, 23], vec![12, 3], vec![123]]
    );
}

#[test]
fn test_groupings_skip_leading_zero() {
    let groupings: Vec<Vec<u128>> = generate_groupings(&[1, 0, 5])
        .iter()
        .map(|g| values(g))
        .collect();
    assert_eq!(groupings, vec![vec![1, 0, 5], vec![10, 5], vec![105]]);

    let groupings: Vec<Vec<u128>> = generate_groupings(&[0, 1])
        .iter()
        .map(|g| values(g))
        .collect();
    assert_eq!(groupings, vec![vec![0, 1]]);
}

#[test]
fn test_groupings_count_without_zeros() {
    for n in 1..=8 {
        let digits: Vec<u8> = (1..=n).collect();
        assert_eq!(generate_groupings(&digits).len(), 1 << (n - 1));
    }
}

#[test]
fn test_groupings_reconstruct_input() {
    let cases: [&[u8]; 4] = [&[2, 0, 2, 0], &[1, 0, 0, 9], &[0, 0, 7], &[3, 1, 4, 1, 5]];
    for digits in cases {
        let expected: String = digits.iter().map(|d| d.to_string()).collect();
        let groupings = generate_groupings(digits);
        assert!(groupings.len() <= 1 << (digits.len() - 1));
        for grouping in &groupings {
            let rendered: String = grouping.iter().map(|n| n.value.to_string()).collect();
            assert_eq!(rendered, expected);
            for number in grouping {
                assert_eq!(number.value.to_string().len() as u32, number.digits);
            }
        }
    }
}

#[test]
fn test_groupings_empty() {
    assert!(generate_groupings(&[]).is_empty());
}
