use std::collections::HashSet;

use log::debug;

/// Every distinct ordering of `digits`.
///
/// Orderings come out in Heap's algorithm order, keeping the first
/// occurrence of each, so the input ordering is always first. Solutions tie
/// on this order, so it must stay stable.
pub fn unique_permutations(digits: &[u8]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    if digits.is_empty() {
        return out;
    }

    let mut work = digits.to_vec();
    let mut seen = HashSet::new();
    heap_permute(work.len(), &mut work, &mut seen, &mut out);

    debug!("Generated {} distinct orderings of {:?}", out.len(), digits);
    out
}

fn heap_permute(
    n: usize,
    work: &mut [u8],
    seen: &mut HashSet<Vec<u8>>,
    out: &mut Vec<Vec<u8>>,
) {
    if n == 1 {
        if !seen.contains(work) {
            seen.insert(work.to_vec());
            out.push(work.to_vec());
        }
        return;
    }

    for i in 0..n - 1 {
        heap_permute(n - 1, work, seen, out);
        if n % 2 == 0 {
            work.swap(i, n - 1);
        } else {
            work.swap(0, n - 1);
        }
    }
    heap_permute(n - 1, work, seen, out);
}
