//! Shannon entropy over character frequencies.

use std::collections::BTreeMap;

/// Shannon entropy of the character distribution of `text`, in bits.
///
/// `H = -sum(p_c * log2(p_c))` over each distinct character. Empty strings
/// and strings made of a single repeated character have entropy 0.
///
/// Terms are summed in character order, so the result is bit-for-bit
/// stable across calls.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    if counts.len() <= 1 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
