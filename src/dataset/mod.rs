//! Synthetic labeled dataset generation.
//!
//! Genuine samples are HTTPS URLs on well-known domains; malicious samples
//! are HTTP brand-impersonation hosts on cheap TLDs. The split is
//! `floor(count * 0.3)` malicious, the remainder genuine, shuffled together.

mod lists;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::MALICIOUS_SHARE_PERCENT;
use crate::models::Sample;

pub use lists::{GENUINE_DOMAINS, GENUINE_PATHS, MALICIOUS_PATTERNS, MALICIOUS_SERVICES, MALICIOUS_TLDS};

/// Upper bound (exclusive) for resource and id suffixes.
const SUFFIX_RANGE: u32 = 1000;

/// Number of malicious samples in a dataset of `count`: `floor(count * 0.3)`.
///
/// Integer arithmetic, so large counts do not pick up float rounding.
pub fn malicious_count(count: usize) -> usize {
    count / 100 * MALICIOUS_SHARE_PERCENT + count % 100 * MALICIOUS_SHARE_PERCENT / 100
}

/// Generates `count` labeled samples using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use url_risk::{generate, SampleOrigin};
///
/// let samples = generate(10);
/// assert_eq!(samples.len(), 10);
/// let malicious = samples
///     .iter()
///     .filter(|s| s.origin == SampleOrigin::Malicious)
///     .count();
/// assert_eq!(malicious, 3);
/// ```
pub fn generate(count: usize) -> Vec<Sample> {
    generate_with_rng(count, &mut rand::rng())
}

/// Generates `count` labeled samples from the given RNG.
pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<Sample> {
    let malicious = malicious_count(count);
    let genuine = count - malicious;
    debug!(
        "Generating {} samples ({} genuine, {} malicious)",
        count, genuine, malicious
    );

    let mut samples = Vec::with_capacity(count);
    for _ in 0..genuine {
        samples.push(genuine_sample(rng));
    }
    for _ in 0..malicious {
        samples.push(malicious_sample(rng));
    }

    // Fisher-Yates; order carries no signal after this point
    samples.shuffle(rng);
    samples
}

/// Generates one genuine sample: `https://www.{domain}{path}{/resourceN}`.
pub fn genuine_sample<R: Rng>(rng: &mut R) -> Sample {
    let domain = pick(rng, &GENUINE_DOMAINS);
    let path = pick(rng, &GENUINE_PATHS);
    let resource = if path.is_empty() {
        String::new()
    } else {
        format!("/resource{}", rng.random_range(0..SUFFIX_RANGE))
    };
    Sample::genuine(format!("https://www.{domain}{path}{resource}"))
}

/// Generates one malicious sample: `http://{service}-{pattern}{id}{tld}`.
pub fn malicious_sample<R: Rng>(rng: &mut R) -> Sample {
    let service = pick(rng, &MALICIOUS_SERVICES);
    let pattern = pick(rng, &MALICIOUS_PATTERNS);
    let tld = pick(rng, &MALICIOUS_TLDS);
    let id = rng.random_range(0..SUFFIX_RANGE);
    Sample::malicious(format!("http://{service}-{pattern}{id}{tld}"))
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
