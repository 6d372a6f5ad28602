//! Counting distributions: Poisson, binomial, geometric, negative binomial
//!
//! Each routine returns its count as `f64` so it can feed the affine mapper
//! directly; a geometric draw with a tiny `p` can exceed any byte or `u32`.

use crate::rng::DeterministicRng;

/// Lambda at which Poisson switches from Knuth's method to a normal approximation
pub const POISSON_NORMAL_THRESHOLD: f64 = 30.0;

/// Geometric result when `p <= 0` (success never happens)
pub const GEOMETRIC_SATURATION: f64 = 255.0;

/// Poisson(lambda) count
///
/// - `lambda <= 0`: returns 0 without drawing
/// - `lambda < 30`: Knuth's multiplicative method (multiply uniforms until
///   the product drops to `e^-lambda`, count the factors, subtract one)
/// - otherwise: `round(N(lambda, sqrt(lambda)))`, clamped at 0
pub fn poisson_sample(rng: &mut DeterministicRng, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 0.0;
    }

    if lambda < POISSON_NORMAL_THRESHOLD {
        let limit = (-lambda).exp();
        let mut k: u64 = 0;
        let mut prod = 1.0;
        while prod > limit {
            k += 1;
            prod *= rng.uniform();
        }
        return (k - 1) as f64;
    }

    let approx = rng.gaussian(lambda, lambda.sqrt()).round_ties_even();
    approx.max(0.0)
}

/// Binomial(n, p): number of successes in `n` Bernoulli trials
///
/// Always performs exactly `n` draws.
pub fn binomial_sample(rng: &mut DeterministicRng, n: u32, p: f64) -> f64 {
    let mut successes: u32 = 0;
    for _ in 0..n {
        if rng.uniform() < p {
            successes += 1;
        }
    }
    successes as f64
}

/// Geometric(p): failures before the first success
///
/// `p >= 1` returns 0 and `p <= 0` returns 255, neither drawing. A `p` so
/// small that `ln(1 - p)` underflows to zero saturates the same way. Otherwise
/// one draw `u`, with `u <= 0` replaced by `1e-15`, gives
/// `floor(ln(1 - u) / ln(1 - p))`.
pub fn geometric_failures(rng: &mut DeterministicRng, p: f64) -> f64 {
    if p >= 1.0 {
        return 0.0;
    }
    if p <= 0.0 {
        return GEOMETRIC_SATURATION;
    }

    let denom = (-p).ln_1p();
    if denom == 0.0 {
        return GEOMETRIC_SATURATION;
    }

    let mut u = rng.uniform();
    if u <= 0.0 {
        u = 1e-15;
    }
    let failures = ((1.0 - u).ln() / denom).floor();
    if failures.is_finite() {
        failures
    } else {
        GEOMETRIC_SATURATION
    }
}

/// Negative binomial(r, p): failures before the `r`-th success
pub fn negative_binomial_failures(rng: &mut DeterministicRng, r: u32, p: f64) -> f64 {
    (0..r).map(|_| geometric_failures(rng, p)).sum()
}
