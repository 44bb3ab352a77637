//! Standard normal distribution functions.
//!
//! Both are stateless and may be called from any number of threads.
use probability::distribution::{Continuous, Distribution, Gaussian};

fn standard_normal() -> Gaussian {
    Gaussian::new(0.0, 1.0)
}

/// Φ, the cumulative distribution function.
pub fn cdf(d: f64) -> f64 {
    standard_normal().distribution(d)
}

/// φ, the probability density function.
pub fn pdf(d: f64) -> f64 {
    standard_normal().density(d)
}
