use ndarray::Array1;
use pricing::{PricingError, Result};

/// Bounds of the volatility input; grid volatilities are clamped into them.
pub const MIN_VOLATILITY: f64 = 0.01;
pub const MAX_VOLATILITY: f64 = 1.0;

/// Bounds of the time-to-maturity input, in years.
pub const MIN_MATURITY: f64 = 0.1;
pub const MAX_MATURITY: f64 = 5.0;

pub fn ensure_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(PricingError::invalid(
            "resolution",
            resolution as f64,
            "need at least 2 points per axis",
        ));
    }
    Ok(())
}

/// `resolution` equally spaced points from `low` to `high`, both ends included exactly.
pub fn linspace(low: f64, high: f64, resolution: usize) -> Result<Array1<f64>> {
    ensure_resolution(resolution)?;
    let mut axis = Array1::linspace(low, high, resolution);
    axis[resolution - 1] = high;
    Ok(axis)
}
