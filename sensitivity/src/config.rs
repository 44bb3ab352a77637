use pricing::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Multiplicative bounds applied to a base value, e.g. `0.5..1.5` times spot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFactors {
    pub low: f64,
    pub high: f64,
}

impl RangeFactors {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn validate(&self, field: &'static str) -> Result<()> {
        if !self.low.is_finite() || self.low <= 0.0 {
            return Err(PricingError::invalid(
                field,
                self.low,
                "lower factor must be finite and positive",
            ));
        }
        if !self.high.is_finite() || self.high <= self.low {
            return Err(PricingError::invalid(
                field,
                self.high,
                "upper factor must be finite and above the lower factor",
            ));
        }
        Ok(())
    }

    /// `(base * low, base * high)`
    pub fn apply(&self, base: f64) -> (f64, f64) {
        (base * self.low, base * self.high)
    }
}

impl Default for RangeFactors {
    fn default() -> Self {
        Self::new(0.5, 1.5)
    }
}

impl From<(f64, f64)> for RangeFactors {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub spot_range: RangeFactors,
    pub volatility_range: RangeFactors,
    /// points per axis
    pub resolution: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spot_range: RangeFactors::default(),
            volatility_range: RangeFactors::default(),
            resolution: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub resolution: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { resolution: 100 }
    }
}
