use ndarray::{Array1, Array2};
use pricing::{price, OptionParameters, PricingError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::axis::{ensure_resolution, linspace, MAX_VOLATILITY, MIN_VOLATILITY};
use crate::config::{GridConfig, RangeFactors};

/// Call and put prices over a spot x volatility grid.
///
/// Surfaces are indexed `[[volatility_index, spot_index]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResult {
    pub call_surface: Array2<f64>,
    pub put_surface: Array2<f64>,
    pub spot_axis: Array1<f64>,
    pub volatility_axis: Array1<f64>,
}

fn nearest_index(axis: &Array1<f64>, x: f64) -> usize {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

impl GridResult {
    /// `(volatility points, spot points)`
    pub fn dim(&self) -> (usize, usize) {
        self.call_surface.dim()
    }

    /// The `(volatility_index, spot_index)` of the cell closest to the given point.
    pub fn nearest(&self, spot: f64, volatility: f64) -> (usize, usize) {
        (
            nearest_index(&self.volatility_axis, volatility),
            nearest_index(&self.spot_axis, spot),
        )
    }
}

pub struct GridEvaluator {
    config: GridConfig,
}

impl GridEvaluator {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    fn volatility_bounds(&self, base: &OptionParameters) -> Result<(f64, f64)> {
        let (low, high) = self.config.volatility_range.apply(base.volatility);
        let (low, high) = (low.max(MIN_VOLATILITY), high.min(MAX_VOLATILITY));
        if low >= high {
            return Err(PricingError::invalid(
                "volatility_range",
                base.volatility,
                "range is empty after clamping to [0.01, 1]",
            ));
        }
        Ok((low, high))
    }

    pub fn evaluate(&self, base: &OptionParameters) -> Result<GridResult> {
        let n = self.config.resolution;
        ensure_resolution(n)?;
        base.validate()?;
        self.config.spot_range.validate("spot_range")?;
        self.config.volatility_range.validate("volatility_range")?;

        let (spot_low, spot_high) = self.config.spot_range.apply(base.spot);
        let (vol_low, vol_high) = self.volatility_bounds(base)?;
        let spot_axis = linspace(spot_low, spot_high, n)?;
        let volatility_axis = linspace(vol_low, vol_high, n)?;

        tracing::debug!(
            resolution = n,
            spot_low,
            spot_high,
            vol_low,
            vol_high,
            "price grid started"
        );

        let evaluate_cell = |cell: usize| -> Result<(f64, f64)> {
            let (vi, si) = (cell / n, cell % n);
            let params = base
                .with_spot(spot_axis[si])
                .with_volatility(volatility_axis[vi]);
            let result = price(&params)?;
            Ok((result.call_price, result.put_price))
        };

        #[cfg(feature = "parallel")]
        let cells = (0..n * n)
            .into_par_iter()
            .map(evaluate_cell)
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let cells = (0..n * n)
            .map(evaluate_cell)
            .collect::<Result<Vec<_>>>()?;

        let (calls, puts): (Vec<f64>, Vec<f64>) = cells.into_iter().unzip();
        let call_surface = Array2::from_shape_vec((n, n), calls)
            .map_err(|e| PricingError::domain(e.to_string()))?;
        let put_surface = Array2::from_shape_vec((n, n), puts)
            .map_err(|e| PricingError::domain(e.to_string()))?;

        tracing::debug!(cells = n * n, "price grid complete");

        Ok(GridResult {
            call_surface,
            put_surface,
            spot_axis,
            volatility_axis,
        })
    }
}

/// Prices every `(volatility, spot)` cell of a `resolution x resolution` grid around `base`.
pub fn compute_grid(
    base: &OptionParameters,
    spot_range: RangeFactors,
    volatility_range: RangeFactors,
    resolution: usize,
) -> Result<GridResult> {
    GridEvaluator::new(GridConfig {
        spot_range,
        volatility_range,
        resolution,
    })
    .evaluate(base)
}
