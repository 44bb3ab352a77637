use ndarray::Array1;
use pricing::{price, OptionParameters, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::axis::{linspace, MAX_MATURITY, MAX_VOLATILITY, MIN_MATURITY, MIN_VOLATILITY};

/// The parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepAxis {
    Spot,
    Volatility,
    Maturity,
}

impl SweepAxis {
    /// Fixed sweep bounds; only the spot domain depends on `base`.
    pub fn domain(&self, base: &OptionParameters) -> (f64, f64) {
        match self {
            SweepAxis::Spot => (base.spot * 0.5, base.spot * 1.5),
            SweepAxis::Volatility => (MIN_VOLATILITY, MAX_VOLATILITY),
            SweepAxis::Maturity => (MIN_MATURITY, MAX_MATURITY),
        }
    }

    fn substitute(&self, base: &OptionParameters, x: f64) -> OptionParameters {
        match self {
            SweepAxis::Spot => base.with_spot(x),
            SweepAxis::Volatility => base.with_volatility(x),
            SweepAxis::Maturity => base.with_maturity(x),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub axis: SweepAxis,
    pub x_values: Array1<f64>,
    pub call_values: Array1<f64>,
    pub put_values: Array1<f64>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

/// Call and put prices along one axis, every other field held at `base`.
pub fn compute_sweep(
    base: &OptionParameters,
    axis: SweepAxis,
    resolution: usize,
) -> Result<SweepResult> {
    base.validate()?;
    let (low, high) = axis.domain(base);
    let x_values = linspace(low, high, resolution)?;

    tracing::debug!(?axis, resolution, low, high, "sensitivity sweep started");

    let evaluate = |x: &f64| -> Result<(f64, f64)> {
        let result = price(&axis.substitute(base, *x))?;
        Ok((result.call_price, result.put_price))
    };

    #[cfg(feature = "parallel")]
    let samples = x_values
        .to_vec()
        .par_iter()
        .map(evaluate)
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let samples = x_values.iter().map(evaluate).collect::<Result<Vec<_>>>()?;

    let (calls, puts): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();

    tracing::debug!(?axis, samples = calls.len(), "sensitivity sweep complete");

    Ok(SweepResult {
        axis,
        x_values,
        call_values: Array1::from(calls),
        put_values: Array1::from(puts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn reference() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn maturity_sweep_shape() {
        let sweep = compute_sweep(&reference(), SweepAxis::Maturity, 100).unwrap();
        assert_eq!(sweep.len(), 100);
        assert_eq!(sweep.call_values.len(), 100);
        assert_eq!(sweep.put_values.len(), 100);
        assert_eq!(sweep.x_values[0], 0.1);
        assert_eq!(sweep.x_values[99], 5.0);
        assert!(sweep.x_values.to_vec().windows(2).all(|w| w[1] > w[0]));
        assert!(sweep
            .call_values
            .iter()
            .chain(sweep.put_values.iter())
            .all(|v| v.is_finite()));
    }

    #[test]
    fn samples_match_independent_evaluations() {
        let base = reference();
        for axis in [SweepAxis::Spot, SweepAxis::Volatility, SweepAxis::Maturity] {
            let sweep = compute_sweep(&base, axis, 25).unwrap();
            for i in [0, 12, 24] {
                let expected = price(&axis.substitute(&base, sweep.x_values[i])).unwrap();
                assert_eq!(sweep.call_values[i], expected.call_price);
                assert_eq!(sweep.put_values[i], expected.put_price);
            }
        }
    }

    #[test]
    fn spot_domain_follows_base() {
        let base = reference().with_spot(80.0);
        assert_eq!(SweepAxis::Spot.domain(&base), (40.0, 120.0));
        assert_eq!(SweepAxis::Volatility.domain(&base), (0.01, 1.0));
        assert_eq!(SweepAxis::Maturity.domain(&base), (0.1, 5.0));

        let sweep = compute_sweep(&base, SweepAxis::Spot, 11).unwrap();
        assert_approx_eq!(sweep.x_values[5], 80.0, 1e-12);
    }

    #[test]
    fn volatility_sweep_is_increasing_for_both_legs() {
        let sweep = compute_sweep(&reference(), SweepAxis::Volatility, 50).unwrap();
        for i in 1..50 {
            assert!(sweep.call_values[i] > sweep.call_values[i - 1]);
            assert!(sweep.put_values[i] > sweep.put_values[i - 1]);
        }
    }

    #[test]
    fn rejects_invalid_input() {
        let err = compute_sweep(&reference(), SweepAxis::Spot, 1).unwrap_err();
        assert_eq!(err.field(), Some("resolution"));

        let err = compute_sweep(&reference().with_volatility(-0.2), SweepAxis::Maturity, 10)
            .unwrap_err();
        assert_eq!(err.field(), Some("volatility"));
    }
}
