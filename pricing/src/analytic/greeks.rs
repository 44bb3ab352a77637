//! Spot sensitivities of the Black-Scholes prices.
use serde::{Deserialize, Serialize};

use crate::analytic::black_scholes::{BlackScholesMerton, D1D2};
use crate::analytic::normal::{cdf, pdf};
use crate::common::models::OptionParameters;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// dC/dS
    pub call_delta: f64,
    /// dP/dS, always `call_delta - 1`
    pub put_delta: f64,
    /// d²V/dS², identical for call and put
    pub gamma: f64,
}

impl Greeks {
    /// Derives the Greeks from d-terms already computed for `dp`; no validation happens here.
    pub fn from_terms(dp: &OptionParameters, terms: &D1D2) -> Self {
        let call_delta = cdf(terms.d1);
        Self {
            call_delta,
            put_delta: call_delta - 1.0,
            gamma: pdf(terms.d1) / (dp.spot * terms.sigma_exp),
        }
    }

    pub fn compute(dp: &OptionParameters) -> Result<Self> {
        let terms = BlackScholesMerton::d_terms(dp)?;
        Ok(Self::from_terms(dp, &terms))
    }
}
