use crate::analytic::greeks::Greeks;
use crate::analytic::normal::cdf;
use crate::common::models::{OptionParameters, PricingResult};
use crate::error::{PricingError, Result};

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> Result<f64>;
    fn call(params: &Self::Params) -> Result<f64>;
}

/// The standardized intermediate terms shared by the prices and the Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
    /// σ√T
    pub sigma_exp: f64,
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// Validates `dp` and evaluates d1 and d2 once.
    pub fn d_terms(dp: &OptionParameters) -> Result<D1D2> {
        dp.validate()?;
        let sigma_exp = dp.volatility * dp.maturity.sqrt();
        let d1 = ((dp.spot / dp.strike).ln() + (dp.rate + dp.volatility.powi(2) / 2.0) * dp.maturity)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        if !d1.is_finite() || !d2.is_finite() {
            tracing::trace!(?dp, d1, d2, "non-finite d-terms");
            return Err(PricingError::domain(format!(
                "d1 = {d1} is not finite (sigma * sqrt(T) = {sigma_exp})"
            )));
        }
        Ok(D1D2 { d1, d2, sigma_exp })
    }

    fn call_from(dp: &OptionParameters, d: &D1D2) -> f64 {
        cdf(d.d1) * dp.spot - cdf(d.d2) * dp.strike * dp.discount_factor()
    }

    fn put_from(dp: &OptionParameters, d: &D1D2) -> f64 {
        cdf(-d.d2) * dp.strike * dp.discount_factor() - cdf(-d.d1) * dp.spot
    }

    /// Prices both legs and their Greeks from a single evaluation of d1/d2.
    pub fn evaluate(dp: &OptionParameters) -> Result<PricingResult> {
        let terms = Self::d_terms(dp)?;
        let greeks = Greeks::from_terms(dp, &terms);
        let result = PricingResult {
            call_price: Self::call_from(dp, &terms),
            put_price: Self::put_from(dp, &terms),
            call_delta: greeks.call_delta,
            put_delta: greeks.put_delta,
            gamma: greeks.gamma,
        };
        let finite = [result.call_price, result.put_price, result.gamma]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            tracing::trace!(?dp, ?result, "non-finite pricing result");
            return Err(PricingError::domain("price or gamma is not finite"));
        }
        Ok(result)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> Result<f64> {
        Self::evaluate(dp).map(|r| r.call_price)
    }

    fn put(dp: &OptionParameters) -> Result<f64> {
        Self::evaluate(dp).map(|r| r.put_price)
    }
}

/// Call and put prices with delta and gamma for one parameter set.
pub fn price(params: &OptionParameters) -> Result<PricingResult> {
    BlackScholesMerton::evaluate(params)
}
