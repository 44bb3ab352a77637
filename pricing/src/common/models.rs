use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, PricingError, Result};

/// The five scalar inputs of the Black-Scholes model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// the underlying's price at time t
    pub spot: f64,
    /// the strike or exercise price of the option
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub maturity: f64,
    /// the annualized standard deviation of the underlying's returns
    pub volatility: f64,
    /// the annualized risk-free interest rate
    pub rate: f64,
}

impl OptionParameters {
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            volatility,
            rate,
        }
    }

    /// Checks every field before any arithmetic; the first offending field is reported.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("maturity", self.maturity)?;
        ensure_positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(PricingError::invalid("rate", self.rate, "must be finite"));
        }
        Ok(())
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }

    /// e^{-rT}
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        Self::new(100.0, 95.0, 1.0, 0.05, 0.2)
    }
}

/// Prices and Greeks of the call and the put on one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
}

impl PricingResult {
    pub fn call_gamma(&self) -> f64 {
        self.gamma
    }

    pub fn put_gamma(&self) -> f64 {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_input_form() {
        let p = OptionParameters::default();
        assert_eq!(p, OptionParameters::new(100.0, 95.0, 1.0, 0.05, 0.2));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validation_names_first_bad_field() {
        let p = OptionParameters::new(100.0, 0.0, -1.0, 0.05, 0.2);
        assert_eq!(p.validate().unwrap_err().field(), Some("strike"));

        let p = OptionParameters::new(100.0, 100.0, -1.0, 0.05, 0.2);
        assert_eq!(p.validate().unwrap_err().field(), Some("maturity"));

        let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0);
        assert_eq!(p.validate().unwrap_err().field(), Some("volatility"));

        let p = OptionParameters::new(-5.0, 100.0, 1.0, 0.05, 0.2);
        assert_eq!(p.validate().unwrap_err().field(), Some("spot"));
    }

    #[test]
    fn rate_may_be_negative_but_not_nan() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.2)
            .validate()
            .is_ok());
        let err = OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("rate"));
    }

    #[test]
    fn substitution_keeps_other_fields() {
        let base = OptionParameters::default();
        let p = base.with_spot(120.0).with_volatility(0.3).with_maturity(2.0);
        assert_eq!(p.spot, 120.0);
        assert_eq!(p.volatility, 0.3);
        assert_eq!(p.maturity, 2.0);
        assert_eq!(p.strike, base.strike);
        assert_eq!(p.rate, base.rate);
        // the original is untouched
        assert_eq!(base.spot, 100.0);
    }
}
