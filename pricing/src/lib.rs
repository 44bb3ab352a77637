pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{price, BlackScholesMerton, OptionPrice, D1D2};
pub use analytic::greeks::Greeks;
pub use common::models::{OptionParameters, PricingResult};
pub use error::{PricingError, Result};
