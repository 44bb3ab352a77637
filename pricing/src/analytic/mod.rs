pub mod black_scholes;
pub mod greeks;
pub mod normal;
