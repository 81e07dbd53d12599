//! Convenient re-exports of the crate's public API.

pub use crate::pricing::{
    BlackScholes, DEFAULT_MAX_ITERATIONS, Greeks, IVSolution, OptionParams, OptionType,
    PricingError, SolveOutcome, SolverConfig, call_delta, call_gamma, call_implied_volatility,
    call_rho, call_theta, call_value, call_vega, d1, d2, greeks, put_delta,
    put_implied_volatility, put_rho, put_theta, put_value, solve_iv,
};
