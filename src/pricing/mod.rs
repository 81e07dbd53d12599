//! Black-Scholes-Merton analytics for European options.
//!
//! This module provides closed-form option values and Greeks, and recovers
//! implied volatility (IV) from an observed option price by inverting the
//! closed-form value with an adaptive-step search.
//!
//! # Pricing
//!
//! [`BlackScholes`] works on [`OptionParams`] plus a volatility. The put
//! value is derived from the call value by put-call parity. Zero volatility
//! and zero time to maturity are legal and have well-defined limits.
//!
//! # Implied Volatility
//!
//! [`solve_iv`] starts from a caller-supplied estimate and moves it by a
//! step of 0.01, shrinking the step tenfold each time the search overshoots
//! and turns around. It stops once the model price matches the target to
//! three decimals, reports 0 if the estimate falls below 0.01, and otherwise
//! returns its last estimate when the iteration budget runs out.
//!
//! # Example
//!
//! ```
//! use blackscholes_rs::pricing::{BlackScholes, OptionParams, SolverConfig, solve_iv};
//!
//! let params = OptionParams::call(42.0, 40.0, 0.5, 0.1);
//! let price = BlackScholes::price(&params, 0.2);
//! assert!((price - 4.76).abs() < 0.005);
//!
//! let solution = solve_iv(&params, price, 0.3, &SolverConfig::default()).unwrap();
//! assert!((solution.iv - 0.2).abs() < 0.011);
//! ```

mod black_scholes;
mod error;
pub mod functions;
mod solver;
mod types;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use functions::{
    call_delta, call_gamma, call_implied_volatility, call_rho, call_theta, call_value, call_vega,
    d1, d2, greeks, put_delta, put_implied_volatility, put_rho, put_theta, put_value,
};
pub use solver::{DEFAULT_MAX_ITERATIONS, SolverConfig, solve_iv};
pub use types::{Greeks, IVSolution, OptionParams, OptionType, SolveOutcome};
