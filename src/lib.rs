//! # blackscholes-rs
//!
//! Closed-form Black-Scholes-Merton valuation of European options, their
//! Greeks, and an implied volatility solver that inverts the valuation.
//!
//! All functions are pure and reentrant: nothing is cached and no state is
//! shared between calls, so independent inputs can be priced from any number
//! of threads without synchronization.
//!
//! The solver reports each iteration through `tracing` at `TRACE` level and
//! its outcome at `DEBUG` level. The library never installs a subscriber.
//!
//! ```
//! use blackscholes_rs::prelude::*;
//!
//! let delta = call_delta(49.0, 50.0, 0.3846, 0.05, 0.2)?;
//! assert!((delta - 0.522).abs() < 5e-4);
//!
//! let t = 7.0 / 365.0;
//! let iv = put_implied_volatility(26.33, 26.46, t, 0.025, 0.62, 0.2, DEFAULT_MAX_ITERATIONS)?;
//! assert!((iv - 0.383).abs() < 5e-4);
//! # Ok::<(), PricingError>(())
//! ```

pub mod prelude;
pub mod pricing;
