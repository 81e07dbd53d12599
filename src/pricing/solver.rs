//! Adaptive-step solver for implied volatility calculation.
//!
//! The solver walks the volatility estimate up or down by a fixed step,
//! depending on whether the model price is below or above the target, and
//! shrinks the step tenfold every time the walk changes direction. Only
//! prices are evaluated; there is no vega-based Newton step, so regions
//! where vega is close to zero do not make the search diverge.
//!
//! The search never fails once its inputs are valid. It ends in one of
//! three ways, reported through [`SolveOutcome`]:
//! - the model price matches the target when both are rounded to
//!   `price_decimals` places;
//! - the estimate falls below `volatility_floor`, in which case the IV is
//!   reported as exactly 0;
//! - the iteration budget runs out and the last estimate is returned.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::black_scholes::BlackScholes;
use super::error::{PricingError, validate_market_price, validate_volatility};
use super::types::{IVSolution, OptionParams, SolveOutcome};

/// Default iteration budget of a search.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the adaptive-step solver.
///
/// The defaults reproduce the canonical search: step 0.01, shrink ×0.1 on
/// reversal, floor 0.01, prices compared at 3 decimals, 100 iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum pricer evaluations before giving up.
    pub max_iterations: u32,
    /// Size of the first volatility step.
    pub initial_step: f64,
    /// Factor applied to the step when the search reverses direction.
    pub shrink_factor: f64,
    /// Estimates below this value end the search with an IV of 0.
    pub volatility_floor: f64,
    /// Decimal places at which model and target prices must agree.
    pub price_decimals: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_step: 0.01,
            shrink_factor: 0.1,
            volatility_floor: 0.01,
            price_decimals: 3,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the size of the first step.
    #[must_use]
    pub fn with_initial_step(mut self, initial_step: f64) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Sets the factor applied to the step on each reversal.
    #[must_use]
    pub fn with_shrink_factor(mut self, shrink_factor: f64) -> Self {
        self.shrink_factor = shrink_factor;
        self
    }

    /// Sets the volatility floor.
    #[must_use]
    pub fn with_volatility_floor(mut self, volatility_floor: f64) -> Self {
        self.volatility_floor = volatility_floor;
        self
    }

    /// Sets the number of decimals used in the price comparison.
    #[must_use]
    pub fn with_price_decimals(mut self, price_decimals: u32) -> Self {
        self.price_decimals = price_decimals;
        self
    }

    /// Checks that the configuration describes a usable search.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.initial_step.is_finite() && self.initial_step > 0.0) {
            return Err(PricingError::InvalidConfig {
                message: format!("initial step must be positive, got {}", self.initial_step),
            });
        }

        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "shrink factor must lie in (0, 1), got {}",
                    self.shrink_factor
                ),
            });
        }

        if !(self.volatility_floor.is_finite() && self.volatility_floor >= 0.0) {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "volatility floor must be non-negative, got {}",
                    self.volatility_floor
                ),
            });
        }

        // f64 carries about 15 significant decimal digits
        if self.price_decimals > 15 {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "price decimals must be at most 15, got {}",
                    self.price_decimals
                ),
            });
        }

        Ok(())
    }

    fn prices_match(&self, price: f64, target: f64) -> bool {
        let factor = 10f64.powi(self.price_decimals as i32);
        (price * factor).round_ties_even() == (target * factor).round_ties_even()
    }
}

/// Direction of the last volatility move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undefined,
    Up,
    Down,
}

/// Mutable state of one search, owned by a single call to [`solve_iv`].
#[derive(Debug, Clone, Copy)]
struct SearchState {
    sigma: f64,
    step: f64,
    direction: Direction,
}

impl SearchState {
    fn new(initial_sigma: f64, initial_step: f64) -> Self {
        Self {
            sigma: initial_sigma,
            step: initial_step,
            direction: Direction::Undefined,
        }
    }

    /// Moves the estimate toward the target, shrinking the step on reversal.
    fn advance(&mut self, price: f64, target: f64, shrink_factor: f64) {
        if price < target {
            if self.direction == Direction::Down {
                self.step *= shrink_factor;
            }
            self.direction = Direction::Up;
            self.sigma += self.step;
        } else {
            if self.direction == Direction::Up {
                self.step *= shrink_factor;
            }
            self.direction = Direction::Down;
            self.sigma -= self.step;
        }
    }
}

/// Solves for the volatility at which the model price meets `market_price`.
///
/// Each iteration prices the option at the current estimate, moves the
/// estimate one step toward the target, then checks for a price match and
/// for the volatility floor, in that order. The estimate returned on a match
/// is the one after the move.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `market_price`: Observed market price to match
/// - `initial_sigma`: Starting volatility estimate
/// - `config`: Solver configuration
///
/// # Returns
/// - `Ok(IVSolution)`: Estimate, evaluations used and how the search ended
/// - `Err(PricingError)`: If an input or the configuration is invalid
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::{OptionParams, SolverConfig, solve_iv};
///
/// let params = OptionParams::call(21.0, 20.0, 0.25, 0.1);
/// let solution = solve_iv(&params, 1.875, 0.2, &SolverConfig::default()).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.iv - 0.234).abs() < 1e-3);
/// ```
pub fn solve_iv(
    params: &OptionParams,
    market_price: f64,
    initial_sigma: f64,
    config: &SolverConfig,
) -> Result<IVSolution, PricingError> {
    params.validate()?;
    let target = validate_market_price(market_price)?;
    let initial_sigma = validate_volatility(initial_sigma)?;
    config.validate()?;

    let mut state = SearchState::new(initial_sigma, config.initial_step);

    for iteration in 1..=config.max_iterations {
        let price = BlackScholes::price(params, state.sigma);
        state.advance(price, target, config.shrink_factor);

        trace!(
            "iv search {:?} iteration {}: price={:.6} target={:.6} step={} {:?} -> sigma={:.6}",
            params.option_type,
            iteration,
            price,
            target,
            state.step,
            state.direction,
            state.sigma
        );

        if config.prices_match(price, target) {
            debug!(
                "iv search converged after {} iterations: sigma={:.6}",
                iteration, state.sigma
            );
            return Ok(IVSolution::new(
                state.sigma,
                iteration,
                SolveOutcome::Converged,
            ));
        }

        if state.sigma < config.volatility_floor {
            debug!(
                "iv search fell below floor {} after {} iterations, target {:.6}",
                config.volatility_floor, iteration, target
            );
            return Ok(IVSolution::new(0.0, iteration, SolveOutcome::Floored));
        }
    }

    debug!(
        "iv search exhausted {} iterations: returning sigma={:.6}",
        config.max_iterations, state.sigma
    );
    Ok(IVSolution::new(
        state.sigma,
        config.max_iterations,
        SolveOutcome::Exhausted,
    ))
}
