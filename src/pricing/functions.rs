//! Checked scalar API over the pricer and the solver.
//!
//! Every function takes the five market inputs as plain `f64` values in the
//! order spot, strike, time to maturity, risk-free rate, volatility, and
//! rejects inputs outside the model's domain with a [`PricingError`]. Zero
//! volatility and zero time to maturity are accepted.

use super::black_scholes::BlackScholes;
use super::error::{PricingError, validate_volatility};
use super::solver::{SolverConfig, solve_iv};
use super::types::{Greeks, OptionParams, OptionType};

fn checked(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
    option_type: OptionType,
) -> Result<OptionParams, PricingError> {
    let params = OptionParams::new(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        option_type,
    );
    params.validate()?;
    validate_volatility(sigma)?;
    Ok(params)
}

/// Black-Scholes d1.
pub fn d1(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::d1(&params, sigma))
}

/// Black-Scholes d2.
pub fn d2(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::d2(&params, sigma))
}

/// Value of a European call.
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::call_value;
///
/// let value = call_value(42.0, 40.0, 0.5, 0.1, 0.2).unwrap();
/// assert!((value - 4.76).abs() < 0.005);
/// ```
pub fn call_value(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::call_value(&params, sigma))
}

/// Value of a European put, from put-call parity.
pub fn put_value(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Put,
    )?;
    Ok(BlackScholes::put_value(&params, sigma))
}

/// Call delta, Φ(d1).
pub fn call_delta(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::delta(&params, sigma))
}

/// Put delta, Φ(d1) − 1.
pub fn put_delta(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Put,
    )?;
    Ok(BlackScholes::delta(&params, sigma))
}

/// Gamma, shared by calls and puts.
pub fn call_gamma(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::gamma(&params, sigma))
}

/// Vega per unit of volatility, shared by calls and puts.
pub fn call_vega(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::vega(&params, sigma))
}

/// Annualized call theta.
pub fn call_theta(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::theta(&params, sigma))
}

/// Annualized put theta.
pub fn put_theta(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Put,
    )?;
    Ok(BlackScholes::theta(&params, sigma))
}

/// Call rho per 1% rate move.
pub fn call_rho(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Call,
    )?;
    Ok(BlackScholes::rho(&params, sigma))
}

/// Put rho per 1% rate move.
pub fn put_rho(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<f64, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        OptionType::Put,
    )?;
    Ok(BlackScholes::rho(&params, sigma))
}

/// All five Greeks of a call or a put.
pub fn greeks(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    sigma: f64,
) -> Result<Greeks, PricingError> {
    let params = checked(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        sigma,
        option_type,
    )?;
    Ok(BlackScholes::greeks(&params, sigma))
}

/// Implied volatility of a European call from its market price.
///
/// Returns the solver's estimate whether or not it converged, and exactly 0
/// when no admissible positive volatility was found. Use
/// [`solve_iv`](crate::pricing::solve_iv) to learn how the search ended.
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::{DEFAULT_MAX_ITERATIONS, call_implied_volatility};
///
/// let iv =
///     call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, 0.2, DEFAULT_MAX_ITERATIONS).unwrap();
/// assert!((iv - 0.234).abs() < 1e-3);
/// ```
pub fn call_implied_volatility(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    target_price: f64,
    initial_sigma: f64,
    max_iterations: u32,
) -> Result<f64, PricingError> {
    let params = OptionParams::call(spot, strike, time_to_maturity, risk_free_rate);
    let config = SolverConfig::new().with_max_iterations(max_iterations);
    Ok(solve_iv(&params, target_price, initial_sigma, &config)?.iv)
}

/// Implied volatility of a European put from its market price.
///
/// Same search as [`call_implied_volatility`], priced with the put value.
pub fn put_implied_volatility(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    target_price: f64,
    initial_sigma: f64,
    max_iterations: u32,
) -> Result<f64, PricingError> {
    let params = OptionParams::put(spot, strike, time_to_maturity, risk_free_rate);
    let config = SolverConfig::new().with_max_iterations(max_iterations);
    Ok(solve_iv(&params, target_price, initial_sigma, &config)?.iv)
}
