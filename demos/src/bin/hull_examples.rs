use blackscholes_rs::prelude::*;
use tracing::info;

/// Hull (4th ed.) inputs for a six-month option on a non-dividend stock.
const SPOT: f64 = 42.0;
const STRIKE: f64 = 40.0;
const MATURITY: f64 = 0.5;
const RATE: f64 = 0.1;
const SIGMA: f64 = 0.2;

fn price_textbook_option() -> Result<(), PricingError> {
    info!(
        "d1 = {:.4}, d2 = {:.4}",
        d1(SPOT, STRIKE, MATURITY, RATE, SIGMA)?,
        d2(SPOT, STRIKE, MATURITY, RATE, SIGMA)?
    );
    info!(
        "call = {:.2}, put = {:.2}",
        call_value(SPOT, STRIKE, MATURITY, RATE, SIGMA)?,
        put_value(SPOT, STRIKE, MATURITY, RATE, SIGMA)?
    );
    Ok(())
}

fn print_greeks() -> Result<(), Box<dyn std::error::Error>> {
    // Example 13.6 and onwards
    for option_type in [OptionType::Call, OptionType::Put] {
        let bundle = greeks(option_type, 49.0, 50.0, 0.3846, 0.05, 0.2)?;
        info!("{:?} greeks: {}", option_type, serde_json::to_string_pretty(&bundle)?);
        info!(
            "theta per day = {:.4}, vega per point = {:.4}",
            bundle.theta_per_day(),
            bundle.vega_per_point()
        );
    }
    Ok(())
}

fn solve_implied_volatilities() -> Result<(), PricingError> {
    let iv = call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, 0.2, DEFAULT_MAX_ITERATIONS)?;
    info!("problem 15.11 call implied volatility = {:.3}", iv);

    let iv = put_implied_volatility(
        26.33,
        26.46,
        7.0 / 365.0,
        0.025,
        0.62,
        0.2,
        DEFAULT_MAX_ITERATIONS,
    )?;
    info!("weekly put implied volatility = {:.3}", iv);

    // A price below what any positive volatility supports collapses to zero
    let params = OptionParams::call(100.0, 85.0, 0.25, 0.02);
    let solution = solve_iv(&params, 15.0, 0.2, &SolverConfig::default())?;
    info!(
        "deep ITM call: iv = {}, outcome = {:?} after {} iterations",
        solution.iv, solution.outcome, solution.iterations
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; solver iterations are logged at trace level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    info!("Starting Black-Scholes textbook example");

    price_textbook_option()?;
    print_greeks()?;
    solve_implied_volatilities()?;

    info!("Example completed successfully");
    Ok(())
}
