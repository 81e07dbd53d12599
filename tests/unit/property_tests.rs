//! Property-based tests using proptest.
//!
//! These tests verify that:
//! 1. Put-call parity holds for every valid input
//! 2. Call delta minus put delta is exactly one
//! 3. The call value increases with volatility
//! 4. The solver recovers the volatility that produced a price
//! 5. Solver outcomes agree with the estimate they report

use blackscholes_rs::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Input strategies
// ============================================================================

/// Valid market inputs including the degenerate boundaries.
fn market_strategy() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        1.0..500.0f64,
        1.0..500.0f64,
        prop_oneof![Just(0.0), 0.0..5.0f64],
        -0.05..0.2f64,
        prop_oneof![Just(0.0), 0.0..2.0f64],
    )
}

/// Near-the-money inputs where vega keeps the price sensitive to volatility.
fn near_the_money_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (90.0..110.0f64, 0.25..1.0f64, 0.0..0.05f64, 0.15..0.6f64)
}

// ============================================================================
// Closed-form properties
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity((s, k, t, r, sigma) in market_strategy()) {
        let call = call_value(s, k, t, r, sigma).unwrap();
        let put = put_value(s, k, t, r, sigma).unwrap();
        prop_assert_eq!(put, call - s + k * (-r * t).exp());
    }

    #[test]
    fn prop_delta_identity((s, k, t, r, sigma) in market_strategy()) {
        let call = call_delta(s, k, t, r, sigma).unwrap();
        let put = put_delta(s, k, t, r, sigma).unwrap();
        prop_assert_eq!(call - put, 1.0);
    }

    #[test]
    fn prop_call_value_increases_with_volatility(
        s in 80.0..120.0f64,
        t in 0.25..2.0f64,
        r in 0.0..0.08f64,
        sigma in 0.15..0.8f64,
    ) {
        let lower = call_value(s, 100.0, t, r, sigma).unwrap();
        let higher = call_value(s, 100.0, t, r, sigma + 0.05).unwrap();
        prop_assert!(higher > lower);
        prop_assert!(call_vega(s, 100.0, t, r, sigma).unwrap() > 0.0);
    }

    #[test]
    fn prop_greeks_are_finite((s, k, t, r, sigma) in market_strategy()) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let bundle = greeks(option_type, s, k, t, r, sigma).unwrap();
            prop_assert!(bundle.delta.is_finite());
            prop_assert!(bundle.gamma.is_finite() && bundle.gamma >= 0.0);
            prop_assert!(bundle.vega.is_finite() && bundle.vega >= 0.0);
            prop_assert!(bundle.theta.is_finite());
            prop_assert!(bundle.rho.is_finite());
        }
    }
}

// ============================================================================
// Solver properties
// ============================================================================

proptest! {
    #[test]
    fn prop_solver_recovers_volatility(
        (s, t, r, sigma) in near_the_money_strategy(),
        initial in 0.1..0.7f64,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let params = OptionParams::new(s, 100.0, t, r, option_type);
        let target = BlackScholes::price(&params, sigma);

        let solution = solve_iv(&params, target, initial, &SolverConfig::default()).unwrap();

        prop_assert!(solution.is_converged());
        // At most one step away from an estimate whose price matched
        prop_assert!((solution.iv - sigma).abs() < 0.011);
    }

    #[test]
    fn prop_solver_outcomes_are_consistent(
        (s, t, r, _sigma) in near_the_money_strategy(),
        target in 0.0..30.0f64,
        initial in 0.0..1.0f64,
    ) {
        let params = OptionParams::call(s, 100.0, t, r);
        let config = SolverConfig::default();
        let solution = solve_iv(&params, target, initial, &config).unwrap();

        prop_assert!(solution.iterations <= config.max_iterations);
        match solution.outcome {
            SolveOutcome::Floored => prop_assert_eq!(solution.iv, 0.0),
            SolveOutcome::Exhausted => {
                prop_assert_eq!(solution.iterations, config.max_iterations);
                prop_assert!(solution.iv >= config.volatility_floor);
            }
            SolveOutcome::Converged => {
                let price = BlackScholes::price(&params, solution.iv);
                prop_assert!(price.is_finite());
            }
        }
    }
}
