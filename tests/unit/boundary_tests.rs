//! Degenerate inputs and input validation at the public entry points.

use blackscholes_rs::prelude::*;

#[test]
fn test_zero_volatility_and_zero_maturity_are_not_errors() {
    assert!(call_value(42.0, 40.0, 0.0, 0.1, 0.2).unwrap().is_finite());
    assert!(put_value(42.0, 40.0, 0.5, 0.1, 0.0).unwrap().is_finite());
    assert!(call_gamma(42.0, 40.0, 0.0, 0.1, 0.2).unwrap().is_finite());
    assert!(call_theta(42.0, 40.0, 0.0, 0.1, 0.2).unwrap().is_finite());
    assert!(call_theta(42.0, 40.0, 0.5, 0.1, 0.0).unwrap().is_finite());
    assert_eq!(d1(42.0, 40.0, 0.0, 0.1, 0.2).unwrap(), f64::INFINITY);
    assert_eq!(d2(38.0, 40.0, 0.0, 0.1, 0.2).unwrap(), f64::NEG_INFINITY);
}

#[test]
fn test_expiry_values_equal_intrinsic() {
    for spot in [30.0, 38.0, 40.0, 42.0, 55.0] {
        let call = OptionParams::call(spot, 40.0, 0.0, 0.1);
        let put = OptionParams::put(spot, 40.0, 0.0, 0.1);

        let call_price = call_value(spot, 40.0, 0.0, 0.1, 0.2).unwrap();
        let put_price = put_value(spot, 40.0, 0.0, 0.1, 0.2).unwrap();

        assert!((call_price - call.intrinsic_value()).abs() < 1e-12, "call at {spot}");
        assert!((put_price - put.intrinsic_value()).abs() < 1e-12, "put at {spot}");
    }
}

#[test]
fn test_zero_volatility_value_is_discounted_forward() {
    // The shortcut is not the ±∞ limit: an OTM call is valued below zero
    let value = call_value(5.0, 10.0, 1.0, 0.05, 0.0).unwrap();
    assert!((value - (5.0 - 10.0 * (-0.05f64).exp())).abs() < 1e-12);
    assert!(value < 0.0);

    // while its delta still takes the ±∞ branch
    assert_eq!(call_delta(5.0, 10.0, 1.0, 0.05, 0.0).unwrap(), 0.0);
}

#[test]
fn test_invalid_domain_inputs_are_reported() {
    assert_eq!(
        call_value(-42.0, 40.0, 0.5, 0.1, 0.2),
        Err(PricingError::InvalidSpot { spot: -42.0 })
    );
    assert_eq!(
        put_delta(42.0, 0.0, 0.5, 0.1, 0.2),
        Err(PricingError::InvalidStrike { strike: 0.0 })
    );
    assert_eq!(
        call_rho(42.0, 40.0, -1.0, 0.1, 0.2),
        Err(PricingError::NegativeTimeToExpiry {
            time_to_expiry: -1.0
        })
    );
    assert_eq!(
        call_vega(42.0, 40.0, 0.5, 0.1, -0.2),
        Err(PricingError::NegativeVolatility { volatility: -0.2 })
    );
    assert_eq!(
        put_implied_volatility(42.0, 40.0, 0.5, 0.1, -0.81, 0.2, DEFAULT_MAX_ITERATIONS),
        Err(PricingError::NegativeMarketPrice { price: -0.81 })
    );
    assert!(matches!(
        call_implied_volatility(42.0, 40.0, 0.5, 0.1, 4.76, f64::NAN, DEFAULT_MAX_ITERATIONS),
        Err(PricingError::NonFiniteInput { .. })
    ));
}

#[test]
fn test_exhausted_search_returns_best_estimate() {
    let iv = call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, 0.2, 5).unwrap();
    assert!((iv - 0.239).abs() < 1e-12);

    let iv = call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, 0.2, 0).unwrap();
    assert_eq!(iv, 0.2);
}

#[test]
fn test_idempotent_resolve() {
    let first = call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, 0.2, DEFAULT_MAX_ITERATIONS)
        .unwrap();

    // The model price at the returned estimate already matches the target
    let repriced = call_value(21.0, 20.0, 0.25, 0.1, first).unwrap();
    assert_eq!(
        (repriced * 1000.0).round_ties_even(),
        (1.875f64 * 1000.0).round_ties_even()
    );

    let params = OptionParams::call(21.0, 20.0, 0.25, 0.1);
    let config = SolverConfig::default();
    let again = solve_iv(&params, 1.875, first, &config).unwrap();
    assert!(again.is_converged());
    assert_eq!(again.iterations, 1);
    assert!((again.iv - first).abs() <= config.initial_step + 1e-12);
}

#[test]
fn test_solutions_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let initial = 0.1 + 0.1 * i as f64;
                call_implied_volatility(21.0, 20.0, 0.25, 0.1, 1.875, initial, 100).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let iv = handle.join().unwrap();
        assert!((iv - 0.2345).abs() < 0.011);
    }
}
