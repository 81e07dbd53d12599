//! Black-Scholes pricing model and Greeks calculation.
//!
//! Closed-form values and sensitivities of European options. The put value
//! is always derived from the call value through put-call parity so the two
//! sides can never drift apart.
//!
//! Two degenerate regimes are handled explicitly rather than left to divide
//! by zero:
//! - zero volatility: the call value takes the riskless-forward shortcut
//!   `S − K·e^(−rT)` without evaluating d1/d2;
//! - zero denominator in d1 (σ = 0 or T = 0): d1 and d2 collapse to ±∞
//!   depending on the sign of the numerator, so Φ and φ evaluate to their
//!   limits 0/1 and 0.

use super::types::{Greeks, OptionParams, OptionType};
use std::f64::consts::PI;

/// Square root of 2, precomputed for efficiency.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Scaling applied to rho so it reads as a per 1% rate move.
const RHO_SCALE: f64 = 0.01;

/// Black-Scholes pricing model implementation.
///
/// Every method is a pure function of its arguments. Inputs are not
/// validated here; see [`OptionParams::validate`] and the checked free
/// functions in [`crate::pricing::functions`].
pub struct BlackScholes;

impl BlackScholes {
    /// Approximation of the error function (erf).
    ///
    /// Uses Abramowitz and Stegun approximation (formula 7.1.26)
    /// with maximum error of 1.5×10⁻⁷.
    ///
    /// # Arguments
    /// - `x`: Input value
    ///
    /// # Returns
    /// Approximation of erf(x)
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        const A1: f64 = 0.254829592;
        const A2: f64 = -0.284496736;
        const A3: f64 = 1.421413741;
        const A4: f64 = -1.453152027;
        const A5: f64 = 1.061405429;
        const P: f64 = 0.3275911;

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        // x = ∞ gives t = 0 and exp(−∞) = 0, so erf(±∞) is exactly ±1.
        let t = 1.0 / (1.0 + P * x);
        let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

        sign * y
    }

    /// Standard normal cumulative distribution function Φ.
    ///
    /// Returns exactly 0 at −∞ and exactly 1 at +∞.
    #[must_use]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / SQRT_2))
    }

    /// Standard normal probability density function φ.
    #[must_use]
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// When σ√T is zero the result is +∞ for a non-negative numerator and
    /// −∞ otherwise.
    ///
    /// # Arguments
    /// - `params`: Option parameters (spot, strike, time, rate)
    /// - `vol`: Volatility (σ)
    #[must_use]
    pub fn d1(params: &OptionParams, vol: f64) -> f64 {
        let numerator = (params.spot / params.strike).ln()
            + (params.risk_free_rate + vol * vol / 2.0) * params.time_to_expiry;
        let denominator = vol * params.time_to_expiry.sqrt();

        if denominator == 0.0 {
            return if numerator >= 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        numerator / denominator
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(params: &OptionParams, vol: f64) -> f64 {
        Self::d2_from_d1(Self::d1(params, vol), params, vol)
    }

    fn d2_from_d1(d1: f64, params: &OptionParams, vol: f64) -> f64 {
        d1 - vol * params.time_to_expiry.sqrt()
    }

    /// Value of a European call.
    ///
    /// C = S·Φ(d1) − K·e^(−rT)·Φ(d2)
    ///
    /// With zero volatility Φ(d1) and Φ(d2) are both taken as 1, giving the
    /// discounted forward payoff `S − K·e^(−rT)`. That value is not floored
    /// at zero. The option type stored in `params` is ignored.
    #[must_use]
    pub fn call_value(params: &OptionParams, vol: f64) -> f64 {
        let discount = params.discount_factor();

        if vol == 0.0 {
            return params.spot - params.strike * discount;
        }

        let d1 = Self::d1(params, vol);
        let d2 = Self::d2_from_d1(d1, params, vol);

        params.spot * Self::norm_cdf(d1) - params.strike * discount * Self::norm_cdf(d2)
    }

    /// Value of a European put, from put-call parity.
    ///
    /// P = C − S + K·e^(−rT)
    #[must_use]
    pub fn put_value(params: &OptionParams, vol: f64) -> f64 {
        Self::call_value(params, vol) - params.spot + params.strike * params.discount_factor()
    }

    /// Value of the option described by `params.option_type`.
    #[must_use]
    pub fn price(params: &OptionParams, vol: f64) -> f64 {
        match params.option_type {
            OptionType::Call => Self::call_value(params, vol),
            OptionType::Put => Self::put_value(params, vol),
        }
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = Φ(d1)
    /// For puts:  Δ = Φ(d1) - 1
    #[must_use]
    pub fn delta(params: &OptionParams, vol: f64) -> f64 {
        let call_delta = Self::norm_cdf(Self::d1(params, vol));

        match params.option_type {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - 1.0,
        }
    }

    /// Calculates gamma (∂²price/∂S²).
    ///
    /// Γ = φ(d1) / (S · σ · √T), identical for calls and puts. Zero when
    /// σ√T vanishes.
    #[must_use]
    pub fn gamma(params: &OptionParams, vol: f64) -> f64 {
        let denominator = params.spot * vol * params.time_to_expiry.sqrt();
        if denominator == 0.0 {
            return 0.0;
        }

        Self::norm_pdf(Self::d1(params, vol)) / denominator
    }

    /// Calculates vega (∂price/∂σ).
    ///
    /// Vega = S · φ(d1) · √T, per unit of volatility. Divide by 100 for the
    /// per-point convention.
    #[must_use]
    pub fn vega(params: &OptionParams, vol: f64) -> f64 {
        params.spot * Self::norm_pdf(Self::d1(params, vol)) * params.time_to_expiry.sqrt()
    }

    /// Calculates theta (∂price/∂t), annualized.
    ///
    /// For calls: Θ = −S·φ(d1)·σ / (2√T) − r·K·e^(−rT)·Φ(d2)
    /// For puts:  Θ = −S·φ(d1)·σ / (2√T) + r·K·e^(−rT)·Φ(−d2)
    ///
    /// Divide by 365 for a per-day figure.
    #[must_use]
    pub fn theta(params: &OptionParams, vol: f64) -> f64 {
        let d1 = Self::d1(params, vol);
        let d2 = Self::d2_from_d1(d1, params, vol);
        let sqrt_time = params.time_to_expiry.sqrt();
        let carry = params.risk_free_rate * params.strike * params.discount_factor();

        let decay = if sqrt_time == 0.0 {
            0.0
        } else {
            -(params.spot * Self::norm_pdf(d1) * vol) / (2.0 * sqrt_time)
        };

        match params.option_type {
            OptionType::Call => decay - carry * Self::norm_cdf(d2),
            OptionType::Put => decay + carry * Self::norm_cdf(-d2),
        }
    }

    /// Calculates rho (∂price/∂r) per 1% rate move.
    ///
    /// For calls: ρ = 0.01·K·T·e^(−rT)·Φ(d2)
    /// For puts:  ρ = −0.01·K·T·e^(−rT)·Φ(−d2)
    #[must_use]
    pub fn rho(params: &OptionParams, vol: f64) -> f64 {
        let d2 = Self::d2(params, vol);
        let exposure = RHO_SCALE * params.strike * params.time_to_expiry * params.discount_factor();

        match params.option_type {
            OptionType::Call => exposure * Self::norm_cdf(d2),
            OptionType::Put => -exposure * Self::norm_cdf(-d2),
        }
    }

    /// Calculates all five Greeks for the option in `params`.
    #[must_use]
    pub fn greeks(params: &OptionParams, vol: f64) -> Greeks {
        Greeks {
            delta: Self::delta(params, vol),
            gamma: Self::gamma(params, vol),
            vega: Self::vega(params, vol),
            theta: Self::theta(params, vol),
            rho: Self::rho(params, vol),
        }
    }
}
