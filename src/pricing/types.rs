//! Types shared by the pricer and the implied volatility solver.

use serde::{Deserialize, Serialize};

use super::error::{PricingError, ensure_finite};

/// Option type for pricing and IV calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

/// Market inputs of a European option.
///
/// Volatility is deliberately not part of the parameters: the pricer takes
/// it as an argument and the solver is searching for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Time to expiration in years (T). Zero is a legal boundary case.
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate (r).
    pub risk_free_rate: f64,
    /// Option type (Call or Put).
    pub option_type: OptionType,
}

impl OptionParams {
    /// Creates new option parameters.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price
    /// - `strike`: Option strike price
    /// - `time_to_expiry`: Time to expiration in years
    /// - `risk_free_rate`: Continuously compounded risk-free rate
    /// - `option_type`: Call or Put
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Put,
        )
    }

    /// Returns a copy of these parameters for the other option type.
    #[must_use]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Checks the inputs against the model's domain.
    ///
    /// Requires S > 0, K > 0, T ≥ 0 and every field finite. The rate may
    /// take any finite value.
    pub fn validate(&self) -> Result<(), PricingError> {
        let spot = ensure_finite("spot", self.spot)?;
        if spot <= 0.0 {
            return Err(PricingError::InvalidSpot { spot });
        }

        let strike = ensure_finite("strike", self.strike)?;
        if strike <= 0.0 {
            return Err(PricingError::InvalidStrike { strike });
        }

        let time_to_expiry = ensure_finite("time to expiry", self.time_to_expiry)?;
        if time_to_expiry < 0.0 {
            return Err(PricingError::NegativeTimeToExpiry { time_to_expiry });
        }

        ensure_finite("risk-free rate", self.risk_free_rate)?;
        Ok(())
    }

    /// Discount factor e^(−rT) applied to the strike.
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Calculates the intrinsic value of the option.
    ///
    /// For calls: max(0, spot - strike)
    /// For puts: max(0, strike - spot)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}

/// The five first-order Black-Scholes sensitivities of one option.
///
/// Conventions: vega and theta are unscaled (per unit of volatility, per
/// year), rho is per 1% move in the rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// ∂V/∂σ.
    pub vega: f64,
    /// ∂V/∂t, annualized.
    pub theta: f64,
    /// ∂V/∂r scaled by 0.01.
    pub rho: f64,
}

impl Greeks {
    /// Theta expressed per calendar day.
    #[must_use]
    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }

    /// Vega expressed per one volatility point (1%).
    #[must_use]
    pub fn vega_per_point(&self) -> f64 {
        self.vega / 100.0
    }
}

/// How an implied volatility search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// Model price matched the target at the configured rounding.
    Converged,
    /// The estimate dropped below the volatility floor; IV reported as 0.
    Floored,
    /// Iteration budget ran out; IV is the last estimate.
    Exhausted,
}

/// Result of an implied volatility search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVSolution {
    /// Implied volatility estimate (e.g., 0.25 = 25%).
    pub iv: f64,
    /// Number of pricer evaluations performed.
    pub iterations: u32,
    /// How the search ended.
    pub outcome: SolveOutcome,
}

impl IVSolution {
    /// Creates a new IV solution.
    #[must_use]
    pub fn new(iv: f64, iterations: u32, outcome: SolveOutcome) -> Self {
        Self {
            iv,
            iterations,
            outcome,
        }
    }

    /// Returns the IV as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn iv_percent(&self) -> f64 {
        self.iv * 100.0
    }

    /// Returns true if the model price matched the target.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.outcome == SolveOutcome::Converged
    }
}
