//! Error types for option pricing and implied volatility calculation.

use std::fmt;

/// Errors reported when inputs fall outside the model's domain.
///
/// Degenerate but legal inputs (zero volatility, zero time to expiry) are
/// never errors, and neither is a solver that runs out of iterations.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Spot price is zero or negative.
    InvalidSpot {
        /// Spot price received.
        spot: f64,
    },

    /// Strike price is zero or negative.
    InvalidStrike {
        /// Strike price received.
        strike: f64,
    },

    /// Time to expiry is negative.
    NegativeTimeToExpiry {
        /// Time to expiry in years.
        time_to_expiry: f64,
    },

    /// Volatility is negative.
    NegativeVolatility {
        /// Volatility received.
        volatility: f64,
    },

    /// Observed option price used for inversion is negative.
    NegativeMarketPrice {
        /// Market price received.
        price: f64,
    },

    /// An input is NaN or infinite.
    NonFiniteInput {
        /// Name of the offending input.
        name: &'static str,
        /// Value received.
        value: f64,
    },

    /// Solver configuration cannot drive a search.
    InvalidConfig {
        /// Description of the invalid setting.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidSpot { spot } => {
                write!(f, "spot price must be positive, got {spot}")
            }
            PricingError::InvalidStrike { strike } => {
                write!(f, "strike price must be positive, got {strike}")
            }
            PricingError::NegativeTimeToExpiry { time_to_expiry } => {
                write!(
                    f,
                    "time to expiry must be non-negative, got {time_to_expiry} years"
                )
            }
            PricingError::NegativeVolatility { volatility } => {
                write!(f, "volatility must be non-negative, got {volatility}")
            }
            PricingError::NegativeMarketPrice { price } => {
                write!(f, "market price must be non-negative, got {price}")
            }
            PricingError::NonFiniteInput { name, value } => {
                write!(f, "{name} must be a finite number, got {value}")
            }
            PricingError::InvalidConfig { message } => {
                write!(f, "invalid solver configuration: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Rejects NaN and infinities for the named input.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFiniteInput { name, value })
    }
}

/// Validates a volatility input: finite and non-negative.
pub(crate) fn validate_volatility(volatility: f64) -> Result<f64, PricingError> {
    ensure_finite("volatility", volatility)?;
    if volatility < 0.0 {
        return Err(PricingError::NegativeVolatility { volatility });
    }
    Ok(volatility)
}

/// Validates an observed option price: finite and non-negative.
pub(crate) fn validate_market_price(price: f64) -> Result<f64, PricingError> {
    ensure_finite("market price", price)?;
    if price < 0.0 {
        return Err(PricingError::NegativeMarketPrice { price });
    }
    Ok(price)
}
