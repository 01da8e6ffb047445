//! Money value object and the currencies the studio bills in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing currency.
///
/// Serialized exactly as the backend stores it (`"MXN"` / `"USD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "MXN")]
    Mxn,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
        }
    }

    /// Number of minor-unit digits (both supported currencies use cents).
    pub fn minor_units(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An amount of money in a specific currency.
///
/// The amount is kept unrounded so that repeated recomputation of derived
/// prices stays idempotent; rounding to minor units happens only when the
/// value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    /// Creates a new amount. Negative inputs are clamped to zero; the
    /// domain never produces a negative price.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: amount.max(0.0),
            currency,
        }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0.0,
            currency,
        }
    }

    /// Returns the unrounded amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount rounded to the currency's minor-unit precision.
    ///
    /// Presentation only; intermediate arithmetic stays unrounded.
    pub fn rounded(&self) -> f64 {
        let factor = 10_f64.powi(self.currency.minor_units() as i32);
        (self.amount * factor).round() / factor
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2} {}", self.rounded(), self.currency)
    }
}
