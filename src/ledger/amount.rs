use std::fmt;
use std::str::FromStr;

use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::numeric;

/// A monetary value held as an exact fraction.
///
/// Amounts may carry any sign; the direction of the obligation is decided by
/// the transaction that owns them. Equality and hashing follow the reduced
/// rational value, so `"1/2"` and `"0.5"` parse equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Amount(BigRational);

impl Amount {
    /// Returns whether `text` matches the accepted number grammar: a decimal
    /// number or two decimals separated by `/`, optionally negative.
    pub fn is_valid_amount(text: &str) -> bool {
        numeric::is_valid_signed_text(text)
    }

    /// Wraps an exact value computed elsewhere, skipping the text grammar.
    pub fn from_ratio(value: BigRational) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigRational {
        &self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        numeric::parse_signed(text).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
