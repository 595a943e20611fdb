use std::fmt;
use std::str::FromStr;

use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::numeric;

/// A participant's relative share of a transaction.
///
/// Weight text follows the same grammar as [`Amount`](super::Amount) minus
/// the sign: `"-1"` is rejected at the parse boundary. Values produced by
/// arithmetic (summing shares during a merge) may still carry any sign and
/// enter through [`Weight::from_ratio`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Weight(BigRational);

impl Weight {
    /// Returns whether `text` matches the unsigned number grammar.
    pub fn is_valid_weight(text: &str) -> bool {
        numeric::is_valid_unsigned_text(text)
    }

    /// Wraps an exact value computed elsewhere, skipping the text grammar.
    pub fn from_ratio(value: BigRational) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigRational {
        &self.0
    }
}

impl FromStr for Weight {
    type Err = LedgerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        numeric::parse_unsigned(text).map(Self)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
