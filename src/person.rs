//! Participant identity, including the reserved bookkeeping names.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifies one participant in a transaction.
///
/// Alongside ordinary participants two reserved names exist: [`Name::Myself`]
/// is the ledger owner, and [`Name::Others`] is the anonymous bucket that
/// absorbs the shares of removed or unknown participants. Keeping them as
/// enum variants rules out collisions with real participant names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Name {
    Myself,
    Others,
    Person(String),
}

/// The closed set of reserved names.
pub static RESERVED_NAMES: Lazy<HashSet<Name>> =
    Lazy::new(|| HashSet::from([Name::Myself, Name::Others]));

impl Name {
    /// Creates an ordinary participant name.
    pub fn person(name: impl Into<String>) -> Self {
        Name::Person(name.into())
    }

    /// Returns whether this is one of the reserved bookkeeping names.
    pub fn is_reserved(&self) -> bool {
        RESERVED_NAMES.contains(self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Myself => write!(f, "Self"),
            Name::Others => write!(f, "Others"),
            Name::Person(name) => write!(f, "{name}"),
        }
    }
}
