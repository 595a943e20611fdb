use std::fmt;

use serde::{Deserialize, Serialize};

use super::weight::Weight;
use crate::person::Name;

/// One participant's weighted share of a transaction — a single line item of
/// a split. Immutable once built; two expenses are equal iff both fields are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Expense {
    person_name: Name,
    weight: Weight,
}

impl Expense {
    pub fn new(person_name: Name, weight: Weight) -> Self {
        Self {
            person_name,
            weight,
        }
    }

    pub fn person_name(&self) -> &Name {
        &self.person_name
    }

    pub fn weight(&self) -> &Weight {
        &self.weight
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.person_name, self.weight)
    }
}
