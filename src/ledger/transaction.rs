use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::expense::Expense;
use super::weight::Weight;
use crate::errors::LedgerError;
use crate::person::Name;

/// Free-form label attached to a transaction. Must begin with a
/// non-whitespace character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    /// Returns whether `text` is acceptable as a description.
    pub fn is_valid_description(text: &str) -> bool {
        text.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn new(text: impl Into<String>) -> Result<Self, LedgerError> {
        let text = text.into();
        if !Self::is_valid_description(&text) {
            return Err(LedgerError::InvalidDescription(text));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instant a transaction was recorded. Used to identify and order
/// transactions, not for business validity.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

/// An immutable record of one payment made on behalf of a group, split among
/// participants by weight.
///
/// Construction only checks that every field is present and the expense set
/// is non-empty. Cross-field business validation lives in the predicates
/// ([`is_relevant`](Self::is_relevant), [`is_positive`](Self::is_positive),
/// [`is_known`](Self::is_known), [`has_no_duplicates`](Self::has_no_duplicates)),
/// which callers must consult before trusting the portion computations.
///
/// "Edits" never mutate in place; [`remove_person`](Self::remove_person)
/// builds a replacement record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    amount: Amount,
    description: Description,
    payee_name: Name,
    expenses: HashSet<Expense>,
    timestamp: Timestamp,
}

impl Transaction {
    /// Builds a transaction stamped with the current instant.
    pub fn new(
        amount: Amount,
        description: Description,
        payee_name: Name,
        expenses: HashSet<Expense>,
    ) -> Result<Self, LedgerError> {
        Self::with_timestamp(amount, description, payee_name, expenses, Timestamp::now())
    }

    /// Builds a transaction with an explicit timestamp.
    pub fn with_timestamp(
        amount: Amount,
        description: Description,
        payee_name: Name,
        expenses: HashSet<Expense>,
        timestamp: Timestamp,
    ) -> Result<Self, LedgerError> {
        if expenses.is_empty() {
            return Err(LedgerError::NoExpenses);
        }
        Ok(Self {
            amount,
            description,
            payee_name,
            expenses,
            timestamp,
        })
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn payee_name(&self) -> &Name {
        &self.payee_name
    }

    pub fn expenses(&self) -> &HashSet<Expense> {
        &self.expenses
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns whether the transaction relates both the ledger owner and at
    /// least one real (non-reserved) participant.
    pub fn is_relevant(&self) -> bool {
        let participants = self.all_involved_person_names();
        participants.contains(&Name::Myself)
            && participants.iter().any(|name| !name.is_reserved())
    }

    /// Returns whether the amount and every expense weight are strictly
    /// positive. Portions are only well-defined when this holds.
    pub fn is_positive(&self) -> bool {
        self.amount.value().is_positive()
            && self
                .expenses
                .iter()
                .all(|expense| expense.weight().value().is_positive())
    }

    /// Returns whether everyone involved is known: the payee is the ledger
    /// owner or appears in `valid_names`, and every expense participant
    /// appears in `valid_names` or is reserved.
    pub fn is_known(&self, valid_names: &HashSet<Name>) -> bool {
        if self.payee_name != Name::Myself && !valid_names.contains(&self.payee_name) {
            return false;
        }
        self.expenses.iter().all(|expense| {
            valid_names.contains(expense.person_name()) || expense.person_name().is_reserved()
        })
    }

    /// Returns whether no two expenses share a participant name.
    pub fn has_no_duplicates(&self) -> bool {
        let distinct: HashSet<&Name> = self.expenses.iter().map(Expense::person_name).collect();
        distinct.len() == self.expenses.len()
    }

    /// Returns whether all validity predicates hold.
    pub fn is_valid(&self, valid_names: &HashSet<Name>) -> bool {
        self.is_relevant()
            && self.is_positive()
            && self.is_known(valid_names)
            && self.has_no_duplicates()
    }

    /// Builds a replacement transaction with `target` folded into the
    /// [`Name::Others`] bucket.
    ///
    /// The payee becomes `Others` if it matched `target`. Expenses belonging
    /// to `target` or already belonging to `Others` are removed and their
    /// weights summed; the summed weight re-enters as a single `Others`
    /// expense only when it is strictly positive. Total weight mass is
    /// preserved. Fails with [`LedgerError::NoExpenses`] when the merge
    /// leaves nothing behind.
    pub fn remove_person(&self, target: &Name) -> Result<Self, LedgerError> {
        let payee_name = if &self.payee_name == target {
            Name::Others
        } else {
            self.payee_name.clone()
        };

        let mut expenses = HashSet::new();
        let mut merged = BigRational::zero();
        for expense in &self.expenses {
            if expense.person_name() == target || expense.person_name() == &Name::Others {
                merged += expense.weight().value();
            } else {
                expenses.insert(expense.clone());
            }
        }
        if merged.is_positive() {
            expenses.insert(Expense::new(Name::Others, Weight::from_ratio(merged)));
        }
        tracing::debug!(person = %target, "merged removed participant into Others");

        Self::with_timestamp(
            self.amount.clone(),
            self.description.clone(),
            payee_name,
            expenses,
            self.timestamp,
        )
    }

    /// Returns the exact fraction of the total amount attributable to
    /// `person_name`'s share: the sum over their expenses of
    /// `weight * amount / total_weight`, or zero when they hold no expense.
    ///
    /// Fails with [`LedgerError::DivisionByZero`] when a share exists but the
    /// total weight is zero; check [`is_positive`](Self::is_positive) first.
    pub fn portion(&self, person_name: &Name) -> Result<BigRational, LedgerError> {
        let total = self.total_weight();
        let mut portion = BigRational::zero();
        for expense in self
            .expenses
            .iter()
            .filter(|expense| expense.person_name() == person_name)
        {
            if total.is_zero() {
                return Err(LedgerError::DivisionByZero(
                    "total weight of the transaction is zero".into(),
                ));
            }
            portion += expense.weight().value() * self.amount.value() / &total;
        }
        Ok(portion)
    }

    /// Returns every expense participant mapped to their portion.
    ///
    /// With duplicate participant names the later entry wins; callers are
    /// expected to have checked [`has_no_duplicates`](Self::has_no_duplicates).
    pub fn all_portions(&self) -> Result<HashMap<Name, BigRational>, LedgerError> {
        let total = self.total_weight();
        if total.is_zero() {
            return Err(LedgerError::DivisionByZero(
                "total weight of the transaction is zero".into(),
            ));
        }
        let mut portions = HashMap::with_capacity(self.expenses.len());
        for expense in &self.expenses {
            portions.insert(
                expense.person_name().clone(),
                expense.weight().value() * self.amount.value() / &total,
            );
        }
        Ok(portions)
    }

    /// Returns `person_name`'s net obligation toward the ledger owner from
    /// this transaction.
    ///
    /// Positive means `person_name` owes the owner, negative means the owner
    /// owes `person_name`, zero means no net obligation:
    /// - zero when `person_name` is neither the payee nor the owner;
    /// - zero when the owner paid and `person_name` is the owner (one cannot
    ///   owe oneself);
    /// - the negated owner portion when `person_name` is the payee;
    /// - otherwise the owner paid, and `person_name` owes their own portion.
    pub fn portion_owed(&self, person_name: &Name) -> Result<BigRational, LedgerError> {
        if &self.payee_name != person_name && self.payee_name != Name::Myself {
            return Ok(BigRational::zero());
        }
        if self.payee_name == Name::Myself && person_name == &Name::Myself {
            return Ok(BigRational::zero());
        }
        if &self.payee_name == person_name {
            return Ok(-self.portion(&Name::Myself)?);
        }
        self.portion(person_name)
    }

    /// Returns the payee plus every expense participant.
    pub fn all_involved_person_names(&self) -> HashSet<Name> {
        let mut names: HashSet<Name> = self
            .expenses
            .iter()
            .map(|expense| expense.person_name().clone())
            .collect();
        names.insert(self.payee_name.clone());
        names
    }

    /// Returns whether `person_name` appears as payee or participant.
    pub fn is_person_involved(&self, person_name: &Name) -> bool {
        self.all_involved_person_names().contains(person_name)
    }

    /// Field-wise sameness check, the named alternative to `==` for callers
    /// that want equality decoupled from object identity.
    pub fn is_same_transaction(&self, other: &Transaction) -> bool {
        self.amount == other.amount
            && self.description == other.description
            && self.payee_name == other.payee_name
            && self.expenses == other.expenses
            && self.timestamp == other.timestamp
    }

    fn total_weight(&self) -> BigRational {
        self.expenses
            .iter()
            .fold(BigRational::zero(), |acc, expense| {
                acc + expense.weight().value()
            })
    }
}

/// Hash covers amount, description, payee and expenses; the timestamp is
/// deliberately left out, matching the equality-vs-hash asymmetry of the
/// record's design. Equal transactions still hash equally.
impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.description.hash(state);
        self.payee_name.hash(state);
        // Order-independent combination: the expense set has no fixed
        // iteration order.
        let mut combined: u64 = 0;
        for expense in &self.expenses {
            let mut hasher = DefaultHasher::new();
            expense.hash(&mut hasher);
            combined ^= hasher.finish();
        }
        combined.hash(state);
    }
}

/// Natural order is most recent first.
impl Ord for Transaction {
    fn cmp(&self, other: &Self) -> Ordering {
        other.timestamp.cmp(&self.timestamp)
    }
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
