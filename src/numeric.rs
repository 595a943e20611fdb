//! Exact rational arithmetic and the shared number grammar used by
//! [`Amount`](crate::ledger::Amount) and [`Weight`](crate::ledger::Weight).
//!
//! All engine math runs on [`BigRational`] so that split portions carry no
//! rounding drift; floating point never appears in the core.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, Zero};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::LedgerError;

// One decimal number: ASCII digits with an optional decimal point,
// whitespace tolerated leading, trailing, and around the point. The signed
// form allows a leading minus (whitespace tolerated after it as well).
// Digits are restricted to [0-9]; `\d` would also admit Unicode digits the
// parser below does not handle.
const UNSIGNED_DECIMAL: &str = r"\s*(?:[0-9]+\s*(?:\.\s*[0-9]*)?|\.\s*[0-9]+)\s*";
const SIGNED_DECIMAL: &str = r"\s*(?:-\s*)?(?:[0-9]+\s*(?:\.\s*[0-9]*)?|\.\s*[0-9]+)\s*";

static SIGNED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{d}(?:/{d})?$", d = SIGNED_DECIMAL)).unwrap()
});
static UNSIGNED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{d}(?:/{d})?$", d = UNSIGNED_DECIMAL)).unwrap()
});

/// Returns whether `text` is a decimal or `N/D` fraction, sign permitted.
pub fn is_valid_signed_text(text: &str) -> bool {
    SIGNED_RE.is_match(text)
}

/// Returns whether `text` is a decimal or `N/D` fraction without a sign.
pub fn is_valid_unsigned_text(text: &str) -> bool {
    UNSIGNED_RE.is_match(text)
}

/// Parses text matching the signed grammar into an exact rational.
pub fn parse_signed(text: &str) -> Result<BigRational, LedgerError> {
    if !is_valid_signed_text(text) {
        return Err(LedgerError::InvalidFormat(text.to_string()));
    }
    parse_checked(text)
}

/// Parses text matching the unsigned grammar into an exact rational.
pub fn parse_unsigned(text: &str) -> Result<BigRational, LedgerError> {
    if !is_valid_unsigned_text(text) {
        return Err(LedgerError::InvalidFormat(text.to_string()));
    }
    parse_checked(text)
}

fn parse_checked(text: &str) -> Result<BigRational, LedgerError> {
    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let denominator = parse_decimal(denominator);
            if denominator.is_zero() {
                return Err(LedgerError::DivisionByZero(format!(
                    "denominator of {text:?} is zero"
                )));
            }
            Ok(parse_decimal(numerator) / denominator)
        }
        None => Ok(parse_decimal(text)),
    }
}

/// Converts one already-validated decimal into a rational. Whitespace is
/// discarded and the fractional digits become a power-of-ten denominator.
fn parse_decimal(text: &str) -> BigRational {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, digits) = match compact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };
    let (int_digits, frac_digits) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };

    let mut numerator = BigInt::zero();
    for ch in int_digits.chars().chain(frac_digits.chars()) {
        numerator = numerator * 10u32 + u32::from(ch as u8 - b'0');
    }
    if negative {
        numerator = -numerator;
    }
    let denominator = pow(BigInt::from(10u32), frac_digits.len());

    BigRational::new(numerator, denominator)
}

/// Shorthand for an exact rational built from integer parts.
pub fn ratio(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// The rational zero.
pub fn zero() -> BigRational {
    BigRational::zero()
}
