//! # Money: Fixed-Point Amounts
//!
//! Every monetary value in the estimator is an [`Amount`]: an `i64` count of
//! minor units (fils, 1/100 of the currency unit). Rates and multipliers are
//! expressed in basis points (1/10 000). No floating point is involved
//! anywhere in a cost computation, which is what makes two estimates over the
//! same inputs byte-for-byte identical.
//!
//! ## Wire format
//!
//! Amounts serialize as decimal strings with exactly two fraction digits
//! (`"28000.00"`). Deserialization accepts such strings or plain integers
//! (interpreted as whole currency units). Float literals are rejected: a
//! catalog that says `base_cost: 9999.99` must quote the value.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Minor units per whole currency unit.
pub const MINOR_UNITS: i64 = 100;

/// Basis points representing a multiplier of exactly 1.
pub const BPS_ONE: u32 = 10_000;

/// A monetary amount in minor units of the (single) estimator currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Construct from minor units (fils).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Construct from whole currency units. Returns `None` on overflow.
    pub fn from_major(major: i64) -> Option<Self> {
        major.checked_mul(MINOR_UNITS).map(Self)
    }

    /// The amount in minor units.
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Whether this amount is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Whether this amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked multiplication by a count (e.g. number of visas).
    pub fn checked_mul(self, count: u32) -> Option<Amount> {
        self.0.checked_mul(i64::from(count)).map(Amount)
    }

    /// Scale by a multiplier expressed in basis points, rounding half away
    /// from zero to the nearest minor unit.
    ///
    /// `Amount(1_000_000).scale_bps(28_000)` is `Amount(2_800_000)`.
    pub fn scale_bps(self, bps: u32) -> Option<Amount> {
        let product = i128::from(self.0) * i128::from(bps);
        let divisor = i128::from(BPS_ONE);
        let half = divisor / 2;
        let rounded = if product >= 0 {
            (product + half) / divisor
        } else {
            (product - half) / divisor
        };
        i64::try_from(rounded).ok().map(Amount)
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(items: I) -> Option<Amount> {
        items
            .into_iter()
            .try_fold(Amount::ZERO, |acc, a| acc.checked_add(a))
    }

    /// Parse a decimal string into an amount.
    ///
    /// Handles `"10000"`, `"10000.5"`, `"10000.50"` and an optional leading
    /// minus sign. Thousands separators (`,` and `_`) are ignored. More than
    /// two fraction digits is rejected rather than silently truncated.
    pub fn parse(s: &str) -> Result<Amount, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidAmount {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
        if cleaned.is_empty() {
            return Err(invalid("empty"));
        }

        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        let (int_str, frac_str) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if frac_str.contains('.') {
            return Err(invalid("more than one decimal point"));
        }
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(invalid("no digits"));
        }
        if !int_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("not a decimal number"));
        }
        if frac_str.len() > 2 {
            return Err(invalid("more than two fraction digits"));
        }

        let integer: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| invalid("out of range"))?
        };
        let frac: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac_str.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let magnitude = integer
            .checked_mul(MINOR_UNITS)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(|| invalid("out of range"))?;

        Ok(Amount(if negative { -magnitude } else { magnitude }))
    }

    /// Format with thousands separators for display: `12500.5` → `"12,500.50"`.
    pub fn to_grouped_string(self) -> String {
        let plain = self.to_string();
        let (sign, rest) = match plain.strip_prefix('-') {
            Some(r) => ("-", r),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{sign}{grouped}.{frac_part}")
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = MINOR_UNITS.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / unit, abs % unit)
    }
}

impl std::str::FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a decimal string such as \"12500.00\" or an integer number of whole units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::from_major(v).ok_or_else(|| E::custom(format!("amount {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(format!("amount {v} out of range")))?;
        self.visit_i64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Err(E::custom(ValidationError::FloatRejected(v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}
