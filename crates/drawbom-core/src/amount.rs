//! Quantities attached to BOM records.
//!
//! An [`Amount`] is either an exact integer or a real number. Shapes without
//! an explicit amount count as [`Amount::ONE`]; explicit amounts are parsed
//! as reals and folded back into integers by [`Amount::normalized`] once all
//! contributions have been summed.
//!
//! Parsing refuses non-finite values such as `nan` and `inf`, which a plain
//! float conversion accepts. Reals print in positional notation (`0.00001`,
//! not `1e-5`).

use std::{
    fmt,
    ops::{Add, AddAssign},
    str::FromStr,
};

use thiserror::Error;

/// Errors produced when parsing an [`Amount`] from attribute text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("`{0}` is not a number")]
    Invalid(String),

    #[error("`{0}` is not a finite number")]
    NonFinite(String),
}

/// A BOM quantity.
///
/// Integer arithmetic stays exact until it would overflow, at which point the
/// sum degrades to a real. Any sum involving a real is real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// A whole quantity.
    Integer(i64),
    /// A quantity with a (possibly zero) fractional part.
    Real(f64),
}

impl Amount {
    /// The amount contributed by a shape that carries no amount attribute.
    pub const ONE: Amount = Amount::Integer(1);

    /// Returns the amount as a floating point value.
    pub fn as_f64(self) -> f64 {
        match self {
            Amount::Integer(value) => value as f64,
            Amount::Real(value) => value,
        }
    }

    /// Returns `true` if this amount is held as an integer.
    pub fn is_integer(self) -> bool {
        matches!(self, Amount::Integer(_))
    }

    /// Converts a real with no fractional part into [`Amount::Integer`].
    ///
    /// Reals that carry a fraction, or whose magnitude does not fit into an
    /// `i64`, are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawbom_core::amount::Amount;
    /// assert_eq!(Amount::Real(4.0).normalized(), Amount::Integer(4));
    /// assert_eq!(Amount::Real(4.5).normalized(), Amount::Real(4.5));
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            Amount::Real(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Amount::Integer(value as i64)
            }
            other => other,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Integer(0)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Integer(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Real(value)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Integer(lhs), Amount::Integer(rhs)) => lhs
                .checked_add(rhs)
                .map(Amount::Integer)
                .unwrap_or_else(|| Amount::Real(lhs as f64 + rhs as f64)),
            (lhs, rhs) => Amount::Real(lhs.as_f64() + rhs.as_f64()),
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses attribute text as a real amount.
    ///
    /// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseAmountError::Invalid(s.to_string()))?;

        if !value.is_finite() {
            return Err(ParseAmountError::NonFinite(s.to_string()));
        }

        Ok(Amount::Real(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(value) => write!(f, "{value}"),
            Amount::Real(value) => write!(f, "{value}"),
        }
    }
}
