//! Currency-tagged decimal amounts such as `"1.211 HIVE"` or
//! `"10343155.439830 VESTS"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;

/// Widest fraction whose scale still fits in an `i64` amount
pub const MAX_PRECISION: u8 = 18;

/// A balance parsed from its wire string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Amount in the smallest unit of the asset
    pub amount: i64,

    /// Digits after the decimal point
    pub precision: u8,

    /// Asset symbol exactly as sent (`HIVE`, `HBD`, `VESTS`, ...)
    pub symbol: String,
}

impl Asset {
    /// Amount as a floating point value, for display
    pub fn to_f64(&self) -> f64 {
        self.amount as f64 / 10f64.powi(i32::from(self.precision))
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl FromStr for Asset {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ClientError::Decode(format!("Invalid asset \"{}\"", raw));

        let (number, symbol) = raw.trim().split_once(' ').ok_or_else(invalid)?;
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (digits, ""),
        };
        if whole.is_empty() || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let precision = u8::try_from(fraction.len())
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(invalid)?;
        let magnitude: i64 = format!("{}{}", whole, fraction)
            .parse()
            .map_err(|_| invalid())?;

        Ok(Self {
            amount: if negative { -magnitude } else { magnitude },
            precision,
            symbol: symbol.to_string(),
        })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.unsigned_abs();
        if self.precision == 0 {
            return write!(f, "{}{} {}", sign, magnitude, self.symbol);
        }
        // at least one digit before the point
        let precision = usize::from(self.precision);
        let digits = format!("{:0width$}", magnitude, width = precision + 1);
        let (whole, fraction) = digits.split_at(digits.len() - precision);
        write!(f, "{}{}.{} {}", sign, whole, fraction, self.symbol)
    }
}
