//! Conversions between display denominations and wei.

use crate::{
    error::{Error, Result},
    types::U256,
};
use std::{fmt, str::FromStr};

/// Ether denominations, by how many decimals they sit above wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// 1 wei
    Wei,
    /// 10^3 wei
    Kwei,
    /// 10^6 wei
    Mwei,
    /// 10^9 wei
    Gwei,
    /// 10^12 wei
    Szabo,
    /// 10^15 wei
    Finney,
    /// 10^18 wei
    Ether,
    /// 10^21 wei
    Kether,
    /// 10^24 wei
    Mether,
    /// 10^27 wei
    Gether,
}

impl Unit {
    /// Number of decimal places between this unit and wei.
    pub fn decimals(self) -> usize {
        match self {
            Unit::Wei => 0,
            Unit::Kwei => 3,
            Unit::Mwei => 6,
            Unit::Gwei => 9,
            Unit::Szabo => 12,
            Unit::Finney => 15,
            Unit::Ether => 18,
            Unit::Kether => 21,
            Unit::Mether => 24,
            Unit::Gether => 27,
        }
    }
}

/// Parses a non-negative decimal `amount` of `unit` into wei.
///
/// Digits below one wei must be zero; nothing is rounded.
pub fn to_wei(amount: &str, unit: Unit) -> Result<U256> {
    let invalid = || Error::InvalidAmount(format!("{:?} is not a valid {:?} amount", amount, unit));

    let trimmed = amount.trim();
    let (int, frac) = match trimmed.find('.') {
        Some(dot) => (&trimmed[..dot], &trimmed[dot + 1..]),
        None => (trimmed, ""),
    };
    if int.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let decimals = unit.decimals();
    let frac = if frac.len() > decimals {
        let (kept, dropped) = frac.split_at(decimals);
        if dropped.chars().any(|c| c != '0') {
            return Err(Error::InvalidAmount(format!(
                "{:?} has more than {} decimals for {:?}",
                amount, decimals, unit
            )));
        }
        kept
    } else {
        frac
    };

    let digits = format!("{}{}{}", int, frac, "0".repeat(decimals - frac.len()));
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits)
        .map_err(|_| Error::InvalidAmount(format!("{:?} {:?} does not fit in 256 bits", amount, unit)))
}

/// Renders `value` wei as an exact decimal amount of `unit`, without trailing zeros.
pub fn from_wei(value: U256, unit: Unit) -> String {
    let decimals = unit.decimals();
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (int, frac) = padded.split_at(padded.len() - decimals);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        int.to_string()
    } else {
        format!("{}.{}", int, frac)
    }
}

/// An amount held in wei and displayed in ether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ether(pub U256);

impl Ether {
    /// The amount in wei.
    pub fn wei(self) -> U256 {
        self.0
    }
}

impl From<U256> for Ether {
    fn from(wei: U256) -> Self {
        Ether(wei)
    }
}

impl FromStr for Ether {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_wei(s, Unit::Ether).map(Ether)
    }
}

impl fmt::Display for Ether {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", from_wei(self.0, Unit::Ether))
    }
}
