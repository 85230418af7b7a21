//! Fungible token quantities.
//!
//! An [`Asset`] is a signed integer amount expressed in the smallest unit of a
//! token together with the token's [`Symbol`] (ticker code and decimal
//! precision). The human readable form places the decimal point according to
//! the precision, e.g. `"1.00000000 WAX"` is `100_000_000` units of an
//! 8-decimal token. An [`ExtendedAsset`] additionally names the token contract
//! that issues the symbol.

use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Uint128};

/// Highest supported decimal precision
pub const MAX_PRECISION: u8 = 18;

/// Longest supported ticker code (matches the CW20 symbol limit)
pub const MAX_SYMBOL_LEN: usize = 12;

// ============================================================================
// Symbol
// ============================================================================

/// Token ticker code plus decimal precision
#[cw_serde]
pub struct Symbol {
    /// Ticker code, e.g. "WAX"
    pub code: String,
    /// Number of decimal places of the smallest unit
    pub precision: u8,
}

impl Symbol {
    pub fn new(code: impl Into<String>, precision: u8) -> Self {
        Self {
            code: code.into(),
            precision,
        }
    }

    /// A symbol is valid when its code is 1-12 ASCII letters, digits or `-`
    /// and its precision does not exceed [`MAX_PRECISION`].
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
            && self.code.len() <= MAX_SYMBOL_LEN
            && self
                .code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && self.precision <= MAX_PRECISION
    }

    /// Render `units` smallest units with this symbol's precision, e.g.
    /// `"1.00000000 WAX"`.
    pub fn format_units(&self, units: u128) -> String {
        let precision = u32::from(self.precision);
        match 10u128.checked_pow(precision) {
            Some(unit) if precision > 0 => format!(
                "{}.{:0width$} {}",
                units / unit,
                units % unit,
                self.code,
                width = precision as usize
            ),
            _ => format!("{} {}", units, self.code),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

// ============================================================================
// Asset
// ============================================================================

/// Token quantity in smallest units
#[cw_serde]
pub struct Asset {
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    /// Largest representable magnitude, 2^62 - 1
    pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    pub fn is_amount_within_range(&self) -> bool {
        (-Self::MAX_AMOUNT..=Self::MAX_AMOUNT).contains(&self.amount)
    }

    pub fn is_valid(&self) -> bool {
        self.is_amount_within_range() && self.symbol.is_valid()
    }

    /// Amount as an unsigned CW20 amount. Negative amounts are rejected.
    pub fn to_uint128(&self) -> StdResult<Uint128> {
        u128::try_from(self.amount)
            .map(Uint128::new)
            .map_err(|_| StdError::generic_err(format!("negative amount: {}", self)))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let units = u128::from(self.amount.unsigned_abs());
        write!(f, "{}{}", sign, self.symbol.format_units(units))
    }
}

impl FromStr for Asset {
    type Err = StdError;

    /// Parse `"<amount> <CODE>"`; the number of fractional digits sets the precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, code) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| StdError::parse_err("Asset", "expected \"<amount> <symbol>\""))?;

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(StdError::parse_err("Asset", format!("invalid amount: {}", number)));
        }

        let precision = u8::try_from(frac.len())
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(|| StdError::parse_err("Asset", "precision too high"))?;

        let magnitude = format!("{}{}", whole, frac)
            .parse::<i128>()
            .map_err(|e| StdError::parse_err("Asset", e.to_string()))?;
        let signed = if negative { -magnitude } else { magnitude };
        let amount = i64::try_from(signed)
            .map_err(|_| StdError::parse_err("Asset", "amount overflows i64"))?;

        let symbol = Symbol::new(code.trim(), precision);
        if !symbol.is_valid() {
            return Err(StdError::parse_err("Asset", format!("invalid symbol: {}", code)));
        }

        Ok(Asset::new(amount, symbol))
    }
}

// ============================================================================
// Extended Asset
// ============================================================================

/// Asset qualified by the token contract that issues it
#[cw_serde]
pub struct ExtendedAsset {
    /// CW20 token contract address
    pub contract: Addr,
    pub quantity: Asset,
}

impl ExtendedAsset {
    pub fn new(contract: Addr, quantity: Asset) -> Self {
        Self { contract, quantity }
    }
}

impl fmt::Display for ExtendedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.quantity, self.contract)
    }
}
