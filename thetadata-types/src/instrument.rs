//! Instrument descriptors attached to response records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::enums::OptionRight;
use crate::error::ThetaError;

/// A single option contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OptionContract {
    /// Underlying root symbol, e.g. `SPXW`.
    pub symbol: String,
    /// Contract expiration date.
    pub expiration: NaiveDate,
    /// Strike price in dollars.
    pub strike: Decimal,
    /// Call or put.
    pub right: OptionRight,
}

impl OptionContract {
    /// Build a contract, validating the symbol and strike.
    ///
    /// # Errors
    /// Returns `InvalidParam` for an empty symbol or a non-positive strike.
    pub fn new(
        symbol: impl Into<String>,
        expiration: NaiveDate,
        strike: Decimal,
        right: OptionRight,
    ) -> Result<Self, ThetaError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ThetaError::invalid_param("option symbol must not be empty"));
        }
        if strike <= Decimal::ZERO {
            return Err(ThetaError::invalid_param(format!(
                "strike must be positive, got {strike}"
            )));
        }
        Ok(Self {
            symbol,
            expiration,
            strike,
            right,
        })
    }
}

impl std::fmt::Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ${} {}",
            self.symbol,
            self.expiration.format("%Y%m%d"),
            self.strike,
            self.right
        )
    }
}

/// A stock root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stock {
    /// Root symbol, e.g. `ZBRA`.
    pub symbol: String,
}

impl Stock {
    /// Build a stock descriptor.
    ///
    /// # Errors
    /// Returns `InvalidParam` for an empty symbol.
    pub fn new(symbol: impl Into<String>) -> Result<Self, ThetaError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ThetaError::invalid_param("stock symbol must not be empty"));
        }
        Ok(Self { symbol })
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// An index root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Index {
    /// Root symbol, e.g. `SPX`.
    pub symbol: String,
}

impl Index {
    /// Build an index descriptor.
    ///
    /// # Errors
    /// Returns `InvalidParam` for an empty symbol.
    pub fn new(symbol: impl Into<String>) -> Result<Self, ThetaError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ThetaError::invalid_param("index symbol must not be empty"));
        }
        Ok(Self { symbol })
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_symbol() {
        assert!(matches!(
            Stock::new(""),
            Err(ThetaError::InvalidParam { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_strike() {
        let exp = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
        assert!(OptionContract::new("SPXW", exp, Decimal::ZERO, OptionRight::Put).is_err());
        assert!(
            OptionContract::new("SPXW", exp, Decimal::from(6000), OptionRight::Put).is_ok()
        );
    }
}
