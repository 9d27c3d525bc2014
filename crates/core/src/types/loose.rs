//! Loosely typed numeric references.
//!
//! Selections arrive from markup attributes (`data-step="3"`) and from
//! JSON-encoded forms where every value is a string, as well as from typed
//! callers (`3`). [`LooseNumber`] accepts both and normalizes them before any
//! lookup happens, so `3`, `"3"`, `" 03 "` and `"3.0"` all name the same item.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Errors produced while normalizing a loose number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LooseNumberError {
    /// Input was empty after trimming.
    #[error("reference is empty")]
    Empty,
    /// Input was not a whole, non-negative number.
    #[error("reference is not a whole number: {0}")]
    NotANumber(String),
}

/// A numeric reference given either as a number or as its string spelling.
///
/// Any JSON number deserializes. Numbers that are not whole or do not fit a
/// `u32` (`-1`, `2.5`, `1e12`) are kept in their text form and fail to
/// normalize, so they miss instead of rejecting the surrounding payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(u32),
    Text(String),
}

impl LooseNumber {
    /// Normalize to a whole number.
    ///
    /// # Errors
    ///
    /// Returns an error if the text form is empty or not a whole number.
    pub fn normalize(&self) -> Result<u32, LooseNumberError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(text) => parse_whole(text),
        }
    }

    /// Normalize and convert, treating failures as a miss.
    #[must_use]
    pub fn resolve<T: From<u32>>(&self) -> Option<T> {
        self.normalize().ok().map(T::from)
    }
}

impl From<u32> for LooseNumber {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for LooseNumber {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LooseNumber {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LooseNumberVisitor)
    }
}

struct LooseNumberVisitor;

impl Visitor<'_> for LooseNumberVisitor {
    type Value = LooseNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(u32::try_from(v).map_or_else(|_| LooseNumber::Text(v.to_string()), LooseNumber::Number))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(u32::try_from(v).map_or_else(|_| LooseNumber::Text(v.to_string()), LooseNumber::Number))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // 3.0 names the same item as 3; the text form normalizes it
        Ok(LooseNumber::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LooseNumber::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LooseNumber::Text(v))
    }
}

/// Parse the string spelling of a whole number.
pub(crate) fn parse_whole(s: &str) -> Result<u32, LooseNumberError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(LooseNumberError::Empty);
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        return Ok(n);
    }
    // "3.0" and "3.00" name the same item as "3"
    let not_a_number = || LooseNumberError::NotANumber(trimmed.to_string());
    let decimal = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;
    if decimal.is_sign_negative() || !decimal.fract().is_zero() {
        return Err(not_a_number());
    }
    decimal.to_u32().ok_or_else(not_a_number)
}
