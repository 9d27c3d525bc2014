//! Grooming step numbering.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::loose::{LooseNumber, LooseNumberError, parse_whole};

/// A step reference as it arrives from markup or typed callers.
///
/// `3` and `"3"` select the same step.
pub type StepSelector = LooseNumber;

/// One-based position of a grooming step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNumber(u32);

impl StepNumber {
    /// The first step, active by default.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StepNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<StepNumber> for LooseNumber {
    fn from(number: StepNumber) -> Self {
        Self::Number(number.0)
    }
}

impl FromStr for StepNumber {
    type Err = LooseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_whole(s).map(Self)
    }
}
