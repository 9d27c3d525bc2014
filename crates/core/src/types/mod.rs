//! Core value types for PetCare Companion.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod loose;
pub mod price;
pub mod step;
pub mod theme;

pub use id::*;
pub use loose::{LooseNumber, LooseNumberError};
pub use price::{Price, PriceError};
pub use step::{StepNumber, StepSelector};
pub use theme::{Theme, UnknownTheme};
