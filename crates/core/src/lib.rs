//! PetCare Companion Core - Domain types and state store.
//!
//! This crate provides the types shared by every PetCare Companion component:
//! - `storefront` - The companion site (rendering, event routing, toasts)
//! - `cli` - Command-line tools for preferences, catalog and newsletter
//!
//! # Architecture
//!
//! The core crate contains only data and pure operations - no I/O, no HTTP,
//! no persistence. This keeps it lightweight and fully testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, step numbers and the theme
//! - [`catalog`] - Products, categories and filtering
//! - [`pets`] - Pet-care guides
//! - [`grooming`] - Grooming walkthrough steps
//! - [`notifications`] - Notification panel entries
//! - [`seed`] - Fixed seed content
//! - [`store`] - The state store and its selection pointers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod grooming;
pub mod notifications;
pub mod pets;
pub mod seed;
pub mod store;
pub mod types;

pub use catalog::{Catalog, CatalogError, CategoryFilter, Product, ProductCategory};
pub use grooming::GroomingStep;
pub use notifications::Notification;
pub use pets::{ChecklistItem, PetGuide, PetKind};
pub use store::{Store, StoreContent, StoreError};
pub use types::*;
