//! Product catalog.
//!
//! The catalog is filled once at startup and never mutated afterwards.
//! Filtering by category is a pure projection that preserves catalog order.

use core::fmt;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Product categories offered in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Food,
    Toys,
    Grooming,
    Health,
}

impl ProductCategory {
    /// All categories in shop-bar order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Toys, Self::Grooming, Self::Health];

    /// Key used in `data-category` attributes and query strings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Toys => "toys",
            Self::Grooming => "grooming",
            Self::Health => "health",
        }
    }

    /// Human label for category buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Toys => "Toys",
            Self::Grooming => "Grooming",
            Self::Health => "Health",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned for an unrecognised category key.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Active shop filter: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    /// Key used in markup and query strings (`all` or a category key).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.key(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// A product listed in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub price: Price,
    /// Pre-discount price, shown struck through. Always above `price`.
    pub old_price: Option<Price>,
    pub image: String,
    pub badge: Option<String>,
    pub description: String,
}

/// Errors detected while assembling a catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product's old price is not strictly above its current price.
    #[error("product {id} old price {old_price} must exceed price {price}")]
    OldPriceNotHigher {
        id: ProductId,
        price: Price,
        old_price: Price,
    },
}

/// An ordered, validated list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and the old-price rule.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on the first product that breaks an invariant.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if let Some(old_price) = product.old_price
                && old_price <= product.price
            {
                return Err(CatalogError::OldPriceNotHigher {
                    id: product.id,
                    price: product.price,
                    old_price,
                });
            }
        }
        Ok(Self { products })
    }

    /// Wrap a product list known to satisfy the catalog invariants.
    pub(crate) const fn from_trusted(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
