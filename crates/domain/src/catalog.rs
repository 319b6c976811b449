// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog-variant products.
//!
//! A catalog product keeps a running list of individual sale prices and a
//! remaining-stock counter instead of a single sold flag.

use serde::{Deserialize, Serialize};

/// Identifies a catalog product. Assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogProductId(i64);

impl CatalogProductId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CatalogProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCatalogProduct {
    pub name: String,
    /// The listed (original) price.
    pub price: f64,
    pub quantity_available: u32,
}

/// A stocked product with its sale history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: CatalogProductId,
    pub name: String,
    /// The listed (original) price.
    pub price: f64,
    /// Units still in stock.
    pub quantity_available: u32,
    /// Every recorded sale price, oldest first.
    pub sold_prices: Vec<f64>,
}

impl CatalogProduct {
    /// Creates a stored product with no sales.
    #[must_use]
    pub fn from_new(id: CatalogProductId, product: NewCatalogProduct) -> Self {
        Self {
            id,
            name: product.name,
            price: product.price,
            quantity_available: product.quantity_available,
            sold_prices: Vec::new(),
        }
    }

    /// Number of recorded sales.
    #[must_use]
    pub fn quantity_sold(&self) -> usize {
        self.sold_prices.len()
    }

    /// Sum of recorded sale prices.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.sold_prices.iter().sum()
    }
}
