// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use noble_ledger_domain::CatalogProductId;
use serde::{Deserialize, Serialize};

/// Per-product line of a monthly audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// The catalog product this line summarizes.
    pub product_id: CatalogProductId,
    /// The product name at audit time.
    pub name: String,
    /// The listed price at audit time.
    pub original_price: f64,
    /// Number of recorded sales.
    pub quantity_sold: usize,
    /// Units left in stock.
    pub quantity_remaining: u32,
    /// Sum of recorded sale prices.
    pub total_revenue: f64,
}

/// An archived monthly audit.
///
/// Records are frozen at creation: there are no setters, and nothing in
/// the ledger holds a reference back into the catalog it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    id: Option<i64>,
    month_label: String,
    total_revenue: f64,
    products_summary: Vec<ProductSummary>,
    created_at: String,
}

impl AuditRecord {
    /// Creates an audit record that has not been stored yet.
    ///
    /// # Arguments
    ///
    /// * `month_label` - The short month label, e.g. `Jan 2025`
    /// * `total_revenue` - The grand total across all products
    /// * `products_summary` - One line per product, in catalog order
    /// * `created_at` - Creation timestamp, RFC 3339
    #[must_use]
    pub const fn new(
        month_label: String,
        total_revenue: f64,
        products_summary: Vec<ProductSummary>,
        created_at: String,
    ) -> Self {
        Self {
            id: None,
            month_label,
            total_revenue,
            products_summary,
            created_at,
        }
    }

    /// Creates an audit record with the id assigned by the store.
    #[must_use]
    pub const fn with_id(
        id: i64,
        month_label: String,
        total_revenue: f64,
        products_summary: Vec<ProductSummary>,
        created_at: String,
    ) -> Self {
        Self {
            id: Some(id),
            month_label,
            total_revenue,
            products_summary,
            created_at,
        }
    }

    /// Returns a copy carrying the stored id.
    #[must_use]
    pub fn stored_as(&self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn month_label(&self) -> &str {
        &self.month_label
    }

    #[must_use]
    pub const fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    #[must_use]
    pub fn products_summary(&self) -> &[ProductSummary] {
        &self.products_summary
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}
