// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use noble_ledger_audit::{AuditRecord, ProductSummary};
use noble_ledger_domain::{CatalogProduct, month_label, validate_products_present};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::CoreError;

/// Freezes the catalog's sales into a monthly audit record.
///
/// For every product, the number of recorded sale prices becomes
/// `quantity_sold`, their sum becomes `total_revenue`, and the stock
/// counter becomes `quantity_remaining`. The record is labelled with the
/// month and year of `now`.
///
/// The returned record is not stored; see `sync::archive_audit`.
///
/// # Errors
///
/// Returns `DomainError::NoProducts` if `products` is empty.
pub fn generate_audit(
    products: &[CatalogProduct],
    now: OffsetDateTime,
) -> Result<AuditRecord, CoreError> {
    validate_products_present(products)?;

    let products_summary: Vec<ProductSummary> = products
        .iter()
        .map(|product| ProductSummary {
            product_id: product.id,
            name: product.name.clone(),
            original_price: product.price,
            quantity_sold: product.quantity_sold(),
            quantity_remaining: product.quantity_available,
            total_revenue: product.total_revenue(),
        })
        .collect();

    let total_revenue: f64 = products_summary.iter().map(|s| s.total_revenue).sum();
    let created_at: String = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());

    Ok(AuditRecord::new(
        month_label(now),
        total_revenue,
        products_summary,
        created_at,
    ))
}
