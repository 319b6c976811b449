// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_domain::CatalogProduct;

use crate::data_models::CatalogProductRow;
use crate::diesel_schema::catalog_products;
use crate::error::PersistenceError;

/// Lists every catalog product in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn list_catalog_products(
    conn: &mut SqliteConnection,
) -> Result<Vec<CatalogProduct>, PersistenceError> {
    catalog_products::table
        .order(catalog_products::catalog_product_id.asc())
        .select(CatalogProductRow::as_select())
        .load(conn)?
        .into_iter()
        .map(CatalogProductRow::into_product)
        .collect()
}
