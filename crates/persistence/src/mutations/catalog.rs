// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_domain::{CatalogProduct, CatalogProductId, NewCatalogProduct};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::stock_column;
use crate::diesel_schema::catalog_products;
use crate::error::PersistenceError;

/// Stores a new product with no recorded sales.
///
/// # Errors
///
/// Returns an error if the write fails or the stock count does not fit the
/// stored column.
pub fn insert_catalog_product(
    conn: &mut SqliteConnection,
    product: &NewCatalogProduct,
) -> Result<CatalogProduct, PersistenceError> {
    let quantity: i32 = stock_column(product.quantity_available)?;

    diesel::insert_into(catalog_products::table)
        .values((
            catalog_products::name.eq(&product.name),
            catalog_products::price.eq(product.price),
            catalog_products::quantity_available.eq(quantity),
            catalog_products::sold_prices_json.eq("[]"),
        ))
        .execute(conn)?;

    let id: i64 = conn.get_last_insert_rowid()?;
    info!(product_id = id, name = %product.name, "Created catalog product");

    Ok(CatalogProduct::from_new(
        CatalogProductId::new(id),
        product.clone(),
    ))
}

/// Writes a product by id, inserting it if absent.
///
/// # Errors
///
/// Returns an error if the write fails or the sale list cannot be encoded.
pub fn upsert_catalog_product(
    conn: &mut SqliteConnection,
    product: &CatalogProduct,
) -> Result<(), PersistenceError> {
    let quantity: i32 = stock_column(product.quantity_available)?;
    let sold_prices_json: String = serde_json::to_string(&product.sold_prices)?;

    diesel::insert_into(catalog_products::table)
        .values((
            catalog_products::catalog_product_id.eq(product.id.value()),
            catalog_products::name.eq(&product.name),
            catalog_products::price.eq(product.price),
            catalog_products::quantity_available.eq(quantity),
            catalog_products::sold_prices_json.eq(&sold_prices_json),
        ))
        .on_conflict(catalog_products::catalog_product_id)
        .do_update()
        .set((
            catalog_products::name.eq(&product.name),
            catalog_products::price.eq(product.price),
            catalog_products::quantity_available.eq(quantity),
            catalog_products::sold_prices_json.eq(&sold_prices_json),
        ))
        .execute(conn)?;

    debug!(product_id = %product.id, "Saved catalog product");
    Ok(())
}

/// Deletes a product.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_catalog_product(
    conn: &mut SqliteConnection,
    product_id: CatalogProductId,
) -> Result<(), PersistenceError> {
    diesel::delete(catalog_products::table)
        .filter(catalog_products::catalog_product_id.eq(product_id.value()))
        .execute(conn)?;

    info!(%product_id, "Deleted catalog product");
    Ok(())
}
