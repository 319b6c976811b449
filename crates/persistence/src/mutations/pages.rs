// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page and row mutations.
//!
//! Rows have no identity outside a page: saving a page deletes its stored
//! rows and inserts the current ones as new records.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use noble_ledger_domain::{PageId, PageRecord, RowRecord};
use tracing::{debug, info};

use crate::diesel_schema::{pages, products};
use crate::error::PersistenceError;

/// Inserts the page, or updates its date and title if the id is stored.
///
/// Updating in place keeps the page's insertion position and its rows.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_page(conn: &mut SqliteConnection, page: &PageRecord) -> Result<(), PersistenceError> {
    let page_id: String = page.id.to_string();

    diesel::insert_into(pages::table)
        .values((
            pages::page_id.eq(&page_id),
            pages::date.eq(&page.date),
            pages::title.eq(&page.title),
        ))
        .on_conflict(pages::page_id)
        .do_update()
        .set((
            pages::date.eq(&page.date),
            pages::title.eq(&page.title),
            pages::updated_at.eq(diesel::dsl::sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    debug!(%page_id, "Upserted page");
    Ok(())
}

/// Deletes every row stored for the page.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_rows(conn: &mut SqliteConnection, page_id: PageId) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(products::table)
        .filter(products::page_id.eq(page_id.to_string()))
        .execute(conn)?;

    debug!(%page_id, deleted, "Deleted rows");
    Ok(deleted)
}

/// Inserts rows for the page as new records.
///
/// The rows are written in one transaction, in the order given.
///
/// # Errors
///
/// Returns an error if any insert fails; none of the rows are kept.
pub fn insert_rows(
    conn: &mut SqliteConnection,
    page_id: PageId,
    rows: &[RowRecord],
) -> Result<usize, PersistenceError> {
    let page_key: String = page_id.to_string();

    let inserted: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut inserted: usize = 0;
        for row in rows {
            inserted += diesel::insert_into(products::table)
                .values((
                    products::page_id.eq(&page_key),
                    products::product_name.eq(&row.product_name),
                    products::original_price.eq(row.original_price.amount()),
                    products::price_sold.eq(row.price_sold.amount()),
                    products::sold.eq(row.sold),
                ))
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    info!(%page_id, inserted, "Inserted rows");
    Ok(inserted)
}

/// Deletes the page metadata. Stored rows go with it.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_page(conn: &mut SqliteConnection, page_id: PageId) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(pages::table)
        .filter(pages::page_id.eq(page_id.to_string()))
        .execute(conn)?;

    info!(%page_id, deleted, "Deleted page");
    Ok(())
}
