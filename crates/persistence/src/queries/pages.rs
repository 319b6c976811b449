// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_domain::{PageId, PageRecord, RowRecord};
use tracing::debug;

use crate::data_models::{PageRow, ProductRow};
use crate::diesel_schema::{pages, products};
use crate::error::PersistenceError;

/// Lists every page in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored page id is malformed.
pub fn list_pages(conn: &mut SqliteConnection) -> Result<Vec<PageRecord>, PersistenceError> {
    let rows: Vec<PageRow> = pages::table
        .order(pages::page_seq.asc())
        .select(PageRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Listed pages");
    rows.into_iter().map(PageRow::into_record).collect()
}

/// Looks up a page by id.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the page is not stored.
pub fn find_page(
    conn: &mut SqliteConnection,
    page_id: PageId,
) -> Result<Option<PageRecord>, PersistenceError> {
    let result: Result<PageRow, diesel::result::Error> = pages::table
        .filter(pages::page_id.eq(page_id.to_string()))
        .select(PageRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_record().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists a page's rows in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_rows(
    conn: &mut SqliteConnection,
    page_id: PageId,
) -> Result<Vec<RowRecord>, PersistenceError> {
    let rows: Vec<ProductRow> = products::table
        .filter(products::page_id.eq(page_id.to_string()))
        .order(products::product_id.asc())
        .select(ProductRow::as_select())
        .load(conn)?;

    debug!(%page_id, count = rows.len(), "Listed rows");
    Ok(rows.into_iter().map(RowRecord::from).collect())
}
