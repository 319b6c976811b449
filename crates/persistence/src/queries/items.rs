// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_domain::{Item, ItemId};

use crate::data_models::ItemRow;
use crate::diesel_schema::items;
use crate::error::PersistenceError;

/// Lists every item in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_items(conn: &mut SqliteConnection) -> Result<Vec<Item>, PersistenceError> {
    let rows: Vec<ItemRow> = items::table
        .order(items::item_id.asc())
        .select(ItemRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Item::from).collect())
}

/// Looks up an item by id.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the item does not exist.
pub fn find_item(
    conn: &mut SqliteConnection,
    item_id: ItemId,
) -> Result<Option<Item>, PersistenceError> {
    let row: Option<ItemRow> = items::table
        .filter(items::item_id.eq(item_id.value()))
        .select(ItemRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Item::from))
}
