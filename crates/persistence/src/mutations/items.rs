// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_domain::{Item, ItemId, ItemPatch, NewItem};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::items;
use crate::error::PersistenceError;
use crate::queries::find_item;

/// Columns touched by a partial update. `None` leaves a column alone.
#[derive(AsChangeset)]
#[diesel(table_name = items)]
struct ItemChangeset<'a> {
    name: Option<&'a str>,
    sold: Option<bool>,
    price: Option<Option<f64>>,
}

impl<'a> ItemChangeset<'a> {
    fn from_patch(patch: &'a ItemPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            sold: patch.sold,
            price: patch.price.map(|price| price.amount()),
        }
    }

    const fn is_empty(&self) -> bool {
        self.name.is_none() && self.sold.is_none() && self.price.is_none()
    }
}

/// Stores a new item and returns it with its id.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn insert_item(conn: &mut SqliteConnection, item: &NewItem) -> Result<Item, PersistenceError> {
    diesel::insert_into(items::table)
        .values((
            items::name.eq(&item.name),
            items::sold.eq(item.sold),
            items::price.eq(item.price.amount()),
            items::created_at.eq(&item.created_at),
        ))
        .execute(conn)?;

    let item_id: i64 = conn.get_last_insert_rowid()?;
    info!(item_id, name = %item.name, "Created item");

    Ok(Item {
        id: ItemId::new(item_id),
        name: item.name.clone(),
        sold: item.sold,
        price: item.price,
        created_at: item.created_at.clone(),
    })
}

/// Applies the fields set in `patch` and returns the updated item.
///
/// # Errors
///
/// Returns an error if the write fails.
/// Returns `Ok(None)` if the item does not exist.
pub fn update_item(
    conn: &mut SqliteConnection,
    item_id: ItemId,
    patch: &ItemPatch,
) -> Result<Option<Item>, PersistenceError> {
    let changes: ItemChangeset<'_> = ItemChangeset::from_patch(patch);

    // Diesel rejects an update with nothing to set.
    if !changes.is_empty() {
        let updated: usize = diesel::update(items::table)
            .filter(items::item_id.eq(item_id.value()))
            .set(&changes)
            .execute(conn)?;
        debug!(%item_id, updated, "Updated item");
    }

    find_item(conn, item_id)
}

/// Deletes an item, returning whether it existed.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_item(conn: &mut SqliteConnection, item_id: ItemId) -> Result<bool, PersistenceError> {
    let deleted: usize = diesel::delete(items::table)
        .filter(items::item_id.eq(item_id.value()))
        .execute(conn)?;

    info!(%item_id, deleted, "Deleted item");
    Ok(deleted > 0)
}
