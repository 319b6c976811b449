// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-backed remote store for the Noble Ventures ledger.
//!
//! `Persistence` answers every call of the `RemoteStore` contract against
//! five tables:
//!
//! - `pages`: page metadata keyed by the page's UUID
//! - `products`: rows of a page, deleted with their page
//! - `catalog_products`: stocked products with their recorded sale prices
//! - `monthly_audits`: archived monthly audits
//! - `items`: the flat item list
//!
//! Item writes are announced to subscribers of `subscribe_items`.
//!
//! ## Testing
//!
//! `new_in_memory` opens a private shared-cache in-memory database per
//! call, so tests never see each other's data.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use noble_ledger::RemoteStore;
use noble_ledger_audit::AuditRecord;
use noble_ledger_domain::{
    CatalogProduct, CatalogProductId, Item, ItemEvent, ItemId, ItemPatch, NewCatalogProduct,
    NewItem, PageId, PageRecord, RowRecord,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod live;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use live::ItemEventBroadcaster;

use backend::PersistenceBackend;
use backend::sqlite::JournalMode;

/// The `SQLite` store behind the ledger.
pub struct Persistence {
    conn: SqliteConnection,
    items: ItemEventBroadcaster,
}

impl Persistence {
    /// Creates a store backed by a fresh in-memory database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_ledger_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection =
            backend::sqlite::open(&shared_memory_url, JournalMode::Default)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self {
            conn,
            items: ItemEventBroadcaster::new(),
        })
    }

    /// Creates a store backed by a database file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::open(path_str, JournalMode::Wal)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self {
            conn,
            items: ItemEventBroadcaster::new(),
        })
    }

    /// Subscribes to item change notifications sent from now on.
    #[must_use]
    pub fn subscribe_items(&self) -> broadcast::Receiver<ItemEvent> {
        self.items.subscribe()
    }

    /// The broadcaster used for item change notifications.
    #[must_use]
    pub const fn item_events(&self) -> &ItemEventBroadcaster {
        &self.items
    }
}

impl RemoteStore for Persistence {
    type Error = PersistenceError;

    fn select_pages(&mut self) -> Result<Vec<PageRecord>, PersistenceError> {
        queries::list_pages(&mut self.conn)
    }

    fn select_page(&mut self, page_id: PageId) -> Result<Option<PageRecord>, PersistenceError> {
        queries::find_page(&mut self.conn, page_id)
    }

    fn select_rows(&mut self, page_id: PageId) -> Result<Vec<RowRecord>, PersistenceError> {
        queries::list_rows(&mut self.conn, page_id)
    }

    fn upsert_page(&mut self, page: &PageRecord) -> Result<(), PersistenceError> {
        mutations::upsert_page(&mut self.conn, page)
    }

    fn delete_rows(&mut self, page_id: PageId) -> Result<(), PersistenceError> {
        mutations::delete_rows(&mut self.conn, page_id).map(|_| ())
    }

    fn insert_rows(
        &mut self,
        page_id: PageId,
        rows: &[RowRecord],
    ) -> Result<usize, PersistenceError> {
        mutations::insert_rows(&mut self.conn, page_id, rows)
    }

    fn delete_page(&mut self, page_id: PageId) -> Result<(), PersistenceError> {
        mutations::delete_page(&mut self.conn, page_id)
    }

    fn select_catalog_products(&mut self) -> Result<Vec<CatalogProduct>, PersistenceError> {
        queries::list_catalog_products(&mut self.conn)
    }

    fn insert_catalog_product(
        &mut self,
        product: &NewCatalogProduct,
    ) -> Result<CatalogProduct, PersistenceError> {
        mutations::insert_catalog_product(&mut self.conn, product)
    }

    fn upsert_catalog_product(&mut self, product: &CatalogProduct) -> Result<(), PersistenceError> {
        mutations::upsert_catalog_product(&mut self.conn, product)
    }

    fn delete_catalog_product(
        &mut self,
        product_id: CatalogProductId,
    ) -> Result<(), PersistenceError> {
        mutations::delete_catalog_product(&mut self.conn, product_id)
    }

    fn insert_audit(&mut self, record: &AuditRecord) -> Result<AuditRecord, PersistenceError> {
        mutations::insert_audit(&mut self.conn, record)
    }

    fn select_audits(&mut self) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::list_audits(&mut self.conn)
    }

    fn select_items(&mut self) -> Result<Vec<Item>, PersistenceError> {
        queries::list_items(&mut self.conn)
    }

    fn insert_item(&mut self, item: &NewItem) -> Result<Item, PersistenceError> {
        let stored: Item = mutations::insert_item(&mut self.conn, item)?;
        self.items.broadcast(&ItemEvent::Insert {
            item: stored.clone(),
        });
        Ok(stored)
    }

    fn update_item(
        &mut self,
        item_id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, PersistenceError> {
        let updated: Option<Item> = mutations::update_item(&mut self.conn, item_id, patch)?;
        if let Some(item) = &updated {
            self.items.broadcast(&ItemEvent::Update { item: item.clone() });
        }
        Ok(updated)
    }

    fn delete_item(&mut self, item_id: ItemId) -> Result<(), PersistenceError> {
        if mutations::delete_item(&mut self.conn, item_id)? {
            self.items.broadcast(&ItemEvent::Delete { id: item_id });
        }
        Ok(())
    }
}
