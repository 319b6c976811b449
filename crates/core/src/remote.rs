// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remote store contract.
//!
//! Any backing store that can answer these calls can sit behind the ledger.
//! The store owns durable identity for pages, catalog products, audits, and
//! items; row identity never crosses this boundary.

use noble_ledger_audit::AuditRecord;
use noble_ledger_domain::{
    CatalogProduct, CatalogProductId, Item, ItemId, ItemPatch, NewCatalogProduct, NewItem,
    PageId, PageRecord, RowRecord, parse_date_label,
};
use std::cmp::Ordering;

/// CRUD access to the tables behind the ledger.
///
/// Calls block until the store answers. None of them are retried.
pub trait RemoteStore {
    /// The store's error type.
    type Error: std::fmt::Display;

    /// Returns all page metadata in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_pages(&mut self) -> Result<Vec<PageRecord>, Self::Error>;

    /// Returns one page's metadata, if stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_page(&mut self, page_id: PageId) -> Result<Option<PageRecord>, Self::Error>;

    /// Returns a page's rows in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_rows(&mut self, page_id: PageId) -> Result<Vec<RowRecord>, Self::Error>;

    /// Inserts the page, or updates its date and title if the id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_page(&mut self, page: &PageRecord) -> Result<(), Self::Error>;

    /// Deletes every row stored for the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_rows(&mut self, page_id: PageId) -> Result<(), Self::Error>;

    /// Inserts rows for the page as new records, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_rows(&mut self, page_id: PageId, rows: &[RowRecord]) -> Result<usize, Self::Error>;

    /// Deletes the page metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_page(&mut self, page_id: PageId) -> Result<(), Self::Error>;

    /// Returns every catalog product in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_catalog_products(&mut self) -> Result<Vec<CatalogProduct>, Self::Error>;

    /// Stores a new catalog product and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_catalog_product(
        &mut self,
        product: &NewCatalogProduct,
    ) -> Result<CatalogProduct, Self::Error>;

    /// Inserts or replaces a catalog product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_catalog_product(&mut self, product: &CatalogProduct) -> Result<(), Self::Error>;

    /// Deletes a catalog product.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_catalog_product(&mut self, product_id: CatalogProductId)
    -> Result<(), Self::Error>;

    /// Stores an audit record and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_audit(&mut self, record: &AuditRecord) -> Result<AuditRecord, Self::Error>;

    /// Returns every stored audit record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_audits(&mut self) -> Result<Vec<AuditRecord>, Self::Error>;

    /// Returns every item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_items(&mut self) -> Result<Vec<Item>, Self::Error>;

    /// Stores a new item and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_item(&mut self, item: &NewItem) -> Result<Item, Self::Error>;

    /// Applies a partial update and returns the updated item, or `None`
    /// if no item has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_item(&mut self, item_id: ItemId, patch: &ItemPatch)
    -> Result<Option<Item>, Self::Error>;

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_item(&mut self, item_id: ItemId) -> Result<(), Self::Error>;
}

/// The order in which fetched pages are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrder {
    /// Keep the store's insertion order.
    #[default]
    Stored,
    /// Newest date label first. Labels that are not `DD/MM/YYYY` go last,
    /// in store order.
    DateDescending,
}

impl PageOrder {
    /// Sorts fetched page metadata in place.
    pub fn sort(self, pages: &mut [PageRecord]) {
        match self {
            Self::Stored => {}
            Self::DateDescending => pages.sort_by(|a, b| {
                match (parse_date_label(&a.date), parse_date_label(&b.date)) {
                    (Some(a), Some(b)) => b.cmp(&a),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }),
        }
    }
}
