// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Ledger, RemoteStore, TransitionResult, apply};
use noble_ledger_audit::AuditRecord;
use noble_ledger_domain::{
    CatalogProduct, CatalogProductId, Item, ItemId, ItemPatch, NewCatalogProduct, NewItem,
    PageId, PageRecord, Price, RowId, RowRecord, RowUpdate,
};
use std::sync::{Arc, Mutex};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub const fn today() -> Date {
    date!(2025 - 06 - 23)
}

pub const fn now() -> OffsetDateTime {
    datetime!(2025-01-15 10:30:00 UTC)
}

/// Applies a command that is expected to change the ledger.
pub fn step(ledger: &Ledger, command: Command) -> Ledger {
    let result: TransitionResult = apply(ledger, command);
    assert!(result.changed, "command unexpectedly left the ledger as it was");
    result.new_state
}

/// Adds a row to the page and fills in every field.
pub fn add_filled_row(
    ledger: &Ledger,
    page_id: PageId,
    name: &str,
    original: &str,
    sold_for: &str,
    sold: bool,
) -> (Ledger, RowId) {
    let ledger: Ledger = step(ledger, Command::AddRow { page_id });
    let row_id: RowId = ledger.page(page_id).unwrap().rows.last().unwrap().id;
    let updates: [RowUpdate; 4] = [
        RowUpdate::ProductName(String::from(name)),
        RowUpdate::OriginalPrice(Price::parse(original)),
        RowUpdate::PriceSold(Price::parse(sold_for)),
        RowUpdate::Sold(sold),
    ];
    let ledger: Ledger = updates.into_iter().fold(ledger, |ledger, update| {
        apply(
            &ledger,
            Command::UpdateRow {
                page_id,
                row_id,
                update,
            },
        )
        .new_state
    });
    (ledger, row_id)
}

pub fn row_record(name: &str, original: f64, sold_for: Option<f64>, sold: bool) -> RowRecord {
    RowRecord {
        product_name: String::from(name),
        original_price: Price::new(original),
        price_sold: Price::from(sold_for),
        sold,
    }
}

pub fn product(id: i64, name: &str, quantity: u32, sold_prices: &[f64]) -> CatalogProduct {
    CatalogProduct {
        id: CatalogProductId::new(id),
        name: String::from(name),
        price: 10.0,
        quantity_available: quantity,
        sold_prices: sold_prices.to_vec(),
    }
}

pub fn item(id: i64, name: &str, sold: bool) -> Item {
    Item {
        id: ItemId::new(id),
        name: String::from(name),
        sold,
        price: Price::new(5.0),
        created_at: String::from("2025-06-23T10:00:00Z"),
    }
}

/// An in-memory `RemoteStore` that records every call and can be told to
/// fail a named operation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub pages: Vec<PageRecord>,
    pub rows: Vec<(PageId, RowRecord)>,
    pub products: Vec<CatalogProduct>,
    pub audits: Vec<AuditRecord>,
    pub items: Vec<Item>,
    pub calls: Vec<&'static str>,
    fail_on: Option<&'static str>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    pub fn fail_on(&mut self, operation: &'static str) {
        self.fail_on = Some(operation);
    }

    pub fn rows_for(&self, page_id: PageId) -> Vec<RowRecord> {
        self.rows
            .iter()
            .filter(|(id, _)| *id == page_id)
            .map(|(_, row)| row.clone())
            .collect()
    }

    fn call(&mut self, operation: &'static str) -> Result<(), String> {
        self.calls.push(operation);
        if self.fail_on == Some(operation) {
            return Err(format!("{operation} refused"));
        }
        Ok(())
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl RemoteStore for MemoryStore {
    type Error = String;

    fn select_pages(&mut self) -> Result<Vec<PageRecord>, String> {
        self.call("select_pages")?;
        Ok(self.pages.clone())
    }

    fn select_page(&mut self, page_id: PageId) -> Result<Option<PageRecord>, String> {
        self.call("select_page")?;
        Ok(self.pages.iter().find(|p| p.id == page_id).cloned())
    }

    fn select_rows(&mut self, page_id: PageId) -> Result<Vec<RowRecord>, String> {
        self.call("select_rows")?;
        Ok(self.rows_for(page_id))
    }

    fn upsert_page(&mut self, page: &PageRecord) -> Result<(), String> {
        self.call("upsert_page")?;
        match self.pages.iter_mut().find(|p| p.id == page.id) {
            Some(existing) => *existing = page.clone(),
            None => self.pages.push(page.clone()),
        }
        Ok(())
    }

    fn delete_rows(&mut self, page_id: PageId) -> Result<(), String> {
        self.call("delete_rows")?;
        self.rows.retain(|(id, _)| *id != page_id);
        Ok(())
    }

    fn insert_rows(&mut self, page_id: PageId, rows: &[RowRecord]) -> Result<usize, String> {
        self.call("insert_rows")?;
        self.rows
            .extend(rows.iter().map(|row| (page_id, row.clone())));
        Ok(rows.len())
    }

    fn delete_page(&mut self, page_id: PageId) -> Result<(), String> {
        self.call("delete_page")?;
        self.pages.retain(|p| p.id != page_id);
        Ok(())
    }

    fn select_catalog_products(&mut self) -> Result<Vec<CatalogProduct>, String> {
        self.call("select_catalog_products")?;
        Ok(self.products.clone())
    }

    fn insert_catalog_product(
        &mut self,
        product: &NewCatalogProduct,
    ) -> Result<CatalogProduct, String> {
        self.call("insert_catalog_product")?;
        let id: CatalogProductId = CatalogProductId::new(self.next_id());
        let stored: CatalogProduct = CatalogProduct::from_new(id, product.clone());
        self.products.push(stored.clone());
        Ok(stored)
    }

    fn upsert_catalog_product(&mut self, product: &CatalogProduct) -> Result<(), String> {
        self.call("upsert_catalog_product")?;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => self.products.push(product.clone()),
        }
        Ok(())
    }

    fn delete_catalog_product(&mut self, product_id: CatalogProductId) -> Result<(), String> {
        self.call("delete_catalog_product")?;
        self.products.retain(|p| p.id != product_id);
        Ok(())
    }

    fn insert_audit(&mut self, record: &AuditRecord) -> Result<AuditRecord, String> {
        self.call("insert_audit")?;
        let stored: AuditRecord = record.stored_as(self.next_id());
        self.audits.push(stored.clone());
        Ok(stored)
    }

    fn select_audits(&mut self) -> Result<Vec<AuditRecord>, String> {
        self.call("select_audits")?;
        Ok(self.audits.clone())
    }

    fn select_items(&mut self) -> Result<Vec<Item>, String> {
        self.call("select_items")?;
        Ok(self.items.clone())
    }

    fn insert_item(&mut self, item: &NewItem) -> Result<Item, String> {
        self.call("insert_item")?;
        let stored: Item = Item {
            id: ItemId::new(self.next_id()),
            name: item.name.clone(),
            sold: item.sold,
            price: item.price,
            created_at: item.created_at.clone(),
        };
        self.items.push(stored.clone());
        Ok(stored)
    }

    fn update_item(&mut self, item_id: ItemId, patch: &ItemPatch) -> Result<Option<Item>, String> {
        self.call("update_item")?;
        Ok(self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .map(|existing| {
                *existing = patch_item(existing, patch);
                existing.clone()
            }))
    }

    fn delete_item(&mut self, item_id: ItemId) -> Result<(), String> {
        self.call("delete_item")?;
        self.items.retain(|i| i.id != item_id);
        Ok(())
    }
}

/// What a store does with a partial update: unset fields keep their value.
fn patch_item(item: &Item, patch: &ItemPatch) -> Item {
    Item {
        id: item.id,
        name: patch.name.clone().unwrap_or_else(|| item.name.clone()),
        sold: patch.sold.unwrap_or(item.sold),
        price: patch.price.unwrap_or(item.price),
        created_at: item.created_at.clone(),
    }
}

/// A log sink for asserting on what the sync layer traces.
#[derive(Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    /// Runs `f` with debug logging written into this sink.
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let sink: Self = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
