// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reconciling in-memory state with the remote store.
//!
//! Every operation here either returns the new in-memory state or an
//! error; on error the caller keeps the state it already had. Nothing is
//! retried.
//!
//! ## Save is best effort
//!
//! `save_page` is three separate store calls: upsert the page metadata,
//! delete the page's stored rows, insert the current rows. A failure (or a
//! crash) between the delete and the insert leaves the page stored with no
//! rows. The error names the step that failed; callers may `load_page`
//! afterwards to see what the store actually holds.

use noble_ledger_audit::AuditRecord;
use noble_ledger_domain::{
    CatalogProductId, Item, ItemEvent, ItemId, ItemPatch, NewCatalogProduct, NewItem, Page,
    PageId, PageRecord, RowRecord, validate_item_name, validate_new_product,
};
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::apply::{apply, apply_catalog};
use crate::archive::generate_audit;
use crate::command::{CatalogCommand, Command, StoredPage};
use crate::error::SyncError;
use crate::items::apply_item_event;
use crate::remote::{PageOrder, RemoteStore};
use crate::state::{Catalog, Ledger, TransitionResult};

/// Maps a store error into a `SyncError`, logging it on the way.
fn remote<E: std::fmt::Display>(operation: &'static str) -> impl FnOnce(E) -> SyncError {
    move |err: E| {
        let message: String = err.to_string();
        warn!(operation, error = %message, "Remote operation failed");
        SyncError::Remote { operation, message }
    }
}

fn traced(result: TransitionResult) -> TransitionResult {
    result.trace();
    result
}

/// What a successful `save_page` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// The page that was saved.
    pub page_id: PageId,
    /// Number of rows written.
    pub rows_saved: usize,
}

/// Replaces the stored copy of a page with the in-memory one.
///
/// The metadata is upserted by id, then every stored row for the page is
/// deleted, then the in-memory rows are inserted as new records.
///
/// # Errors
///
/// Returns an error if:
/// - The page is not in the ledger (no store call is made)
/// - Any of the three store calls fails; later steps are not attempted
pub fn save_page<S: RemoteStore>(
    store: &mut S,
    ledger: &Ledger,
    page_id: PageId,
) -> Result<SaveReport, SyncError> {
    let page: &Page = ledger.page(page_id).ok_or(SyncError::PageNotFound(page_id))?;
    let record: PageRecord = page.record();
    let rows: Vec<RowRecord> = page.row_records();

    store.upsert_page(&record).map_err(remote("save page details"))?;
    store.delete_rows(page_id).map_err(remote("clear saved rows"))?;
    let rows_saved: usize = store
        .insert_rows(page_id, &rows)
        .map_err(remote("save rows"))?;

    info!(%page_id, rows_saved, "Saved page");
    Ok(SaveReport {
        page_id,
        rows_saved,
    })
}

/// Saves every page of the ledger, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `save_page` error.
pub fn save_all<S: RemoteStore>(
    store: &mut S,
    ledger: &Ledger,
) -> Result<Vec<SaveReport>, SyncError> {
    ledger
        .pages()
        .iter()
        .map(|page| save_page(store, ledger, page.id))
        .collect()
}

/// Fetches every stored page with its rows and installs them in the ledger.
///
/// Each fetched row gets a new local identity. If the store holds no pages,
/// the ledger ends up with a single blank page dated `today`.
///
/// # Errors
///
/// Returns an error if any store read fails; the ledger is not touched.
pub fn load_all<S: RemoteStore>(
    store: &mut S,
    ledger: &Ledger,
    order: PageOrder,
    today: Date,
) -> Result<TransitionResult, SyncError> {
    let mut records: Vec<PageRecord> = store.select_pages().map_err(remote("load pages"))?;
    order.sort(&mut records);

    let mut pages: Vec<StoredPage> = Vec::with_capacity(records.len());
    for record in records {
        let rows: Vec<RowRecord> = store
            .select_rows(record.id)
            .map_err(remote("load rows"))?;
        debug!(page_id = %record.id, rows = rows.len(), "Fetched page");
        pages.push(StoredPage { record, rows });
    }

    let result: TransitionResult =
        traced(apply(ledger, Command::ReplacePages { pages, today }));
    info!(pages = result.new_state.pages().len(), "Loaded ledger");
    Ok(result)
}

/// Fetches one stored page with its rows and installs it in the ledger.
///
/// # Errors
///
/// Returns an error if:
/// - The page is not in the store
/// - Any store read fails; the ledger is not touched
pub fn load_page<S: RemoteStore>(
    store: &mut S,
    ledger: &Ledger,
    page_id: PageId,
) -> Result<TransitionResult, SyncError> {
    let record: PageRecord = store
        .select_page(page_id)
        .map_err(remote("load page"))?
        .ok_or(SyncError::PageNotFound(page_id))?;
    let rows: Vec<RowRecord> = store.select_rows(page_id).map_err(remote("load rows"))?;

    Ok(traced(apply(
        ledger,
        Command::ReplacePage {
            page: StoredPage { record, rows },
        },
    )))
}

/// Deletes a page from the store and then from the ledger.
///
/// A declined confirmation makes no store call and leaves the ledger as it
/// was.
///
/// # Errors
///
/// Returns an error if:
/// - The page is not in the ledger (no store call is made)
/// - A store write fails; the ledger is not touched
pub fn delete_page<S: RemoteStore>(
    store: &mut S,
    ledger: &Ledger,
    page_id: PageId,
    confirmed: bool,
    today: Date,
) -> Result<TransitionResult, SyncError> {
    if ledger.page(page_id).is_none() {
        return Err(SyncError::PageNotFound(page_id));
    }

    let command: Command = Command::DeletePage {
        page_id,
        confirmed,
        today,
    };
    if !confirmed {
        return Ok(traced(apply(ledger, command)));
    }

    store.delete_rows(page_id).map_err(remote("delete rows"))?;
    store.delete_page(page_id).map_err(remote("delete page"))?;
    info!(%page_id, "Deleted page");

    Ok(traced(apply(ledger, command)))
}

/// Fetches the product catalog.
///
/// # Errors
///
/// Returns an error if the store read fails.
pub fn load_catalog<S: RemoteStore>(store: &mut S) -> Result<Catalog, SyncError> {
    let products = store
        .select_catalog_products()
        .map_err(remote("load products"))?;
    Ok(Catalog::new(products))
}

/// Writes every catalog product back to the store.
///
/// # Errors
///
/// Returns the first store write failure.
pub fn save_catalog<S: RemoteStore>(store: &mut S, catalog: &Catalog) -> Result<(), SyncError> {
    for product in &catalog.products {
        store
            .upsert_catalog_product(product)
            .map_err(remote("save product"))?;
    }
    info!(products = catalog.products.len(), "Saved catalog");
    Ok(())
}

/// Validates and stores a new product, then adds it to the catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The product's name or price is invalid (no store call is made)
/// - The store write fails
pub fn add_catalog_product<S: RemoteStore>(
    store: &mut S,
    catalog: &Catalog,
    product: &NewCatalogProduct,
) -> Result<Catalog, SyncError> {
    validate_new_product(product)?;

    let stored = store
        .insert_catalog_product(product)
        .map_err(remote("add product"))?;
    let transition = apply_catalog(catalog, CatalogCommand::AddProduct { product: stored })?;
    transition.trace();
    Ok(transition.new_catalog)
}

/// Records a sale and writes the updated product to the store.
///
/// # Errors
///
/// Returns an error if:
/// - The sale is rejected (non-positive price, out of stock, unknown
///   product); no store call is made
/// - The store write fails
pub fn record_sale<S: RemoteStore>(
    store: &mut S,
    catalog: &Catalog,
    product_id: CatalogProductId,
    price: f64,
) -> Result<Catalog, SyncError> {
    let transition = apply_catalog(catalog, CatalogCommand::RecordSale { product_id, price })?;
    transition.trace();

    if let Some(product) = transition.new_catalog.product(product_id) {
        store
            .upsert_catalog_product(product)
            .map_err(remote("record sale"))?;
    }

    Ok(transition.new_catalog)
}

/// Removes a product from the store and the catalog.
///
/// # Errors
///
/// Returns an error if the product is unknown or the store write fails.
pub fn remove_catalog_product<S: RemoteStore>(
    store: &mut S,
    catalog: &Catalog,
    product_id: CatalogProductId,
) -> Result<Catalog, SyncError> {
    let transition = apply_catalog(catalog, CatalogCommand::RemoveProduct { product_id })?;
    transition.trace();
    store
        .delete_catalog_product(product_id)
        .map_err(remote("remove product"))?;
    Ok(transition.new_catalog)
}

/// Generates a monthly audit over the catalog and stores it.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog is empty (no record is created)
/// - The store write fails
pub fn archive_audit<S: RemoteStore>(
    store: &mut S,
    catalog: &Catalog,
    now: OffsetDateTime,
) -> Result<AuditRecord, SyncError> {
    let record: AuditRecord = generate_audit(&catalog.products, now)?;
    let stored: AuditRecord = store.insert_audit(&record).map_err(remote("save audit"))?;

    info!(
        month = stored.month_label(),
        total_revenue = stored.total_revenue(),
        "Archived monthly audit"
    );
    Ok(stored)
}

/// Fetches every archived audit.
///
/// # Errors
///
/// Returns an error if the store read fails.
pub fn load_audits<S: RemoteStore>(store: &mut S) -> Result<Vec<AuditRecord>, SyncError> {
    store.select_audits().map_err(remote("load audits"))
}

/// Fetches the live item list.
///
/// # Errors
///
/// Returns an error if the store read fails.
pub fn load_items<S: RemoteStore>(store: &mut S) -> Result<Vec<Item>, SyncError> {
    store.select_items().map_err(remote("load items"))
}

/// Stores a new item and appends it to the list.
///
/// # Errors
///
/// Returns an error if the name is blank or the store write fails.
pub fn add_item<S: RemoteStore>(
    store: &mut S,
    items: &[Item],
    item: &NewItem,
) -> Result<Vec<Item>, SyncError> {
    validate_item_name(&item.name)?;

    let stored: Item = store.insert_item(item).map_err(remote("add item"))?;
    Ok(apply_item_event(items, ItemEvent::Insert { item: stored }))
}

/// Applies a partial update in the store and replaces the item in the list.
///
/// # Errors
///
/// Returns an error if the item does not exist or the store write fails.
pub fn update_item<S: RemoteStore>(
    store: &mut S,
    items: &[Item],
    item_id: ItemId,
    patch: &ItemPatch,
) -> Result<Vec<Item>, SyncError> {
    if let Some(name) = &patch.name {
        validate_item_name(name)?;
    }

    let updated: Item = store
        .update_item(item_id, patch)
        .map_err(remote("update item"))?
        .ok_or(SyncError::ItemNotFound(item_id))?;
    Ok(apply_item_event(items, ItemEvent::Update { item: updated }))
}

/// Deletes an item from the store and from the list.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn delete_item<S: RemoteStore>(
    store: &mut S,
    items: &[Item],
    item_id: ItemId,
) -> Result<Vec<Item>, SyncError> {
    store.delete_item(item_id).map_err(remote("delete item"))?;
    Ok(apply_item_event(items, ItemEvent::Delete { id: item_id }))
}
