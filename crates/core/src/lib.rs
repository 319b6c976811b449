// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod archive;
mod command;
mod error;
mod items;
mod projection;
mod remote;
mod state;
mod sync;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_catalog};
pub use archive::generate_audit;
pub use command::{CatalogCommand, Command, StoredPage};
pub use error::{CoreError, SyncError};
pub use items::{apply_item_event, apply_item_events};
pub use projection::{
    AuditSummary, SortPolicy, audit_summary, filtered_rows, ledger_summary, summarize_rows,
};
pub use remote::{PageOrder, RemoteStore};
pub use state::{Catalog, CatalogTransition, Ledger, TransitionResult, blank_page};
pub use sync::{
    SaveReport, add_catalog_product, add_item, archive_audit, delete_item, delete_page,
    load_all, load_audits, load_catalog, load_items, load_page, record_sale,
    remove_catalog_product, save_all, save_catalog, save_page, update_item,
};
