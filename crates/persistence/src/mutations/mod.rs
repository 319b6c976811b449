// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Every mutation uses Diesel DSL. The only backend-specific helper used is
//! `last_insert_rowid()`, reached through `PersistenceBackend`.
//!
//! ## Module Organization
//!
//! - `pages`: Page metadata upserts and row replacement
//! - `catalog`: Catalog product writes
//! - `audits`: Archiving monthly audits
//! - `items`: Item writes

pub mod audits;
pub mod catalog;
pub mod items;
pub mod pages;

pub use audits::insert_audit;
pub use catalog::{delete_catalog_product, insert_catalog_product, upsert_catalog_product};
pub use items::{delete_item, insert_item, update_item};
pub use pages::{delete_page, delete_rows, insert_rows, upsert_page};
