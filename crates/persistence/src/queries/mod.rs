// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `pages`: Page metadata and page rows
//! - `catalog`: Catalog products
//! - `audits`: Archived monthly audits
//! - `items`: The live item list

pub mod audits;
pub mod catalog;
pub mod items;
pub mod pages;

pub use audits::list_audits;
pub use catalog::list_catalog_products;
pub use items::{find_item, list_items};
pub use pages::{find_page, list_pages, list_rows};
