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

mod catalog;
mod error;
mod item;
mod labels;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogProduct, CatalogProductId, NewCatalogProduct};
pub use error::DomainError;
pub use item::{Item, ItemEvent, ItemId, ItemPatch, NewItem};
pub use labels::{date_label, month_label, parse_date_label};
pub use types::{Page, PageId, PageRecord, Price, Row, RowId, RowRecord, RowUpdate};
pub use validation::{
    validate_item_name, validate_new_product, validate_products_present, validate_sale_price,
};
