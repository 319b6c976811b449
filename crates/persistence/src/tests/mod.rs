// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod catalog_tests;
mod item_tests;

use noble_ledger_domain::{PageId, PageRecord, Price, RowRecord};
use time::Date;
use time::macros::date;

pub fn create_test_page(date: &str, title: &str) -> PageRecord {
    PageRecord {
        id: PageId::generate(),
        date: String::from(date),
        title: String::from(title),
    }
}

pub fn create_test_row(name: &str, original: Option<f64>, sold_for: Option<f64>, sold: bool) -> RowRecord {
    RowRecord {
        product_name: String::from(name),
        original_price: Price::from(original),
        price_sold: Price::from(sold_for),
        sold,
    }
}

pub const fn create_test_date() -> Date {
    date!(2025 - 06 - 23)
}
