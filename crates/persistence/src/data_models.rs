// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row shapes as stored, and their conversions into domain values.

use diesel::prelude::*;
use noble_ledger_audit::{AuditRecord, ProductSummary};
use noble_ledger_domain::{
    CatalogProduct, CatalogProductId, Item, ItemId, PageId, PageRecord, Price, RowRecord,
};
use num_traits::ToPrimitive;
use std::str::FromStr;

use crate::diesel_schema::{catalog_products, items, monthly_audits, pages, products};
use crate::error::PersistenceError;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = pages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PageRow {
    pub page_id: String,
    pub date: String,
    pub title: String,
}

impl PageRow {
    pub fn into_record(self) -> Result<PageRecord, PersistenceError> {
        let id: PageId = PageId::from_str(&self.page_id)
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        Ok(PageRecord {
            id,
            date: self.date,
            title: self.title,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub product_name: String,
    pub original_price: Option<f64>,
    pub price_sold: Option<f64>,
    pub sold: bool,
}

impl From<ProductRow> for RowRecord {
    fn from(row: ProductRow) -> Self {
        Self {
            product_name: row.product_name,
            original_price: Price::from(row.original_price),
            price_sold: Price::from(row.price_sold),
            sold: row.sold,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = catalog_products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CatalogProductRow {
    pub catalog_product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity_available: i32,
    pub sold_prices_json: String,
}

impl CatalogProductRow {
    pub fn into_product(self) -> Result<CatalogProduct, PersistenceError> {
        let quantity_available: u32 = self.quantity_available.to_u32().ok_or_else(|| {
            PersistenceError::CorruptRecord(format!(
                "Negative stock {} for product {}",
                self.quantity_available, self.catalog_product_id
            ))
        })?;
        let sold_prices: Vec<f64> = serde_json::from_str(&self.sold_prices_json)?;

        Ok(CatalogProduct {
            id: CatalogProductId::new(self.catalog_product_id),
            name: self.name,
            price: self.price,
            quantity_available,
            sold_prices,
        })
    }
}

/// Converts a stock count to the stored column type.
pub fn stock_column(quantity: u32) -> Result<i32, PersistenceError> {
    quantity.to_i32().ok_or_else(|| {
        PersistenceError::CorruptRecord(format!("Stock count {quantity} is too large to store"))
    })
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = monthly_audits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyAuditRow {
    pub audit_id: i64,
    pub month_label: String,
    pub total_revenue: f64,
    pub products_summary_json: String,
    pub created_at: String,
}

impl MonthlyAuditRow {
    pub fn into_record(self) -> Result<AuditRecord, PersistenceError> {
        let products_summary: Vec<ProductSummary> =
            serde_json::from_str(&self.products_summary_json)?;
        Ok(AuditRecord::with_id(
            self.audit_id,
            self.month_label,
            self.total_revenue,
            products_summary,
            self.created_at,
        ))
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub item_id: i64,
    pub name: String,
    pub sold: bool,
    pub price: Option<f64>,
    pub created_at: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId::new(row.item_id),
            name: row.name,
            sold: row.sold,
            price: Price::from(row.price),
            created_at: row.created_at,
        }
    }
}
