// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifies a page.
///
/// Page ids are generated once and survive persistence round-trips,
/// unlike row ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Generates a fresh random page id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidPageId(s.to_string()))
    }
}

/// UI-local identity of a row.
///
/// Row ids are handed out by the ledger's session counter and are
/// reassigned on every load. They are not durable keys and never
/// correspond to a remote primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    /// Creates a row id from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price cell.
///
/// A price is either blank or a finite amount. Blank prices count as zero
/// in every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Price(Option<f64>);

impl Price {
    /// The blank price.
    pub const BLANK: Self = Self(None);

    /// Creates a price from an amount. Non-finite amounts become blank.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() {
            Self(Some(amount))
        } else {
            Self::BLANK
        }
    }

    /// Parses user input. Blank or non-numeric input yields a blank price.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed: &str = input.trim();
        if trimmed.is_empty() {
            return Self::BLANK;
        }
        trimmed.parse::<f64>().map_or(Self::BLANK, Self::new)
    }

    /// Returns the stored amount, if any.
    #[must_use]
    pub const fn amount(&self) -> Option<f64> {
        self.0
    }

    /// Returns the amount used for arithmetic: blank counts as zero.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// Returns whether the price is blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<f64>> for Price {
    fn from(amount: Option<f64>) -> Self {
        amount.map_or(Self::BLANK, Self::new)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(amount) => write!(f, "{amount}"),
            None => Ok(()),
        }
    }
}

/// The visible fields of a row, without its local identity.
///
/// This is the shape exchanged with the remote store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowRecord {
    /// The product name.
    pub product_name: String,
    /// The price the product was bought for.
    pub original_price: Price,
    /// The price the product was sold for.
    pub price_sold: Price,
    /// Whether the product has been sold.
    pub sold: bool,
}

/// A single field replacement on a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowUpdate {
    /// Replace the product name.
    ProductName(String),
    /// Replace the original price.
    OriginalPrice(Price),
    /// Replace the sold price.
    PriceSold(Price),
    /// Replace the sold flag.
    Sold(bool),
}

impl RowUpdate {
    /// Returns the name of the field this update replaces.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::ProductName(_) => "product_name",
            Self::OriginalPrice(_) => "original_price",
            Self::PriceSold(_) => "price_sold",
            Self::Sold(_) => "sold",
        }
    }
}

/// One product entry on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The session-local identity.
    pub id: RowId,
    /// The product name.
    pub product_name: String,
    /// The price the product was bought for.
    pub original_price: Price,
    /// The price the product was sold for.
    pub price_sold: Price,
    /// Whether the product has been sold.
    pub sold: bool,
}

impl Row {
    /// Creates an empty, unsold row.
    #[must_use]
    pub const fn blank(id: RowId) -> Self {
        Self {
            id,
            product_name: String::new(),
            original_price: Price::BLANK,
            price_sold: Price::BLANK,
            sold: false,
        }
    }

    /// Creates a row from a stored record under a new local identity.
    #[must_use]
    pub fn from_record(id: RowId, record: RowRecord) -> Self {
        Self {
            id,
            product_name: record.product_name,
            original_price: record.original_price,
            price_sold: record.price_sold,
            sold: record.sold,
        }
    }

    /// Returns the visible fields of this row.
    #[must_use]
    pub fn to_record(&self) -> RowRecord {
        RowRecord {
            product_name: self.product_name.clone(),
            original_price: self.original_price,
            price_sold: self.price_sold,
            sold: self.sold,
        }
    }

    /// Replaces exactly the field named by `update`.
    pub fn apply_update(&mut self, update: RowUpdate) {
        match update {
            RowUpdate::ProductName(name) => self.product_name = name,
            RowUpdate::OriginalPrice(price) => self.original_price = price,
            RowUpdate::PriceSold(price) => self.price_sold = price,
            RowUpdate::Sold(sold) => self.sold = sold,
        }
    }
}

/// Page metadata as stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The page identifier.
    pub id: PageId,
    /// The date label, `DD/MM/YYYY` by default.
    pub date: String,
    /// The page title.
    pub title: String,
}

/// A ledger sheet: metadata plus the rows it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// The page identifier.
    pub id: PageId,
    /// The date label.
    pub date: String,
    /// The page title.
    pub title: String,
    /// The rows on this page, in display order.
    pub rows: Vec<Row>,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub const fn new(id: PageId, date: String, title: String) -> Self {
        Self {
            id,
            date,
            title,
            rows: Vec::new(),
        }
    }

    /// Looks up a row by local id.
    #[must_use]
    pub fn row(&self, row_id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    /// Looks up a row by local id for mutation.
    pub fn row_mut(&mut self, row_id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }

    /// Returns the page metadata.
    #[must_use]
    pub fn record(&self) -> PageRecord {
        PageRecord {
            id: self.id,
            date: self.date.clone(),
            title: self.title.clone(),
        }
    }

    /// Returns the visible fields of every row, in order.
    #[must_use]
    pub fn row_records(&self) -> Vec<RowRecord> {
        self.rows.iter().map(Row::to_record).collect()
    }
}
