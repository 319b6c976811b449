// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use noble_ledger_domain::{
    CatalogProduct, CatalogProductId, PageId, PageRecord, RowId, RowRecord, RowUpdate,
};
use time::Date;

use crate::projection::SortPolicy;

/// A page as fetched from the store: metadata plus row records.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPage {
    /// The page metadata.
    pub record: PageRecord,
    /// The page's rows, in store order.
    pub rows: Vec<RowRecord>,
}

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request ledger changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a blank page dated `today` and make it active.
    AddPage {
        /// The creation date, used for the date label.
        today: Date,
    },
    /// Delete a page.
    DeletePage {
        /// The page to delete.
        page_id: PageId,
        /// Whether the user confirmed the deletion.
        confirmed: bool,
        /// Date for the replacement page if the last page is deleted.
        today: Date,
    },
    /// Select the active page.
    SetActivePage {
        /// The page to select.
        page_id: PageId,
    },
    /// Replace a page's date label.
    SetPageDate {
        /// The page to edit.
        page_id: PageId,
        /// The new label.
        date: String,
    },
    /// Replace a page's title.
    SetPageTitle {
        /// The page to edit.
        page_id: PageId,
        /// The new title.
        title: String,
    },
    /// Append a blank row to a page.
    AddRow {
        /// The page to append to.
        page_id: PageId,
    },
    /// Delete a row.
    DeleteRow {
        /// The page holding the row.
        page_id: PageId,
        /// The row to delete.
        row_id: RowId,
        /// Whether the user confirmed the deletion.
        confirmed: bool,
    },
    /// Replace one field of a row.
    UpdateRow {
        /// The page holding the row.
        page_id: PageId,
        /// The row to edit.
        row_id: RowId,
        /// The field replacement.
        update: RowUpdate,
    },
    /// Switch the sort policy and re-apply it.
    SetSortPolicy {
        /// The new policy.
        policy: SortPolicy,
    },
    /// Replace every page with pages fetched from the store.
    ReplacePages {
        /// The fetched pages, in display order.
        pages: Vec<StoredPage>,
        /// Date for a blank page if the store holds none.
        today: Date,
    },
    /// Replace or insert one page fetched from the store.
    ReplacePage {
        /// The fetched page.
        page: StoredPage,
    },
}

impl Command {
    /// Returns the command name used in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPage { .. } => "AddPage",
            Self::DeletePage { .. } => "DeletePage",
            Self::SetActivePage { .. } => "SetActivePage",
            Self::SetPageDate { .. } => "SetPageDate",
            Self::SetPageTitle { .. } => "SetPageTitle",
            Self::AddRow { .. } => "AddRow",
            Self::DeleteRow { .. } => "DeleteRow",
            Self::UpdateRow { .. } => "UpdateRow",
            Self::SetSortPolicy { .. } => "SetSortPolicy",
            Self::ReplacePages { .. } => "ReplacePages",
            Self::ReplacePage { .. } => "ReplacePage",
        }
    }
}

/// A command against the product catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCommand {
    /// Add a product that has already been stored.
    AddProduct {
        /// The stored product.
        product: CatalogProduct,
    },
    /// Record one sale of a product.
    RecordSale {
        /// The product sold.
        product_id: CatalogProductId,
        /// The sale price. Must be greater than zero.
        price: f64,
    },
    /// Remove a product from the catalog.
    RemoveProduct {
        /// The product to remove.
        product_id: CatalogProductId,
    },
}

impl CatalogCommand {
    /// Returns the command name used in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddProduct { .. } => "AddProduct",
            Self::RecordSale { .. } => "RecordSale",
            Self::RemoveProduct { .. } => "RemoveProduct",
        }
    }
}
