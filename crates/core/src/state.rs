// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use noble_ledger_audit::{AuditEvent, StateSnapshot};
use noble_ledger_domain::{CatalogProduct, CatalogProductId, Page, PageId, RowId, date_label};
use time::Date;
use tracing::debug;

use crate::projection::SortPolicy;

/// The in-memory spreadsheet: every page, the active selection, and the
/// session counter that hands out row ids.
///
/// A ledger always holds at least one page, and `active_page_id` always
/// names one of them. Both hold for every state reachable through `apply`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pages: Vec<Page>,
    active_page_id: PageId,
    sort_policy: SortPolicy,
    next_row_key: u64,
}

impl Ledger {
    /// Creates a ledger with a single blank page dated `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self::with_sort_policy(today, SortPolicy::default())
    }

    /// Creates a ledger with a single blank page and the given sort policy.
    #[must_use]
    pub fn with_sort_policy(today: Date, sort_policy: SortPolicy) -> Self {
        let page: Page = blank_page(today);
        Self {
            active_page_id: page.id,
            pages: vec![page],
            sort_policy,
            next_row_key: 1,
        }
    }

    /// All pages, in display order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Looks up a page by id.
    #[must_use]
    pub fn page(&self, page_id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// The id of the active page.
    #[must_use]
    pub const fn active_page_id(&self) -> PageId {
        self.active_page_id
    }

    /// The active page.
    #[must_use]
    pub fn active_page(&self) -> Option<&Page> {
        self.page(self.active_page_id)
    }

    /// The current sort policy.
    #[must_use]
    pub const fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    /// Converts the ledger to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let rows: usize = self.pages.iter().map(|p| p.rows.len()).sum();
        let sold: usize = self
            .pages
            .iter()
            .flat_map(|p| p.rows.iter())
            .filter(|r| r.sold)
            .count();
        StateSnapshot::new(format!(
            "pages={},active={},rows={rows},sold={sold}",
            self.pages.len(),
            self.active_page_id,
        ))
    }

    pub(crate) fn page_mut(&mut self, page_id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == page_id)
    }

    pub(crate) fn position(&self, page_id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page_id)
    }

    pub(crate) fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.pages
    }

    pub(crate) const fn set_active(&mut self, page_id: PageId) {
        self.active_page_id = page_id;
    }

    pub(crate) const fn set_sort_policy(&mut self, sort_policy: SortPolicy) {
        self.sort_policy = sort_policy;
    }

    /// Hands out the next session-local row id.
    pub(crate) const fn next_row_id(&mut self) -> RowId {
        let id: RowId = RowId::new(self.next_row_key);
        self.next_row_key += 1;
        id
    }
}

/// Creates an empty page with a fresh id and an empty title.
#[must_use]
pub fn blank_page(today: Date) -> Page {
    Page::new(PageId::generate(), date_label(today), String::new())
}

/// The result of applying a ledger command.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The ledger after the command.
    pub new_state: Ledger,
    /// The audit event recording this command.
    pub audit_event: AuditEvent,
    /// Whether the command changed anything. Declined confirmations and
    /// commands naming unknown ids leave the ledger as it was.
    pub changed: bool,
}

impl TransitionResult {
    /// Writes the audit event to the log at debug level.
    pub fn trace(&self) {
        trace_event(&self.audit_event, self.changed);
    }
}

fn trace_event(event: &AuditEvent, changed: bool) {
    debug!(
        action = %event.action.name,
        details = event.action.details.as_deref().unwrap_or(""),
        page_id = ?event.page_id,
        before = %event.before.data,
        after = %event.after.data,
        changed,
        "Applied command"
    );
}

/// The product catalog used by the monthly audit workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    /// The stocked products, in store order.
    pub products: Vec<CatalogProduct>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, product_id: CatalogProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Converts the catalog to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let sales: usize = self.products.iter().map(CatalogProduct::quantity_sold).sum();
        let stock: u64 = self
            .products
            .iter()
            .map(|p| u64::from(p.quantity_available))
            .sum();
        StateSnapshot::new(format!(
            "products={},sales={sales},stock={stock}",
            self.products.len()
        ))
    }
}

/// The result of a successful catalog command.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTransition {
    /// The catalog after the command.
    pub new_catalog: Catalog,
    /// The audit event recording this command.
    pub audit_event: AuditEvent,
}

impl CatalogTransition {
    /// Writes the audit event to the log at debug level.
    pub fn trace(&self) {
        trace_event(&self.audit_event, self.audit_event.snapshot_changed());
    }
}
