// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over ledger state.
//!
//! Nothing here is cached: every summary is recomputed from the rows it is
//! given.

use noble_ledger_domain::{Page, Row};

use crate::state::Ledger;

/// Ordering rules applied after every insert, field update, and load.
///
/// Both orderings are off by default, which keeps rows and pages in the
/// order they were created or fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortPolicy {
    /// Keep rows ascending by product name, case-insensitively.
    pub rows_by_name: bool,
    /// Keep pages ascending by title, case-insensitively.
    pub pages_by_title: bool,
}

impl SortPolicy {
    /// A policy that sorts both rows and pages.
    #[must_use]
    pub const fn sorted() -> Self {
        Self {
            rows_by_name: true,
            pages_by_title: true,
        }
    }
}

/// Sold/unsold tally and profit over a set of rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AuditSummary {
    /// Rows with the sold flag set.
    pub sold_count: usize,
    /// Rows without the sold flag.
    pub not_sold_count: usize,
    /// Sum of sold prices minus sum of original prices, over sold rows only.
    pub profit: f64,
}

impl AuditSummary {
    /// Total number of rows counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.sold_count + self.not_sold_count
    }

    fn add(self, other: Self) -> Self {
        Self {
            sold_count: self.sold_count + other.sold_count,
            not_sold_count: self.not_sold_count + other.not_sold_count,
            profit: self.profit + other.profit,
        }
    }
}

/// Yields the rows of `page` whose product name contains `query`,
/// ignoring case. An empty query yields every row. Page order is kept.
pub fn filtered_rows<'a>(page: &'a Page, query: &str) -> impl Iterator<Item = &'a Row> + use<'a> {
    let needle: String = query.to_lowercase();
    page.rows
        .iter()
        .filter(move |row| row.product_name.to_lowercase().contains(&needle))
}

/// Computes the audit summary of any set of rows.
///
/// Blank prices count as zero.
pub fn summarize_rows<'a, I>(rows: I) -> AuditSummary
where
    I: IntoIterator<Item = &'a Row>,
{
    rows.into_iter()
        .fold(AuditSummary::default(), |mut summary, row| {
            if row.sold {
                summary.sold_count += 1;
                summary.profit += row.price_sold.value() - row.original_price.value();
            } else {
                summary.not_sold_count += 1;
            }
            summary
        })
}

/// Computes the audit summary of a page.
#[must_use]
pub fn audit_summary(page: &Page) -> AuditSummary {
    summarize_rows(&page.rows)
}

/// Computes the audit summary across every page of the ledger.
#[must_use]
pub fn ledger_summary(ledger: &Ledger) -> AuditSummary {
    ledger
        .pages()
        .iter()
        .map(audit_summary)
        .fold(AuditSummary::default(), AuditSummary::add)
}

pub(crate) fn sort_rows(rows: &mut [Row]) {
    rows.sort_by_key(|row| row.product_name.to_lowercase());
}

pub(crate) fn sort_pages(pages: &mut [Page]) {
    pages.sort_by_key(|page| page.title.to_lowercase());
}

/// Re-applies `policy` to every page of `pages`.
pub(crate) fn apply_sort_policy(policy: SortPolicy, pages: &mut [Page]) {
    if policy.rows_by_name {
        for page in pages.iter_mut() {
            sort_rows(&mut page.rows);
        }
    }
    if policy.pages_by_title {
        sort_pages(pages);
    }
}
