// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of ledger state for the terminal.

use noble_ledger::AuditSummary;
use noble_ledger_audit::AuditRecord;
use noble_ledger_domain::{CatalogProduct, Item, Page, Row};

/// Renders a money amount with two decimals.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// One line per page: id, date, title, row count.
pub fn page_line(index: usize, page: &Page, active: bool) -> String {
    let marker: &str = if active { "*" } else { " " };
    let title: &str = if page.title.is_empty() {
        "(untitled)"
    } else {
        &page.title
    };
    format!(
        "{marker} {index:>2}. {}  {}  {title}  [{} rows]",
        page.id,
        page.date,
        page.rows.len()
    )
}

/// One line per row, numbered from 1 in display order.
pub fn row_line(position: usize, row: &Row) -> String {
    let sold: &str = if row.sold { "sold" } else { "-" };
    format!(
        "{position:>3}. {:<24} {:>10} {:>10}  {sold}",
        row.product_name,
        row.original_price.to_string(),
        row.price_sold.to_string(),
    )
}

pub fn summary_line(summary: &AuditSummary) -> String {
    format!(
        "Sold: {}  Not sold: {}  Profit: {}",
        summary.sold_count,
        summary.not_sold_count,
        money(summary.profit)
    )
}

pub fn product_line(product: &CatalogProduct) -> String {
    format!(
        "{:>4}. {:<24} price {:>8}  in stock {:>4}  sold {:>4}  revenue {:>10}",
        product.id,
        product.name,
        money(product.price),
        product.quantity_available,
        product.quantity_sold(),
        money(product.total_revenue()),
    )
}

pub fn audit_lines(record: &AuditRecord) -> Vec<String> {
    let mut lines: Vec<String> = vec![format!(
        "{}  total revenue {}  (archived {})",
        record.month_label(),
        money(record.total_revenue()),
        record.created_at()
    )];
    lines.extend(record.products_summary().iter().map(|line| {
        format!(
            "    {:<24} sold {:>4}  remaining {:>4}  revenue {:>10}",
            line.name,
            line.quantity_sold,
            line.quantity_remaining,
            money(line.total_revenue)
        )
    }));
    lines
}

pub fn item_line(item: &Item) -> String {
    let sold: &str = if item.sold { "sold" } else { "-" };
    format!(
        "{:>4}. {:<24} {:>10}  {sold}",
        item.id,
        item.name,
        item.price.to_string()
    )
}
