// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{CatalogCommand, Command, StoredPage};
use crate::error::CoreError;
use crate::projection::{SortPolicy, apply_sort_policy, sort_pages, sort_rows};
use crate::state::{Catalog, CatalogTransition, Ledger, TransitionResult, blank_page};
use noble_ledger_audit::{Action, AuditEvent, StateSnapshot};
use noble_ledger_domain::{
    DomainError, Page, PageId, Row, RowId, RowUpdate, date_label, validate_sale_price,
};
use time::Date;

/// What a single command did to the ledger.
struct Outcome {
    page_id: Option<PageId>,
    changed: bool,
    details: String,
}

impl Outcome {
    const fn changed(page_id: Option<PageId>, details: String) -> Self {
        Self {
            page_id,
            changed: true,
            details,
        }
    }

    const fn unchanged(page_id: Option<PageId>, details: String) -> Self {
        Self {
            page_id,
            changed: false,
            details,
        }
    }
}

/// Applies a command to the ledger, producing a new ledger and audit event.
///
/// Every ledger command is total: unknown page or row ids and declined
/// confirmations produce an unchanged ledger rather than an error.
///
/// # Arguments
///
/// * `state` - The current ledger (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// A `TransitionResult` with the new ledger, the audit event recording the
/// command, and whether anything changed.
#[must_use]
pub fn apply(state: &Ledger, command: Command) -> TransitionResult {
    let before: StateSnapshot = state.to_snapshot();
    let name: &'static str = command.name();
    let mut ledger: Ledger = state.clone();

    let outcome: Outcome = match command {
        Command::AddPage { today } => add_page(&mut ledger, today),
        Command::DeletePage {
            page_id,
            confirmed,
            today,
        } => delete_page(&mut ledger, page_id, confirmed, today),
        Command::SetActivePage { page_id } => set_active_page(&mut ledger, page_id),
        Command::SetPageDate { page_id, date } => {
            match ledger.page_mut(page_id) {
                Some(page) => {
                    let details: String = format!("Changed date '{}' to '{date}'", page.date);
                    page.date = date;
                    Outcome::changed(Some(page_id), details)
                }
                None => Outcome::unchanged(Some(page_id), String::from("Page not found")),
            }
        }
        Command::SetPageTitle { page_id, title } => set_page_title(&mut ledger, page_id, title),
        Command::AddRow { page_id } => add_row(&mut ledger, page_id),
        Command::DeleteRow {
            page_id,
            row_id,
            confirmed,
        } => delete_row(&mut ledger, page_id, row_id, confirmed),
        Command::UpdateRow {
            page_id,
            row_id,
            update,
        } => update_row(&mut ledger, page_id, row_id, update),
        Command::SetSortPolicy { policy } => {
            ledger.set_sort_policy(policy);
            apply_sort_policy(policy, ledger.pages_mut());
            Outcome::changed(None, format!("Sort policy set to {policy:?}"))
        }
        Command::ReplacePages { pages, today } => replace_pages(&mut ledger, pages, today),
        Command::ReplacePage { page } => replace_page(&mut ledger, page),
    };

    let after: StateSnapshot = ledger.to_snapshot();
    let action: Action = Action::new(String::from(name), Some(outcome.details));
    let audit_event: AuditEvent = AuditEvent::new(action, before, after, outcome.page_id);

    if !outcome.changed {
        return TransitionResult {
            new_state: state.clone(),
            audit_event,
            changed: false,
        };
    }

    TransitionResult {
        new_state: ledger,
        audit_event,
        changed: true,
    }
}

fn add_page(ledger: &mut Ledger, today: Date) -> Outcome {
    let page: Page = blank_page(today);
    let page_id: PageId = page.id;
    let details: String = format!("Added page dated {}", page.date);

    ledger.pages_mut().push(page);
    if ledger.sort_policy().pages_by_title {
        sort_pages(ledger.pages_mut());
    }
    ledger.set_active(page_id);

    Outcome::changed(Some(page_id), details)
}

fn delete_page(ledger: &mut Ledger, page_id: PageId, confirmed: bool, today: Date) -> Outcome {
    if !confirmed {
        return Outcome::unchanged(Some(page_id), String::from("Deletion not confirmed"));
    }

    let Some(index) = ledger.position(page_id) else {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    };

    let removed: Page = ledger.pages_mut().remove(index);

    // The ledger is never left without a page.
    if ledger.pages().is_empty() {
        let fresh: Page = blank_page(today);
        let fresh_id: PageId = fresh.id;
        ledger.pages_mut().push(fresh);
        ledger.set_active(fresh_id);
        return Outcome::changed(
            Some(page_id),
            format!(
                "Deleted page dated {}; created blank page dated {}",
                removed.date,
                date_label(today)
            ),
        );
    }

    if ledger.active_page_id() == page_id {
        let successor: Option<PageId> = index
            .checked_sub(1)
            .and_then(|i| ledger.pages().get(i))
            .or_else(|| ledger.pages().first())
            .map(|p| p.id);
        if let Some(successor) = successor {
            ledger.set_active(successor);
        }
    }

    Outcome::changed(
        Some(page_id),
        format!(
            "Deleted page dated {} with {} rows",
            removed.date,
            removed.rows.len()
        ),
    )
}

fn set_active_page(ledger: &mut Ledger, page_id: PageId) -> Outcome {
    if ledger.page(page_id).is_none() {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    }
    if ledger.active_page_id() == page_id {
        return Outcome::unchanged(Some(page_id), String::from("Page already active"));
    }
    ledger.set_active(page_id);
    Outcome::changed(Some(page_id), String::from("Selected page"))
}

fn set_page_title(ledger: &mut Ledger, page_id: PageId, title: String) -> Outcome {
    let sort: bool = ledger.sort_policy().pages_by_title;
    let Some(page) = ledger.page_mut(page_id) else {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    };

    let details: String = format!("Changed title '{}' to '{title}'", page.title);
    page.title = title;
    if sort {
        sort_pages(ledger.pages_mut());
    }
    Outcome::changed(Some(page_id), details)
}

fn add_row(ledger: &mut Ledger, page_id: PageId) -> Outcome {
    if ledger.page(page_id).is_none() {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    }

    let row_id: RowId = ledger.next_row_id();
    let sort: bool = ledger.sort_policy().rows_by_name;
    if let Some(page) = ledger.page_mut(page_id) {
        page.rows.push(Row::blank(row_id));
        if sort {
            sort_rows(&mut page.rows);
        }
    }

    Outcome::changed(Some(page_id), format!("Added row {row_id}"))
}

fn delete_row(ledger: &mut Ledger, page_id: PageId, row_id: RowId, confirmed: bool) -> Outcome {
    if !confirmed {
        return Outcome::unchanged(Some(page_id), String::from("Deletion not confirmed"));
    }

    let Some(page) = ledger.page_mut(page_id) else {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    };

    let before: usize = page.rows.len();
    page.rows.retain(|r| r.id != row_id);
    if page.rows.len() == before {
        return Outcome::unchanged(Some(page_id), format!("Row {row_id} not found"));
    }

    Outcome::changed(Some(page_id), format!("Deleted row {row_id}"))
}

fn update_row(ledger: &mut Ledger, page_id: PageId, row_id: RowId, update: RowUpdate) -> Outcome {
    let sort: bool = ledger.sort_policy().rows_by_name;
    let Some(page) = ledger.page_mut(page_id) else {
        return Outcome::unchanged(Some(page_id), String::from("Page not found"));
    };
    let Some(row) = page.row_mut(row_id) else {
        return Outcome::unchanged(Some(page_id), format!("Row {row_id} not found"));
    };

    let field: &'static str = update.field_name();
    row.apply_update(update);
    if sort {
        sort_rows(&mut page.rows);
    }

    Outcome::changed(Some(page_id), format!("Updated {field} on row {row_id}"))
}

/// Builds an in-memory page from a stored one, giving every row a new
/// local identity.
fn install_page(ledger: &mut Ledger, stored: StoredPage) -> Page {
    let mut page: Page = Page::new(stored.record.id, stored.record.date, stored.record.title);
    page.rows = stored
        .rows
        .into_iter()
        .map(|record| Row::from_record(ledger.next_row_id(), record))
        .collect();
    page
}

fn replace_pages(ledger: &mut Ledger, pages: Vec<StoredPage>, today: Date) -> Outcome {
    let fetched: usize = pages.len();
    let mut installed: Vec<Page> = Vec::with_capacity(fetched.max(1));
    for stored in pages {
        let page: Page = install_page(ledger, stored);
        installed.push(page);
    }
    if installed.is_empty() {
        installed.push(blank_page(today));
    }

    let policy: SortPolicy = ledger.sort_policy();
    apply_sort_policy(policy, &mut installed);

    let previous: PageId = ledger.active_page_id();
    *ledger.pages_mut() = installed;
    if ledger.page(previous).is_none() {
        let first: PageId = ledger.pages().first().map_or(previous, |p| p.id);
        ledger.set_active(first);
    }

    Outcome::changed(None, format!("Loaded {fetched} pages"))
}

fn replace_page(ledger: &mut Ledger, stored: StoredPage) -> Outcome {
    let page: Page = install_page(ledger, stored);
    let page_id: PageId = page.id;
    let rows: usize = page.rows.len();

    match ledger.position(page_id) {
        Some(index) => ledger.pages_mut()[index] = page,
        None => ledger.pages_mut().push(page),
    }

    let policy: SortPolicy = ledger.sort_policy();
    apply_sort_policy(policy, ledger.pages_mut());

    Outcome::changed(Some(page_id), format!("Loaded page with {rows} rows"))
}

/// Applies a command to the catalog, producing a new catalog and audit event.
///
/// # Arguments
///
/// * `catalog` - The current catalog (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns an error if:
/// - A sale price is zero, negative, or not finite
/// - A sale is recorded against a product with no stock left
/// - The product does not exist
pub fn apply_catalog(
    catalog: &Catalog,
    command: CatalogCommand,
) -> Result<CatalogTransition, CoreError> {
    let before: StateSnapshot = catalog.to_snapshot();
    let name: &'static str = command.name();
    let mut new_catalog: Catalog = catalog.clone();

    let details: String = match command {
        CatalogCommand::AddProduct { product } => {
            let details: String = format!(
                "Added product '{}' ({}) with {} in stock",
                product.name, product.id, product.quantity_available
            );
            new_catalog.products.push(product);
            details
        }
        CatalogCommand::RecordSale { product_id, price } => {
            // Validate before touching anything
            validate_sale_price(price)?;

            let product = new_catalog
                .products
                .iter_mut()
                .find(|p| p.id == product_id)
                .ok_or(DomainError::ProductNotFound(product_id.value()))?;

            if product.quantity_available == 0 {
                return Err(CoreError::DomainViolation(DomainError::OutOfStock {
                    product_id: product_id.value(),
                    name: product.name.clone(),
                }));
            }

            product.sold_prices.push(price);
            product.quantity_available -= 1;
            format!(
                "Recorded sale of '{}' at {price}; {} left",
                product.name, product.quantity_available
            )
        }
        CatalogCommand::RemoveProduct { product_id } => {
            let index: usize = new_catalog
                .products
                .iter()
                .position(|p| p.id == product_id)
                .ok_or(DomainError::ProductNotFound(product_id.value()))?;
            let removed = new_catalog.products.remove(index);
            format!("Removed product '{}' ({})", removed.name, removed.id)
        }
    };

    let after: StateSnapshot = new_catalog.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(
        Action::new(String::from(name), Some(details)),
        before,
        after,
        None,
    );

    Ok(CatalogTransition {
        new_catalog,
        audit_event,
    })
}
