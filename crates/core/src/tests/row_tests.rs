// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{add_filled_row, step, today};
use crate::{Command, Ledger, SortPolicy, TransitionResult, apply};
use noble_ledger_domain::{PageId, Price, RowId, RowUpdate};

#[test]
fn test_add_row_appends_blank_row() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();

    let ledger: Ledger = step(&ledger, Command::AddRow { page_id });

    let rows = &ledger.page(page_id).unwrap().rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_name, "");
    assert!(rows[0].original_price.is_blank());
    assert!(rows[0].price_sold.is_blank());
    assert!(!rows[0].sold);
}

#[test]
fn test_row_ids_are_unique_across_pages() {
    let ledger: Ledger = Ledger::new(today());
    let first: PageId = ledger.active_page_id();
    let ledger: Ledger = step(&ledger, Command::AddRow { page_id: first });
    let ledger: Ledger = step(&ledger, Command::AddPage { today: today() });
    let second: PageId = ledger.active_page_id();
    let ledger: Ledger = step(&ledger, Command::AddRow { page_id: second });
    let ledger: Ledger = step(&ledger, Command::AddRow { page_id: second });

    let mut ids: Vec<RowId> = ledger
        .pages()
        .iter()
        .flat_map(|p| p.rows.iter().map(|r| r.id))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_update_row_replaces_one_field() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();
    let (ledger, row_id) = add_filled_row(&ledger, page_id, "Lamp", "10", "", false);

    let result: TransitionResult = apply(
        &ledger,
        Command::UpdateRow {
            page_id,
            row_id,
            update: RowUpdate::PriceSold(Price::parse("12.5")),
        },
    );

    assert!(result.changed);
    let row = result.new_state.page(page_id).unwrap().row(row_id).unwrap();
    assert_eq!(row.product_name, "Lamp");
    assert_eq!(row.original_price, Price::new(10.0));
    assert_eq!(row.price_sold, Price::new(12.5));
    assert!(!row.sold);
    assert_eq!(result.audit_event.action.name, "UpdateRow");
}

#[test]
fn test_non_numeric_price_is_stored_blank() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();

    let (ledger, row_id) = add_filled_row(&ledger, page_id, "Vase", "abc", "  ", true);

    let row = ledger.page(page_id).unwrap().row(row_id).unwrap();
    assert!(row.original_price.is_blank());
    assert!(row.price_sold.is_blank());
    assert!(row.sold);
}

#[test]
fn test_update_unknown_row_is_a_no_op() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();

    let result: TransitionResult = apply(
        &ledger,
        Command::UpdateRow {
            page_id,
            row_id: RowId::new(999),
            update: RowUpdate::Sold(true),
        },
    );

    assert!(!result.changed);
    assert_eq!(result.new_state, ledger);
}

#[test]
fn test_delete_row_requires_confirmation() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();
    let (ledger, row_id) = add_filled_row(&ledger, page_id, "Clock", "3", "4", true);

    let declined: TransitionResult = apply(
        &ledger,
        Command::DeleteRow {
            page_id,
            row_id,
            confirmed: false,
        },
    );
    assert!(!declined.changed);
    assert_eq!(declined.new_state.page(page_id).unwrap().rows.len(), 1);

    let confirmed: Ledger = step(
        &ledger,
        Command::DeleteRow {
            page_id,
            row_id,
            confirmed: true,
        },
    );
    assert!(confirmed.page(page_id).unwrap().rows.is_empty());
}

#[test]
fn test_rows_kept_in_insertion_order_without_sort_policy() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();
    let (ledger, _) = add_filled_row(&ledger, page_id, "pear", "1", "", false);
    let (ledger, _) = add_filled_row(&ledger, page_id, "Apple", "1", "", false);

    let names: Vec<&str> = ledger
        .page(page_id)
        .unwrap()
        .rows
        .iter()
        .map(|r| r.product_name.as_str())
        .collect();
    assert_eq!(names, vec!["pear", "Apple"]);
}

#[test]
fn test_rows_sorted_case_insensitively_with_sort_policy() {
    let ledger: Ledger = Ledger::with_sort_policy(today(), SortPolicy::sorted());
    let page_id: PageId = ledger.active_page_id();
    let (ledger, _) = add_filled_row(&ledger, page_id, "pear", "1", "", false);
    let (ledger, _) = add_filled_row(&ledger, page_id, "Apple", "1", "", false);
    let (ledger, _) = add_filled_row(&ledger, page_id, "banana", "1", "", false);

    let names: Vec<&str> = ledger
        .page(page_id)
        .unwrap()
        .rows
        .iter()
        .map(|r| r.product_name.as_str())
        .collect();
    assert_eq!(names, vec!["Apple", "banana", "pear"]);
}

#[test]
fn test_enabling_sort_policy_reorders_existing_rows() {
    let ledger: Ledger = Ledger::new(today());
    let page_id: PageId = ledger.active_page_id();
    let (ledger, _) = add_filled_row(&ledger, page_id, "b", "1", "", false);
    let (ledger, _) = add_filled_row(&ledger, page_id, "A", "1", "", false);

    let ledger: Ledger = step(
        &ledger,
        Command::SetSortPolicy {
            policy: SortPolicy {
                rows_by_name: true,
                pages_by_title: false,
            },
        },
    );

    let rows = &ledger.page(page_id).unwrap().rows;
    assert_eq!(rows[0].product_name, "A");
    assert_eq!(rows[1].product_name, "b");
    assert!(ledger.sort_policy().rows_by_name);
}
