// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AuditRecord, ProductSummary};
use noble_ledger_domain::CatalogProductId;

fn create_test_summary() -> Vec<ProductSummary> {
    vec![ProductSummary {
        product_id: CatalogProductId::new(1),
        name: String::from("Bag"),
        original_price: 100.0,
        quantity_sold: 2,
        quantity_remaining: 3,
        total_revenue: 250.0,
    }]
}

#[test]
fn test_new_record_has_no_id() {
    let record: AuditRecord = AuditRecord::new(
        String::from("Jan 2025"),
        250.0,
        create_test_summary(),
        String::from("2025-01-31T12:00:00Z"),
    );

    assert_eq!(record.id(), None);
    assert_eq!(record.month_label(), "Jan 2025");
    assert_eq!(record.total_revenue(), 250.0);
    assert_eq!(record.products_summary().len(), 1);
    assert_eq!(record.created_at(), "2025-01-31T12:00:00Z");
}

#[test]
fn test_stored_as_keeps_contents() {
    let record: AuditRecord = AuditRecord::new(
        String::from("Jan 2025"),
        250.0,
        create_test_summary(),
        String::from("2025-01-31T12:00:00Z"),
    );
    let stored: AuditRecord = record.stored_as(9);

    assert_eq!(stored.id(), Some(9));
    assert_eq!(stored.products_summary(), record.products_summary());
    assert_eq!(
        stored,
        AuditRecord::with_id(
            9,
            String::from("Jan 2025"),
            250.0,
            create_test_summary(),
            String::from("2025-01-31T12:00:00Z"),
        )
    );
}

#[test]
fn test_product_summary_serializes_to_json_array() {
    let json: String = serde_json::to_string(&create_test_summary()).unwrap();
    let parsed: Vec<ProductSummary> = serde_json::from_str(&json).unwrap();

    assert!(json.starts_with('['));
    assert!(json.contains("\"quantity_sold\":2"));
    assert_eq!(parsed, create_test_summary());
}
