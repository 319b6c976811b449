// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::product;
use crate::{Catalog, CatalogCommand, CatalogTransition, CoreError, apply_catalog};
use noble_ledger_domain::{CatalogProductId, DomainError};

fn catalog() -> Catalog {
    Catalog::new(vec![product(1, "Mug", 2, &[]), product(2, "Scarf", 0, &[9.0])])
}

#[test]
fn test_record_sale_appends_price_and_decrements_stock() {
    let catalog: Catalog = catalog();

    let transition: CatalogTransition = apply_catalog(
        &catalog,
        CatalogCommand::RecordSale {
            product_id: CatalogProductId::new(1),
            price: 7.5,
        },
    )
    .unwrap();

    let mug = transition
        .new_catalog
        .product(CatalogProductId::new(1))
        .unwrap();
    assert_eq!(mug.sold_prices, vec![7.5]);
    assert_eq!(mug.quantity_available, 1);
    assert_eq!(transition.audit_event.action.name, "RecordSale");
    assert!(transition.audit_event.snapshot_changed());
    assert_eq!(catalog.product(CatalogProductId::new(1)).unwrap().quantity_available, 2);
}

#[test]
fn test_record_sale_rejects_non_positive_price() {
    for price in [0.0, -3.0, f64::NAN] {
        let result: Result<CatalogTransition, CoreError> = apply_catalog(
            &catalog(),
            CatalogCommand::RecordSale {
                product_id: CatalogProductId::new(1),
                price,
            },
        );

        assert!(matches!(
            result,
            Err(CoreError::DomainViolation(DomainError::InvalidSalePrice(_)))
        ));
    }
}

#[test]
fn test_record_sale_rejects_out_of_stock_product() {
    let result: Result<CatalogTransition, CoreError> = apply_catalog(
        &catalog(),
        CatalogCommand::RecordSale {
            product_id: CatalogProductId::new(2),
            price: 9.0,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::OutOfStock {
            product_id: 2,
            name: String::from("Scarf"),
        })
    );
}

#[test]
fn test_record_sale_rejects_unknown_product() {
    let result: Result<CatalogTransition, CoreError> = apply_catalog(
        &catalog(),
        CatalogCommand::RecordSale {
            product_id: CatalogProductId::new(42),
            price: 1.0,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ProductNotFound(42))
    );
}

#[test]
fn test_add_and_remove_product() {
    let catalog: Catalog = catalog();

    let added: Catalog = apply_catalog(
        &catalog,
        CatalogCommand::AddProduct {
            product: product(3, "Candle", 5, &[]),
        },
    )
    .unwrap()
    .new_catalog;
    assert_eq!(added.products.len(), 3);

    let removed: Catalog = apply_catalog(
        &added,
        CatalogCommand::RemoveProduct {
            product_id: CatalogProductId::new(1),
        },
    )
    .unwrap()
    .new_catalog;
    let names: Vec<&str> = removed.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Scarf", "Candle"]);
}
