// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use noble_ledger::RemoteStore;
use noble_ledger_domain::{CatalogProduct, NewCatalogProduct};

fn new_product(name: &str, quantity: u32) -> NewCatalogProduct {
    NewCatalogProduct {
        name: String::from(name),
        price: 4.5,
        quantity_available: quantity,
    }
}

#[test]
fn test_insert_assigns_ids() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let mug: CatalogProduct = persistence
        .insert_catalog_product(&new_product("Mug", 3))
        .unwrap();
    let scarf: CatalogProduct = persistence
        .insert_catalog_product(&new_product("Scarf", 1))
        .unwrap();

    assert_ne!(mug.id, scarf.id);
    assert!(mug.sold_prices.is_empty());
    assert_eq!(persistence.select_catalog_products().unwrap(), vec![mug, scarf]);
}

#[test]
fn test_upsert_stores_sales_and_stock() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut mug: CatalogProduct = persistence
        .insert_catalog_product(&new_product("Mug", 3))
        .unwrap();

    mug.sold_prices = vec![5.0, 6.25];
    mug.quantity_available = 1;
    persistence.upsert_catalog_product(&mug).unwrap();

    let stored: Vec<CatalogProduct> = persistence.select_catalog_products().unwrap();
    assert_eq!(stored, vec![mug]);
}

#[test]
fn test_delete_product() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mug: CatalogProduct = persistence
        .insert_catalog_product(&new_product("Mug", 3))
        .unwrap();

    persistence.delete_catalog_product(mug.id).unwrap();

    assert!(persistence.select_catalog_products().unwrap().is_empty());
}
