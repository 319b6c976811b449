// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use noble_ledger::RemoteStore;
use noble_ledger_domain::{Item, ItemEvent, ItemId, ItemPatch, NewItem, Price};

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: String::from(name),
        sold: false,
        price: Price::new(3.0),
        created_at: String::from("2025-06-23T09:00:00Z"),
    }
}

#[test]
fn test_item_writes_are_broadcast() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut rx = persistence.subscribe_items();

    let lamp: Item = persistence.insert_item(&new_item("Lamp")).unwrap();
    let sold: Item = persistence
        .update_item(lamp.id, &ItemPatch::sold(true))
        .unwrap()
        .unwrap();
    persistence.delete_item(lamp.id).unwrap();

    assert_eq!(rx.try_recv().unwrap(), ItemEvent::Insert { item: lamp.clone() });
    assert_eq!(rx.try_recv().unwrap(), ItemEvent::Update { item: sold });
    assert_eq!(rx.try_recv().unwrap(), ItemEvent::Delete { id: lamp.id });
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_writes_without_subscribers_succeed() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.item_events().receiver_count(), 0);

    let lamp: Item = persistence.insert_item(&new_item("Lamp")).unwrap();

    assert_eq!(persistence.select_items().unwrap(), vec![lamp]);
}

#[test]
fn test_partial_update_keeps_other_fields() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let lamp: Item = persistence.insert_item(&new_item("Lamp")).unwrap();

    let patch = ItemPatch {
        price: Some(Price::BLANK),
        ..ItemPatch::default()
    };
    let updated: Item = persistence.update_item(lamp.id, &patch).unwrap().unwrap();

    assert_eq!(updated.name, "Lamp");
    assert!(!updated.sold);
    assert!(updated.price.is_blank());
    assert_eq!(updated.created_at, lamp.created_at);
}

#[test]
fn test_empty_patch_returns_item_unchanged() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let lamp: Item = persistence.insert_item(&new_item("Lamp")).unwrap();

    let same = persistence
        .update_item(lamp.id, &ItemPatch::default())
        .unwrap();

    assert_eq!(same, Some(lamp));
}

#[test]
fn test_missing_item_update_and_delete() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut rx = persistence.subscribe_items();

    assert_eq!(
        persistence
            .update_item(ItemId::new(99), &ItemPatch::sold(true))
            .unwrap(),
        None
    );
    persistence.delete_item(ItemId::new(99)).unwrap();

    assert!(rx.try_recv().is_err());
}
