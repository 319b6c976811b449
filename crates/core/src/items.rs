// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Applying live change notifications to the item list.
//!
//! Events are applied in arrival order with no reordering or
//! deduplication: inserts append, updates replace by id, deletes filter
//! by id. Updates and deletes for unknown ids leave the list as it was.

use noble_ledger_domain::{Item, ItemEvent};

/// Applies one change notification, returning the new list.
#[must_use]
pub fn apply_item_event(items: &[Item], event: ItemEvent) -> Vec<Item> {
    match event {
        ItemEvent::Insert { item } => {
            let mut next: Vec<Item> = items.to_vec();
            next.push(item);
            next
        }
        ItemEvent::Update { item } => items
            .iter()
            .map(|existing| {
                if existing.id == item.id {
                    item.clone()
                } else {
                    existing.clone()
                }
            })
            .collect(),
        ItemEvent::Delete { id } => items.iter().filter(|i| i.id != id).cloned().collect(),
    }
}

/// Applies a sequence of change notifications in order.
#[must_use]
pub fn apply_item_events<I>(items: &[Item], events: I) -> Vec<Item>
where
    I: IntoIterator<Item = ItemEvent>,
{
    events
        .into_iter()
        .fold(items.to_vec(), |current, event| apply_item_event(&current, event))
}
