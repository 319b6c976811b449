// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Price;
use serde::{Deserialize, Serialize};

/// Identifies an item in the live list. Assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(i64);

impl ItemId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item in the live-updating list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub sold: bool,
    pub price: Price,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

/// An item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub sold: bool,
    pub price: Price,
    pub created_at: String,
}

/// A partial update to an item. `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub sold: Option<bool>,
    pub price: Option<Price>,
}

impl ItemPatch {
    /// A patch that only sets the sold flag.
    #[must_use]
    pub const fn sold(sold: bool) -> Self {
        Self {
            name: None,
            sold: Some(sold),
            price: None,
        }
    }
}

/// A change notification for the item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEvent {
    /// An item was created.
    Insert {
        /// The new row.
        item: Item,
    },
    /// An item was replaced.
    Update {
        /// The row after the update.
        item: Item,
    },
    /// An item was removed.
    Delete {
        /// The removed item's id.
        id: ItemId,
    },
}

impl ItemEvent {
    /// The id of the item this event concerns.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::Insert { item } | Self::Update { item } => item.id,
            Self::Delete { id } => *id,
        }
    }
}
