// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change notifications for the `items` table.
//!
//! Every successful item write is announced to subscribers. Notifications
//! are informational: a subscriber that lags too far behind loses the
//! oldest events and should reload the list.

use noble_ledger_domain::ItemEvent;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
const EVENT_BUFFER_SIZE: usize = 100;

/// Fan-out for item change notifications.
#[derive(Debug, Clone)]
pub struct ItemEventBroadcaster {
    tx: broadcast::Sender<ItemEvent>,
}

impl ItemEventBroadcaster {
    /// Creates a broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends an event to every current subscriber.
    ///
    /// With no subscribers the event is dropped.
    pub fn broadcast(&self, event: &ItemEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(item_id = %event.item_id(), receivers = count, "Broadcast item event");
            }
            Err(_) => {
                debug!(item_id = %event.item_id(), "No receivers for item event");
            }
        }
    }

    /// Subscribes to events sent from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ItemEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ItemEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
