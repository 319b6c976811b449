// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit types for the ledger.
//!
//! Two kinds of record live here:
//! - `AuditEvent`: one entry per ledger transition, describing what changed
//! - `AuditRecord`: an archived monthly sales audit over the product catalog

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod record;

#[cfg(test)]
mod tests;

pub use record::{AuditRecord, ProductSummary};

use noble_ledger_domain::PageId;

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AddRow`", "`DeletePage`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact description of ledger state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable record of one ledger transition.
///
/// Every applied command produces exactly one event, including commands
/// that turned out to be no-ops. Events capture:
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
/// - The page the action targeted, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The page the action targeted.
    pub page_id: Option<PageId>,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `page_id` - The page the action targeted
    #[must_use]
    pub const fn new(
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        page_id: Option<PageId>,
    ) -> Self {
        Self {
            action,
            before,
            after,
            page_id,
        }
    }

    /// Returns whether the snapshots before and after differ.
    #[must_use]
    pub fn snapshot_changed(&self) -> bool {
        self.before != self.after
    }
}
