// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use noble_ledger_domain::{DomainError, ItemId, PageId};

/// Errors that can occur while applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Errors reported by the persistence sync operations.
///
/// A sync error never implies a partial in-memory update: the ledger,
/// catalog, or item list passed in is returned unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The remote store rejected or failed an operation.
    Remote {
        /// The store operation that failed (e.g. `"delete rows"`).
        operation: &'static str,
        /// The store's error message.
        message: String,
    },
    /// The page is not in the ledger, or not in the store.
    PageNotFound(PageId),
    /// The item is not in the store.
    ItemNotFound(ItemId),
    /// The request was rejected before reaching the store.
    Rejected(CoreError),
}

impl SyncError {
    /// Text for the blocking notice shown to the user.
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::Remote { operation, .. } => {
                format!("Could not {operation}. Nothing else was changed; please try again.")
            }
            Self::PageNotFound(_) => String::from("That page no longer exists."),
            Self::ItemNotFound(_) => String::from("That item no longer exists."),
            Self::Rejected(CoreError::DomainViolation(err)) => err.to_string(),
        }
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote { operation, message } => {
                write!(f, "Remote operation '{operation}' failed: {message}")
            }
            Self::PageNotFound(page_id) => write!(f, "Page {page_id} not found"),
            Self::ItemNotFound(item_id) => write!(f, "Item {item_id} not found"),
            Self::Rejected(err) => write!(f, "Rejected: {err}"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}

impl From<DomainError> for SyncError {
    fn from(err: DomainError) -> Self {
        Self::Rejected(CoreError::DomainViolation(err))
    }
}
