// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Action, AuditEvent, StateSnapshot};
use noble_ledger_domain::PageId;

#[test]
fn test_action_creation_requires_name() {
    let action: Action = Action::new(String::from("AddRow"), None);

    assert_eq!(action.name, "AddRow");
    assert_eq!(action.details, None);
}

#[test]
fn test_action_creation_with_details() {
    let action: Action = Action::new(
        String::from("DeletePage"),
        Some(String::from("Deleted page 23/06/2025")),
    );

    assert_eq!(action.name, "DeletePage");
    assert_eq!(action.details, Some(String::from("Deleted page 23/06/2025")));
}

#[test]
fn test_state_snapshot_creation() {
    let snapshot: StateSnapshot = StateSnapshot::new(String::from("pages=1"));

    assert_eq!(snapshot.data, "pages=1");
}

#[test]
fn test_audit_event_creation_requires_all_fields() {
    let action: Action = Action::new(String::from("AddRow"), None);
    let before: StateSnapshot = StateSnapshot::new(String::from("rows=0"));
    let after: StateSnapshot = StateSnapshot::new(String::from("rows=1"));
    let page_id: PageId = PageId::generate();

    let event: AuditEvent =
        AuditEvent::new(action.clone(), before.clone(), after.clone(), Some(page_id));

    assert_eq!(event.action, action);
    assert_eq!(event.before, before);
    assert_eq!(event.after, after);
    assert_eq!(event.page_id, Some(page_id));
    assert!(event.snapshot_changed());
}

#[test]
fn test_audit_event_with_identical_snapshots_reports_no_change() {
    let event: AuditEvent = AuditEvent::new(
        Action::new(String::from("SetActivePage"), None),
        StateSnapshot::new(String::from("pages=2")),
        StateSnapshot::new(String::from("pages=2")),
        None,
    );

    assert!(!event.snapshot_changed());
}

#[test]
fn test_audit_event_equality() {
    let page_id: PageId = PageId::generate();
    let make = || {
        AuditEvent::new(
            Action::new(String::from("AddRow"), None),
            StateSnapshot::new(String::from("rows=0")),
            StateSnapshot::new(String::from("rows=1")),
            Some(page_id),
        )
    };

    assert_eq!(make(), make());
}
