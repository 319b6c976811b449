// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_audit::AuditRecord;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::monthly_audits;
use crate::error::PersistenceError;

/// Archives a monthly audit, returning it with its stored id.
///
/// The product summary is stored as a JSON array.
///
/// # Errors
///
/// Returns an error if the summary cannot be encoded or the write fails.
pub fn insert_audit(
    conn: &mut SqliteConnection,
    record: &AuditRecord,
) -> Result<AuditRecord, PersistenceError> {
    let products_summary_json: String = serde_json::to_string(record.products_summary())?;

    diesel::insert_into(monthly_audits::table)
        .values((
            monthly_audits::month_label.eq(record.month_label()),
            monthly_audits::total_revenue.eq(record.total_revenue()),
            monthly_audits::products_summary_json.eq(&products_summary_json),
            monthly_audits::created_at.eq(record.created_at()),
        ))
        .execute(conn)?;

    let audit_id: i64 = conn.get_last_insert_rowid()?;
    info!(audit_id, month = record.month_label(), "Archived audit");

    Ok(record.stored_as(audit_id))
}
