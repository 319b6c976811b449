// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use noble_ledger_audit::AuditRecord;

use crate::data_models::MonthlyAuditRow;
use crate::diesel_schema::monthly_audits;
use crate::error::PersistenceError;

/// Lists every archived audit, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored summary cannot be decoded.
pub fn list_audits(conn: &mut SqliteConnection) -> Result<Vec<AuditRecord>, PersistenceError> {
    monthly_audits::table
        .order(monthly_audits::audit_id.asc())
        .select(MonthlyAuditRow::as_select())
        .load(conn)?
        .into_iter()
        .map(MonthlyAuditRow::into_record)
        .collect()
}
