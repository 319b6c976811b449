// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable date labels for pages and audits.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DATE_LABEL: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");
const MONTH_LABEL: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [year]");

/// Formats a page date label, e.g. `23/06/2025`.
#[must_use]
pub fn date_label(date: Date) -> String {
    date.format(DATE_LABEL).unwrap_or_else(|_| date.to_string())
}

/// Parses a `DD/MM/YYYY` page date label.
///
/// Returns `None` for labels that were edited into some other shape.
#[must_use]
pub fn parse_date_label(label: &str) -> Option<Date> {
    Date::parse(label.trim(), DATE_LABEL).ok()
}

/// Formats an audit month label, e.g. `Jan 2025`.
#[must_use]
pub fn month_label(at: OffsetDateTime) -> String {
    at.format(MONTH_LABEL)
        .unwrap_or_else(|_| format!("{} {}", at.month(), at.year()))
}
