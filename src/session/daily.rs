//! Daily puzzle rollover

use super::SessionRecord;
use chrono::NaiveDate;

/// Whether a persisted session still belongs to today's puzzle.
///
/// A different daily theorem or a different calendar date both start a new
/// puzzle.
pub fn is_same_puzzle(record: &SessionRecord, theorem_id: &str, today: NaiveDate) -> bool {
    record.theorem_id == theorem_id && record.date == today
}

/// Share-line date label, e.g. `10/16/2026`
pub fn share_date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
