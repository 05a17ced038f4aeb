//! Overdue entries, derived from active borrow records

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A staff-facing overdue listing entry. Derived from a BorrowRecord whose
/// due date has passed; never persisted on its own.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverdueEntry {
    pub record_id: i32,
    pub item_name: String,
    pub student_net_id: String,
    pub student_name: String,
    pub due_date: DateTime<Utc>,
    pub days_overdue: i64,
}

/// Whole days a record is overdue, floored, minimum 1.
///
/// Only meaningful when `due < now`; an item due 10 minutes ago is already
/// one day overdue for fine purposes.
pub fn days_overdue(now: DateTime<Utc>, due: DateTime<Utc>) -> i64 {
    (now - due).num_days().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn three_days_past_due_is_three() {
        let now = Utc::now();
        assert_eq!(days_overdue(now, now - Duration::days(3)), 3);
    }

    #[test]
    fn partial_day_counts_as_one() {
        let now = Utc::now();
        assert_eq!(days_overdue(now, now - Duration::minutes(10)), 1);
        assert_eq!(days_overdue(now, now - Duration::hours(36)), 1);
    }

    #[test]
    fn floors_fractional_days() {
        let now = Utc::now();
        assert_eq!(days_overdue(now, now - Duration::hours(3 * 24 + 20)), 3);
    }
}
