//! Borrow record model and lifecycle rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a borrow record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BorrowStatus {
    Reserved,
    Active,
    Returned,
}

impl BorrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Reserved => "reserved",
            BorrowStatus::Active => "active",
            BorrowStatus::Returned => "returned",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reserved" => Some(BorrowStatus::Reserved),
            "active" => Some(BorrowStatus::Active),
            "returned" => Some(BorrowStatus::Returned),
            _ => None,
        }
    }

    /// Legal lifecycle transitions: Reserved -> Active -> Returned
    pub fn can_transition_to(self, next: BorrowStatus) -> bool {
        matches!(
            (self, next),
            (BorrowStatus::Reserved, BorrowStatus::Active)
                | (BorrowStatus::Active, BorrowStatus::Returned)
        )
    }
}

/// A single equipment loan (a "borrowal")
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowRecord {
    pub id: i32,
    pub student_id: i32,
    /// Equipment name as shown to the borrower
    pub item_name: String,
    /// Pickup / return desk location
    pub location: String,
    pub status: BorrowStatus,
    pub pickup_date: DateTime<Utc>,
    /// Set when the record becomes Active
    pub due_date: Option<DateTime<Utc>>,
    /// Set when the record is Returned
    pub returned_date: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
}

impl BorrowRecord {
    /// The date a listing displays for this record: pickup while reserved,
    /// due while active, return date once returned.
    pub fn display_date(&self) -> DateTime<Utc> {
        match self.status {
            BorrowStatus::Reserved => self.pickup_date,
            BorrowStatus::Active => self.due_date.unwrap_or(self.pickup_date),
            BorrowStatus::Returned => self.returned_date.unwrap_or(self.pickup_date),
        }
    }
}

/// Create borrow record (reservation) request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrowRecord {
    pub student_id: i32,
    pub item_name: String,
    pub location: String,
    pub pickup_date: DateTime<Utc>,
}

/// A student's borrowals split into the three listing tabs.
/// The lists are disjoint by construction: each record has exactly one status.
#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowalShelves {
    /// Active loans, by due date ascending
    pub current: Vec<BorrowRecord>,
    /// Reservations, by pickup date ascending
    pub upcoming: Vec<BorrowRecord>,
    /// Returned loans, by return date ascending
    pub history: Vec<BorrowRecord>,
}

impl BorrowalShelves {
    /// Partition records by status and sort each list by its display date.
    pub fn partition(records: Vec<BorrowRecord>) -> Self {
        let mut current = Vec::new();
        let mut upcoming = Vec::new();
        let mut history = Vec::new();

        for record in records {
            match record.status {
                BorrowStatus::Active => current.push(record),
                BorrowStatus::Reserved => upcoming.push(record),
                BorrowStatus::Returned => history.push(record),
            }
        }

        current.sort_by_key(BorrowRecord::display_date);
        upcoming.sort_by_key(BorrowRecord::display_date);
        history.sort_by_key(BorrowRecord::display_date);

        Self {
            current,
            upcoming,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(id: i32, status: BorrowStatus, offset_days: i64) -> BorrowRecord {
        let now = Utc::now();
        let date = now + Duration::days(offset_days);
        BorrowRecord {
            id,
            student_id: 1,
            item_name: format!("Item {}", id),
            location: "Tech Desk".to_string(),
            status,
            pickup_date: date,
            due_date: (status != BorrowStatus::Reserved).then_some(date),
            returned_date: (status == BorrowStatus::Returned).then_some(date),
            created_date: now,
        }
    }

    #[test]
    fn lifecycle_only_moves_forward() {
        assert!(BorrowStatus::Reserved.can_transition_to(BorrowStatus::Active));
        assert!(BorrowStatus::Active.can_transition_to(BorrowStatus::Returned));

        assert!(!BorrowStatus::Reserved.can_transition_to(BorrowStatus::Returned));
        assert!(!BorrowStatus::Active.can_transition_to(BorrowStatus::Reserved));
        assert!(!BorrowStatus::Returned.can_transition_to(BorrowStatus::Active));
        assert!(!BorrowStatus::Returned.can_transition_to(BorrowStatus::Reserved));
    }

    #[test]
    fn status_strings_round_trip() {
        for status in [
            BorrowStatus::Reserved,
            BorrowStatus::Active,
            BorrowStatus::Returned,
        ] {
            assert_eq!(BorrowStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BorrowStatus::parse("lost"), None);
    }

    #[test]
    fn partition_is_disjoint_and_sorted() {
        let records = vec![
            record(1, BorrowStatus::Active, 5),
            record(2, BorrowStatus::Reserved, 3),
            record(3, BorrowStatus::Active, 1),
            record(4, BorrowStatus::Returned, -10),
            record(5, BorrowStatus::Reserved, 8),
        ];

        let shelves = BorrowalShelves::partition(records);

        assert_eq!(
            shelves.current.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert_eq!(
            shelves.upcoming.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert_eq!(
            shelves.history.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![4]
        );
        assert_eq!(
            shelves.current.len() + shelves.upcoming.len() + shelves.history.len(),
            5
        );
    }
}
