//! Borrowal management service

use chrono::{Duration, Utc};

use crate::{
    config::BorrowingConfig,
    error::{AppError, AppResult},
    models::borrow_record::{BorrowRecord, BorrowalShelves, CreateBorrowRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowalsService {
    repository: Repository,
    policy: BorrowingConfig,
}

impl BorrowalsService {
    pub fn new(repository: Repository, policy: BorrowingConfig) -> Self {
        Self { repository, policy }
    }

    /// A student's borrowals split into current / upcoming / history
    pub async fn get_student_borrowals(&self, student_id: i32) -> AppResult<BorrowalShelves> {
        // Verify student exists
        self.repository.students.get_by_id(student_id).await?;

        let records = self
            .repository
            .borrow_records
            .list_for_student(student_id)
            .await?;

        Ok(BorrowalShelves::partition(records))
    }

    /// Create a reservation
    pub async fn create_reservation(&self, record: CreateBorrowRecord) -> AppResult<BorrowRecord> {
        if record.item_name.trim().is_empty() {
            return Err(AppError::Validation("Item name is required".to_string()));
        }
        if record.location.trim().is_empty() {
            return Err(AppError::Validation("Location is required".to_string()));
        }

        // Verify student exists
        self.repository.students.get_by_id(record.student_id).await?;

        self.repository.borrow_records.create(&record).await
    }

    /// Pick up a reserved item, starting the loan period
    pub async fn pickup(&self, record_id: i32) -> AppResult<BorrowRecord> {
        let due_date = Utc::now() + Duration::days(self.policy.loan_days);
        self.repository.borrow_records.pickup(record_id, due_date).await
    }

    /// Shift an active record's due date forward by the configured increment
    pub async fn extend(&self, record_id: i32) -> AppResult<BorrowRecord> {
        self.repository
            .borrow_records
            .extend(record_id, self.policy.extension_days)
            .await
    }

    /// Return an active item
    pub async fn return_record(&self, record_id: i32) -> AppResult<BorrowRecord> {
        self.repository.borrow_records.return_record(record_id).await
    }

    /// Cancel a reservation
    pub async fn cancel(&self, record_id: i32) -> AppResult<()> {
        self.repository.borrow_records.cancel(record_id).await
    }
}
