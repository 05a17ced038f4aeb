//! Fine management service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        fine::{CreateFine, Fine, PaymentMethod},
        student::StudentLookup,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct FinesService {
    repository: Repository,
}

impl FinesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve a NetID-or-name query, with the student's fines attached
    pub async fn search_student(&self, query: &str) -> AppResult<StudentLookup> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation("Search query is required".to_string()));
        }

        let student = self.repository.students.search(query).await?;
        let fines = self.repository.fines.list_for_student(student.id).await?;

        Ok(StudentLookup::new(student, fines))
    }

    /// A student's fines, oldest first
    pub async fn list_student_fines(&self, student_id: i32) -> AppResult<Vec<Fine>> {
        // Verify student exists
        self.repository.students.get_by_id(student_id).await?;
        self.repository.fines.list_for_student(student_id).await
    }

    /// Apply a fine against a student. Validation happens before any write.
    pub async fn apply_fine(&self, student_id: i32, fine: CreateFine) -> AppResult<Fine> {
        if fine.amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Fine amount must be greater than zero".to_string(),
            ));
        }
        if fine.reason.trim().is_empty() {
            return Err(AppError::Validation("Fine reason is required".to_string()));
        }

        // Verify student exists
        self.repository.students.get_by_id(student_id).await?;

        self.repository
            .fines
            .create(student_id, fine.reason.trim(), fine.amount)
            .await
    }

    /// Record a payment against an unpaid fine
    pub async fn record_payment(&self, fine_id: i32, method: &str) -> AppResult<Fine> {
        let method = PaymentMethod::parse(method).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown payment method '{}', expected cash, card or online",
                method
            ))
        })?;

        self.repository.fines.record_payment(fine_id, method).await
    }
}
