//! Overdue tracking service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{overdue::OverdueEntry, student::StudentLookup},
    repository::Repository,
};

use super::email::EmailService;

/// Outcome of a reminder request. Sending is side-effect-only and
/// idempotent; a skipped channel is still a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    Sent,
    ChannelDisabled,
    NoAddress,
    Failed,
}

#[derive(Clone)]
pub struct OverdueService {
    repository: Repository,
    email: EmailService,
}

impl OverdueService {
    pub fn new(repository: Repository, email: EmailService) -> Self {
        Self { repository, email }
    }

    /// All active records past their due date, as staff-facing entries
    pub async fn list(&self) -> AppResult<Vec<OverdueEntry>> {
        self.repository.borrow_records.list_overdue(Utc::now()).await
    }

    /// Notify the record's owner that the item is overdue.
    /// Does not change record state.
    pub async fn send_reminder(&self, record_id: i32) -> AppResult<ReminderOutcome> {
        let record = self.repository.borrow_records.get_by_id(record_id).await?;
        let student = self.repository.students.get_by_id(record.student_id).await?;

        let prefs = self
            .repository
            .preferences
            .get(student.id)
            .await?
            .unwrap_or_default();

        if !prefs.email_enabled {
            tracing::info!(
                "Skipping overdue reminder for record {}: email disabled for {}",
                record_id,
                student.net_id
            );
            return Ok(ReminderOutcome::ChannelDisabled);
        }

        let Some(address) = student.email.as_deref() else {
            tracing::warn!(
                "Skipping overdue reminder for record {}: no email address for {}",
                record_id,
                student.net_id
            );
            return Ok(ReminderOutcome::NoAddress);
        };

        let due_date = record.due_date.unwrap_or(record.pickup_date);
        match self
            .email
            .send_overdue_reminder(address, &student.name, &record.item_name, due_date)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Sent overdue reminder for record {} to {}",
                    record_id,
                    student.net_id
                );
                Ok(ReminderOutcome::Sent)
            }
            // Delivery failure does not fail the request; the reminder is
            // side-effect-only and can simply be retried.
            Err(e) => {
                tracing::warn!(
                    "Overdue reminder for record {} failed to send: {}",
                    record_id,
                    e
                );
                Ok(ReminderOutcome::Failed)
            }
        }
    }

    /// Resolve a record's owner for the fine workflow
    pub async fn fine_target(&self, record_id: i32) -> AppResult<StudentLookup> {
        let record = self.repository.borrow_records.get_by_id(record_id).await?;
        let student = self.repository.students.get_by_id(record.student_id).await?;
        let fines = self.repository.fines.list_for_student(student.id).await?;

        Ok(StudentLookup::new(student, fines))
    }
}
