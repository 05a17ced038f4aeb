//! Notification preferences service

use crate::{
    error::{AppError, AppResult},
    models::preferences::{NotificationPreferences, ReminderTiming, UpdatePreferences},
    repository::Repository,
};

#[derive(Clone)]
pub struct PreferencesService {
    repository: Repository,
}

impl PreferencesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Stored preferences, or the defaults when never saved
    pub async fn get(&self, student_id: i32) -> AppResult<NotificationPreferences> {
        // Verify student exists
        self.repository.students.get_by_id(student_id).await?;

        Ok(self
            .repository
            .preferences
            .get(student_id)
            .await?
            .unwrap_or_default())
    }

    /// Persist the whole struct, all-or-nothing.
    /// Validation happens before any write.
    pub async fn save(
        &self,
        student_id: i32,
        update: UpdatePreferences,
    ) -> AppResult<NotificationPreferences> {
        let reminder_timing = ReminderTiming::parse(&update.reminder_timing).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown reminder timing '{}', expected 1hour, 24hours, 48hours or 1week",
                update.reminder_timing
            ))
        })?;

        // Verify student exists
        self.repository.students.get_by_id(student_id).await?;

        let prefs = NotificationPreferences {
            email_enabled: update.email_enabled,
            sms_enabled: update.sms_enabled,
            app_enabled: update.app_enabled,
            reminder_timing,
        };

        self.repository.preferences.save(student_id, &prefs).await?;

        Ok(prefs)
    }
}
