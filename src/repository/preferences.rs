//! Notification preferences repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::preferences::{NotificationPreferences, ReminderTiming},
};

#[derive(Clone)]
pub struct PreferencesRepository {
    pool: Pool<Postgres>,
}

impl PreferencesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Stored preferences for a student, if any were ever saved
    pub async fn get(&self, student_id: i32) -> AppResult<Option<NotificationPreferences>> {
        let row = sqlx::query(
            r#"
            SELECT email_enabled, sms_enabled, app_enabled, reminder_timing
            FROM notification_preferences
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let timing_str: String = row.get("reminder_timing");
        let reminder_timing = ReminderTiming::parse(&timing_str).ok_or_else(|| {
            AppError::Internal(format!(
                "Unknown reminder timing '{}' in database",
                timing_str
            ))
        })?;

        Ok(Some(NotificationPreferences {
            email_enabled: row.get("email_enabled"),
            sms_enabled: row.get("sms_enabled"),
            app_enabled: row.get("app_enabled"),
            reminder_timing,
        }))
    }

    /// Persist the whole struct in one UPSERT. A single statement keeps the
    /// save all-or-nothing; a partial preference state is never observable.
    pub async fn save(
        &self,
        student_id: i32,
        prefs: &NotificationPreferences,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notification_preferences
                (student_id, email_enabled, sms_enabled, app_enabled, reminder_timing)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (student_id) DO UPDATE SET
                email_enabled = EXCLUDED.email_enabled,
                sms_enabled = EXCLUDED.sms_enabled,
                app_enabled = EXCLUDED.app_enabled,
                reminder_timing = EXCLUDED.reminder_timing
            "#,
        )
        .bind(student_id)
        .bind(prefs.email_enabled)
        .bind(prefs.sms_enabled)
        .bind(prefs.app_enabled)
        .bind(prefs.reminder_timing.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
