//! Overdue tracking endpoints (staff)

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{overdue::OverdueEntry, student::StudentLookup},
    services::overdue::ReminderOutcome,
};

/// Reminder response
#[derive(Serialize, ToSchema)]
pub struct ReminderResponse {
    /// Borrow record ID
    pub record_id: i32,
    /// Delivery outcome: sent, channel_disabled, no_address or failed
    pub outcome: String,
    /// Status message
    pub message: String,
}

/// List overdue items
#[utoipa::path(
    get,
    path = "/overdue",
    tag = "overdue",
    responses(
        (status = 200, description = "Overdue entries, oldest first", body = Vec<OverdueEntry>)
    )
)]
pub async fn list_overdue(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<OverdueEntry>>> {
    let entries = state.services.overdue.list().await?;
    Ok(Json(entries))
}

/// Send an overdue reminder to the record's owner.
/// Idempotent; does not change record state.
#[utoipa::path(
    post,
    path = "/overdue/{id}/remind",
    tag = "overdue",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Reminder processed", body = ReminderResponse),
        (status = 404, description = "Record not found")
    )
)]
pub async fn send_reminder(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<ReminderResponse>> {
    let outcome = state.services.overdue.send_reminder(record_id).await?;

    let (outcome, message) = match outcome {
        ReminderOutcome::Sent => ("sent", "Reminder sent"),
        ReminderOutcome::ChannelDisabled => {
            ("channel_disabled", "Student has email reminders disabled")
        }
        ReminderOutcome::NoAddress => ("no_address", "Student has no email address on file"),
        ReminderOutcome::Failed => ("failed", "Reminder could not be delivered"),
    };

    Ok(Json(ReminderResponse {
        record_id,
        outcome: outcome.to_string(),
        message: message.to_string(),
    }))
}

/// Resolve the record's owner to seed the fine workflow
#[utoipa::path(
    get,
    path = "/overdue/{id}/fine-target",
    tag = "overdue",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Student with their fines", body = StudentLookup),
        (status = 404, description = "Record not found")
    )
)]
pub async fn fine_target(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<StudentLookup>> {
    let lookup = state.services.overdue.fine_target(record_id).await?;
    Ok(Json(lookup))
}
