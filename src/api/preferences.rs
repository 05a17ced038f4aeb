//! Notification preferences endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::preferences::{NotificationPreferences, UpdatePreferences},
};

/// Get a student's notification preferences
#[utoipa::path(
    get,
    path = "/students/{id}/preferences",
    tag = "preferences",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Stored preferences, or defaults when never saved", body = NotificationPreferences),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_preferences(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
) -> AppResult<Json<NotificationPreferences>> {
    let prefs = state.services.preferences.get(student_id).await?;
    Ok(Json(prefs))
}

/// Save a student's notification preferences (whole struct, all-or-nothing)
#[utoipa::path(
    put,
    path = "/students/{id}/preferences",
    tag = "preferences",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdatePreferences,
    responses(
        (status = 200, description = "Preferences saved", body = NotificationPreferences),
        (status = 400, description = "Unknown reminder timing"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn save_preferences(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
    Json(update): Json<UpdatePreferences>,
) -> AppResult<Json<NotificationPreferences>> {
    let saved = state.services.preferences.save(student_id, update).await?;
    Ok(Json(saved))
}
