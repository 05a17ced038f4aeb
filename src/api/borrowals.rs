//! Borrowal management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::borrow_record::{BorrowRecord, BorrowStatus, BorrowalShelves, CreateBorrowRecord},
};

/// Create borrowal (reservation) request
#[derive(Deserialize, ToSchema)]
pub struct CreateBorrowalRequest {
    /// Student ID
    pub student_id: i32,
    /// Equipment name
    pub item_name: String,
    /// Pickup location
    pub location: String,
    /// Planned pickup date (ISO 8601)
    pub pickup_date: DateTime<Utc>,
}

/// Response for mutating borrowal actions
#[derive(Serialize, ToSchema)]
pub struct BorrowalActionResponse {
    /// Record ID
    pub id: i32,
    /// Status after the action
    pub status: BorrowStatus,
    /// Due date, when the record is active
    pub due_date: Option<DateTime<Utc>>,
    /// Return date, once returned
    pub returned_date: Option<DateTime<Utc>>,
    /// Status message
    pub message: String,
}

impl BorrowalActionResponse {
    fn new(record: BorrowRecord, message: impl Into<String>) -> Self {
        Self {
            id: record.id,
            status: record.status,
            due_date: record.due_date,
            returned_date: record.returned_date,
            message: message.into(),
        }
    }
}

/// Get a student's borrowals, split into current / upcoming / history
#[utoipa::path(
    get,
    path = "/students/{id}/borrowals",
    tag = "borrowals",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student's borrowals", body = BorrowalShelves),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_borrowals(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
) -> AppResult<Json<BorrowalShelves>> {
    let shelves = state
        .services
        .borrowals
        .get_student_borrowals(student_id)
        .await?;
    Ok(Json(shelves))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/borrowals",
    tag = "borrowals",
    request_body = CreateBorrowalRequest,
    responses(
        (status = 201, description = "Reservation created", body = BorrowRecord),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn create_borrowal(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBorrowalRequest>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    let record = state
        .services
        .borrowals
        .create_reservation(CreateBorrowRecord {
            student_id: request.student_id,
            item_name: request.item_name,
            location: request.location,
            pickup_date: request.pickup_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Pick up a reserved item, starting the loan
#[utoipa::path(
    post,
    path = "/borrowals/{id}/pickup",
    tag = "borrowals",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Item picked up", body = BorrowalActionResponse),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not reserved")
    )
)]
pub async fn pickup_borrowal(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<BorrowalActionResponse>> {
    let record = state.services.borrowals.pickup(record_id).await?;

    Ok(Json(BorrowalActionResponse::new(
        record,
        "Item picked up",
    )))
}

/// Extend an active loan's due date
#[utoipa::path(
    post,
    path = "/borrowals/{id}/extend",
    tag = "borrowals",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Due date extended", body = BorrowalActionResponse),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not active")
    )
)]
pub async fn extend_borrowal(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<BorrowalActionResponse>> {
    let record = state.services.borrowals.extend(record_id).await?;

    Ok(Json(BorrowalActionResponse::new(
        record,
        "Due date extended",
    )))
}

/// Return a borrowed item
#[utoipa::path(
    post,
    path = "/borrowals/{id}/return",
    tag = "borrowals",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Item returned", body = BorrowalActionResponse),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not active")
    )
)]
pub async fn return_borrowal(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<BorrowalActionResponse>> {
    let record = state.services.borrowals.return_record(record_id).await?;

    Ok(Json(BorrowalActionResponse::new(record, "Item returned")))
}

/// Cancel a reservation
#[utoipa::path(
    delete,
    path = "/borrowals/{id}",
    tag = "borrowals",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not reserved")
    )
)]
pub async fn cancel_borrowal(
    State(state): State<crate::AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.borrowals.cancel(record_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
