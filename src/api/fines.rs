//! Fine management endpoints (staff)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        fine::{CreateFine, Fine},
        student::StudentLookup,
    },
};

/// Student search query
#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// NetID or full name
    pub q: String,
}

/// Apply fine request
#[derive(Deserialize, ToSchema)]
pub struct ApplyFineRequest {
    /// Reason for the fine
    pub reason: String,
    /// Amount, must be greater than zero
    #[schema(value_type = String, example = "12.00")]
    pub amount: Decimal,
}

/// Record payment request
#[derive(Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    /// Payment method: cash, card or online
    pub method: String,
}

/// Search for a student by NetID or name
#[utoipa::path(
    get,
    path = "/students/search",
    tag = "fines",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching student with their fines", body = StudentLookup),
        (status = 404, description = "No matching student")
    )
)]
pub async fn search_students(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<StudentLookup>> {
    let lookup = state.services.fines.search_student(&query.q).await?;
    Ok(Json(lookup))
}

/// List a student's fines
#[utoipa::path(
    get,
    path = "/students/{id}/fines",
    tag = "fines",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student's fines, oldest first", body = Vec<Fine>),
        (status = 404, description = "Student not found")
    )
)]
pub async fn list_student_fines(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
) -> AppResult<Json<Vec<Fine>>> {
    let fines = state.services.fines.list_student_fines(student_id).await?;
    Ok(Json(fines))
}

/// Apply a new fine against a student
#[utoipa::path(
    post,
    path = "/students/{id}/fines",
    tag = "fines",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = ApplyFineRequest,
    responses(
        (status = 201, description = "Fine created", body = Fine),
        (status = 400, description = "Missing reason or non-positive amount"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn apply_fine(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
    Json(request): Json<ApplyFineRequest>,
) -> AppResult<(StatusCode, Json<Fine>)> {
    let fine = state
        .services
        .fines
        .apply_fine(
            student_id,
            CreateFine {
                reason: request.reason,
                amount: request.amount,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(fine)))
}

/// Record a payment against an unpaid fine
#[utoipa::path(
    post,
    path = "/fines/{id}/payment",
    tag = "fines",
    params(
        ("id" = i32, Path, description = "Fine ID")
    ),
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = Fine),
        (status = 400, description = "Unknown payment method"),
        (status = 404, description = "Fine not found"),
        (status = 409, description = "Fine is already paid")
    )
)]
pub async fn record_payment(
    State(state): State<crate::AppState>,
    Path(fine_id): Path<i32>,
    Json(request): Json<RecordPaymentRequest>,
) -> AppResult<Json<Fine>> {
    let fine = state
        .services
        .fines
        .record_payment(fine_id, &request.method)
        .await?;

    Ok(Json(fine))
}
