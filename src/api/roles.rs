//! Role entry endpoint (landing page dispatch)

use axum::{extract::Path, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Landing destination for a selected role
#[derive(Serialize, ToSchema)]
pub struct RoleEntry {
    /// Selected role: student or staff
    pub role: String,
    /// Front-end path the role lands on
    pub landing_path: String,
}

/// Pure dispatch; no state is read or mutated.
fn dispatch(role: &str) -> Option<RoleEntry> {
    let landing_path = match role {
        "student" => "/student/borrowals",
        "staff" => "/staff/overdue",
        _ => return None,
    };

    Some(RoleEntry {
        role: role.to_string(),
        landing_path: landing_path.to_string(),
    })
}

/// Resolve the landing destination for a role
#[utoipa::path(
    get,
    path = "/roles/{role}",
    tag = "roles",
    params(
        ("role" = String, Path, description = "student or staff")
    ),
    responses(
        (status = 200, description = "Landing destination", body = RoleEntry),
        (status = 400, description = "Unknown role")
    )
)]
pub async fn select_role(Path(role): Path<String>) -> AppResult<Json<RoleEntry>> {
    dispatch(&role)
        .map(Json)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", role)))
}
