//! Student model and lookup view

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::fine::Fine;

/// Student record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    /// University-issued identifier (NetID)
    pub net_id: String,
    pub name: String,
    pub email: Option<String>,
}

/// Search result used by the fine workflow: the student plus their fines
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentLookup {
    pub id: i32,
    pub net_id: String,
    pub name: String,
    pub fines: Vec<Fine>,
}

impl StudentLookup {
    pub fn new(student: Student, fines: Vec<Fine>) -> Self {
        Self {
            id: student.id,
            net_id: student.net_id,
            name: student.name,
            fines,
        }
    }
}
