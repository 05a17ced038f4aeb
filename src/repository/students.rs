//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::student::Student,
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get student by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT id, net_id, name, email FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchStudent,
                    format!("Student with id {} not found", id),
                )
            })
    }

    /// Resolve a NetID-or-name query to at most one student.
    /// NetID match (case-insensitive, exact) wins over a name match.
    pub async fn search(&self, query: &str) -> AppResult<Student> {
        if let Some(student) = sqlx::query_as::<_, Student>(
            "SELECT id, net_id, name, email FROM students WHERE LOWER(net_id) = LOWER($1)",
        )
        .bind(query)
        .fetch_optional(&self.pool)
        .await?
        {
            return Ok(student);
        }

        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, net_id, name, email FROM students
            WHERE LOWER(name) = LOWER($1)
            ORDER BY net_id
            LIMIT 1
            "#,
        )
        .bind(query)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                ErrorCode::NoSuchStudent,
                format!("No student matching '{}'", query),
            )
        })
    }
}
