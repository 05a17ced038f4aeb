//! Fines repository for database operations

use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::fine::{Fine, FineStatus, PaymentMethod},
};

#[derive(Clone)]
pub struct FinesRepository {
    pool: Pool<Postgres>,
}

fn fine_from_row(row: &PgRow) -> AppResult<Fine> {
    let status_str: String = row.get("status");
    let status = FineStatus::parse(&status_str).ok_or_else(|| {
        AppError::Internal(format!("Unknown fine status '{}' in database", status_str))
    })?;

    let paid_method = row
        .get::<Option<String>, _>("paid_method")
        .as_deref()
        .and_then(PaymentMethod::parse);

    Ok(Fine {
        id: row.get("id"),
        student_id: row.get("student_id"),
        reason: row.get("reason"),
        amount: row.get("amount"),
        status,
        created_date: row.get("created_date"),
        paid_date: row.get("paid_date"),
        paid_method,
    })
}

impl FinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get fine by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Fine> {
        let row = sqlx::query("SELECT * FROM fines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchFine, format!("Fine with id {} not found", id))
            })?;

        fine_from_row(&row)
    }

    /// All fines for a student, oldest first
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<Fine>> {
        let rows = sqlx::query("SELECT * FROM fines WHERE student_id = $1 ORDER BY created_date")
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(fine_from_row).collect()
    }

    /// Create an unpaid fine
    pub async fn create(&self, student_id: i32, reason: &str, amount: Decimal) -> AppResult<Fine> {
        let row = sqlx::query(
            r#"
            INSERT INTO fines (student_id, reason, amount, status, created_date)
            VALUES ($1, $2, $3, 'unpaid', NOW())
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(reason)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        fine_from_row(&row)
    }

    /// Unpaid -> Paid, inside one transaction with a row lock so a second
    /// concurrent payment observes the first and conflicts instead of
    /// double-writing.
    pub async fn record_payment(&self, id: i32, method: PaymentMethod) -> AppResult<Fine> {
        let mut tx = self.pool.begin().await?;

        let status_str: Option<String> =
            sqlx::query_scalar("SELECT status FROM fines WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let status_str = status_str
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchFine, format!("Fine with id {} not found", id))
            })?;

        if status_str != FineStatus::Unpaid.as_str() {
            return Err(AppError::StateConflict(format!(
                "Fine is already {}",
                status_str
            )));
        }

        let row = sqlx::query(
            r#"
            UPDATE fines
            SET status = 'paid', paid_date = NOW(), paid_method = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(method.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let fine = fine_from_row(&row)?;

        tx.commit().await?;

        Ok(fine)
    }
}
