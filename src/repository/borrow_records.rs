//! Borrow records repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::{
        borrow_record::{BorrowRecord, BorrowStatus, CreateBorrowRecord},
        overdue::{self, OverdueEntry},
    },
};

#[derive(Clone)]
pub struct BorrowRecordsRepository {
    pool: Pool<Postgres>,
}

fn record_from_row(row: &PgRow) -> AppResult<BorrowRecord> {
    let status_str: String = row.get("status");
    let status = BorrowStatus::parse(&status_str).ok_or_else(|| {
        AppError::Internal(format!("Unknown borrow status '{}' in database", status_str))
    })?;

    Ok(BorrowRecord {
        id: row.get("id"),
        student_id: row.get("student_id"),
        item_name: row.get("item_name"),
        location: row.get("location"),
        status,
        pickup_date: row.get("pickup_date"),
        due_date: row.get("due_date"),
        returned_date: row.get("returned_date"),
        created_date: row.get("created_date"),
    })
}

impl BorrowRecordsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get borrow record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowRecord> {
        let row = sqlx::query("SELECT * FROM borrow_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchRecord,
                    format!("Borrow record with id {} not found", id),
                )
            })?;

        record_from_row(&row)
    }

    /// All records owned by a student, every status
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<BorrowRecord>> {
        let rows = sqlx::query(
            "SELECT * FROM borrow_records WHERE student_id = $1 ORDER BY created_date",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    /// Create a new reservation
    pub async fn create(&self, record: &CreateBorrowRecord) -> AppResult<BorrowRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO borrow_records (student_id, item_name, location, status, pickup_date, created_date)
            VALUES ($1, $2, $3, 'reserved', $4, NOW())
            RETURNING *
            "#,
        )
        .bind(record.student_id)
        .bind(&record.item_name)
        .bind(&record.location)
        .bind(record.pickup_date)
        .fetch_one(&self.pool)
        .await?;

        record_from_row(&row)
    }

    /// Reserved -> Active, stamping the due date.
    /// The status predicate in the UPDATE makes the transition atomic.
    pub async fn pickup(&self, id: i32, due_date: DateTime<Utc>) -> AppResult<BorrowRecord> {
        let row = sqlx::query(
            r#"
            UPDATE borrow_records
            SET status = 'active', due_date = $2
            WHERE id = $1 AND status = 'reserved'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(due_date)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => record_from_row(&row),
            None => Err(self.state_conflict(id, "pick up").await?),
        }
    }

    /// Shift an active record's due date forward by the given number of
    /// days. One guarded statement: concurrent extends each add their own
    /// increment instead of collapsing into one.
    pub async fn extend(&self, id: i32, days: i64) -> AppResult<BorrowRecord> {
        let row = sqlx::query(
            r#"
            UPDATE borrow_records
            SET due_date = due_date + make_interval(days => $2)
            WHERE id = $1 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(days as i32)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => record_from_row(&row),
            None => Err(self.state_conflict(id, "extend").await?),
        }
    }

    /// Active -> Returned, stamping the return date
    pub async fn return_record(&self, id: i32) -> AppResult<BorrowRecord> {
        let row = sqlx::query(
            r#"
            UPDATE borrow_records
            SET status = 'returned', returned_date = NOW()
            WHERE id = $1 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => record_from_row(&row),
            None => Err(self.state_conflict(id, "return").await?),
        }
    }

    /// Cancel a reservation. Only Reserved records can be removed.
    pub async fn cancel(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrow_records WHERE id = $1 AND status = 'reserved'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.state_conflict(id, "cancel").await?);
        }

        Ok(())
    }

    /// Active records past their due date, joined with their owner,
    /// oldest overdue first
    pub async fn list_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<OverdueEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.item_name, b.due_date, s.net_id, s.name
            FROM borrow_records b
            JOIN students s ON b.student_id = s.id
            WHERE b.status = 'active' AND b.due_date < $1
            ORDER BY b.due_date
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .iter()
            .map(|row| {
                let due_date: DateTime<Utc> = row.get("due_date");
                OverdueEntry {
                    record_id: row.get("id"),
                    item_name: row.get("item_name"),
                    student_net_id: row.get("net_id"),
                    student_name: row.get("name"),
                    due_date,
                    days_overdue: overdue::days_overdue(now, due_date),
                }
            })
            .collect();

        Ok(entries)
    }

    /// A guarded mutation matched no row: report NotFound for a missing
    /// record, otherwise a conflict naming the record's current state.
    async fn state_conflict(&self, id: i32, action: &str) -> AppResult<AppError> {
        let current = self.get_by_id(id).await?;
        Ok(AppError::StateConflict(format!(
            "Cannot {} a {} record",
            action,
            current.status.as_str()
        )))
    }
}
