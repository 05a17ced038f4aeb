//! Repository layer for database operations

pub mod borrow_records;
pub mod fines;
pub mod preferences;
pub mod students;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub students: students::StudentsRepository,
    pub borrow_records: borrow_records::BorrowRecordsRepository,
    pub fines: fines::FinesRepository,
    pub preferences: preferences::PreferencesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            students: students::StudentsRepository::new(pool.clone()),
            borrow_records: borrow_records::BorrowRecordsRepository::new(pool.clone()),
            fines: fines::FinesRepository::new(pool.clone()),
            preferences: preferences::PreferencesRepository::new(pool.clone()),
            pool,
        }
    }

    /// Cheap connectivity probe used by the readiness endpoint
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
