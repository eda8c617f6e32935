use crate::DbError;
use chrono::NaiveDate;
use core_types::{Student, StudentDraft};
use sqlx::FromRow;
use sqlx::MySqlPool;

/// The `StudentRepository` provides a high-level, application-specific
/// interface to the students table. It encapsulates all SQL queries and data
/// access logic, and it is the only component that touches the database.
///
/// Every operation checks a connection out of the shared pool for exactly the
/// duration of its statements; sqlx returns the connection to the pool on
/// every exit path, including errors. Every client-derived value, including
/// path-derived ids, goes through `.bind` — no value is ever interpolated
/// into query text.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: MySqlPool,
}

// This struct represents a row fetched from the students table.
#[derive(FromRow, Debug, Clone)]
struct StudentRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_num: String,
    start_date: Option<NaiveDate>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_num: row.phone_num,
            start_date: row.start_date,
        }
    }
}

impl StudentRepository {
    /// Creates a new `StudentRepository` with a shared database connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetches every student, in id order.
    ///
    /// An empty table yields an empty vector, not an error.
    pub async fn list_all(&self) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email, phone_num, start_date \
             FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    /// Fetches a single student by primary key.
    ///
    /// The id is unique, so exactly zero or one row can match; absence maps
    /// to `DbError::NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Student, DbError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email, phone_num, start_date \
             FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Student::from).ok_or(DbError::NotFound)
    }

    /// Persists a new student and returns the stored record.
    ///
    /// The id comes from the database (`last_insert_id`), and the returned
    /// record is read back from the table rather than echoed from the input,
    /// so the caller always sees the persisted truth. Insert and read-back
    /// share one transaction: the row cannot vanish between the two
    /// statements, so a successful create never reports the record missing.
    pub async fn insert(&self, draft: &StudentDraft) -> Result<Student, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO students (first_name, last_name, email, phone_num, start_date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.phone_num)
        .bind(draft.start_date)
        .execute(&mut *tx)
        .await?;

        // The row's own id column is the returned identity; last_insert_id
        // is only the lookup key, so no numeric narrowing happens here.
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email, phone_num, start_date \
             FROM students WHERE id = ?",
        )
        .bind(result.last_insert_id())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let student = Student::from(row);
        tracing::debug!(id = student.id, "Inserted student");
        Ok(student)
    }

    /// Overwrites every field of an existing student and returns the stored
    /// record.
    ///
    /// A single conditional UPDATE does the existence check and the write in
    /// one statement; a zero affected-row count means the id does not exist.
    /// There is no separate SELECT beforehand, so no window in which the row
    /// can disappear between check and write, and the read-back shares the
    /// same transaction as the write. No upsert: an unknown id is `NotFound`,
    /// never a new row.
    pub async fn update_by_id(&self, id: i64, draft: &StudentDraft) -> Result<Student, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE students \
             SET first_name = ?, last_name = ?, email = ?, phone_num = ?, start_date = ? \
             WHERE id = ?",
        )
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .bind(&draft.phone_num)
        .bind(draft.start_date)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, first_name, last_name, email, phone_num, start_date \
             FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Student::from(row))
    }

    /// Removes a student by primary key.
    ///
    /// Same single-statement pattern as `update_by_id`: the affected-row
    /// count is the existence check. Deleting an already-deleted id yields
    /// `NotFound`, never a crash, so the operation is idempotent in effect.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        tracing::debug!(id, "Deleted student");
        Ok(())
    }
}
