use async_trait::async_trait;
use sqlx::{MySql, Pool};

use crate::database::MarkRepository;
use crate::domain::{MarkSet, NewStudent, StudentMark, SubMark};
use crate::error::ServiceError;

// row shapes as they come back from MySQL; the columns keep the legacy
// uppercase names
#[derive(sqlx::FromRow)]
#[sqlx(rename_all = "UPPERCASE")]
struct StudentMarkRow {
    id: u64,
    name: String,
    roll: String,
    jp: Option<i32>,
    ds: Option<i32>,
    vccf: Option<i32>,
    daa: Option<i32>,
    dpco: Option<i32>,
}

impl From<StudentMarkRow> for StudentMark {
    fn from(row: StudentMarkRow) -> Self {
        StudentMark {
            id: row.id,
            name: row.name,
            roll: row.roll,
            marks: MarkSet {
                jp: row.jp,
                ds: row.ds,
                vccf: row.vccf,
                daa: row.daa,
                dpco: row.dpco,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
#[sqlx(rename_all = "UPPERCASE")]
struct SubMarkRow {
    roll: String,
    name: Option<String>,
    jp: Option<i32>,
}

impl From<SubMarkRow> for SubMark {
    fn from(row: SubMarkRow) -> Self {
        SubMark {
            roll: row.roll,
            name: row.name,
            jp: row.jp,
        }
    }
}

pub struct MySqlRepository {
    pool: Pool<MySql>,
}

impl MySqlRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarkRepository for MySqlRepository {
    async fn list_students(&self) -> Result<Vec<StudentMark>, ServiceError> {
        let rows = sqlx::query_as::<_, StudentMarkRow>(
            "SELECT ID, NAME, ROLL, JP, DS, VCCF, DAA, DPCO FROM stdmark ORDER BY NAME",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentMark::from).collect())
    }

    async fn list_sub_marks(&self) -> Result<Vec<SubMark>, ServiceError> {
        let rows =
            sqlx::query_as::<_, SubMarkRow>("SELECT ROLL, NAME, JP FROM substd ORDER BY NAME")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(SubMark::from).collect())
    }

    async fn insert_student(&self, student: &NewStudent) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO stdmark (NAME, ROLL, JP, DS, VCCF, DAA, DPCO) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&student.name)
        .bind(&student.roll)
        .bind(student.marks.jp)
        .bind(student.marks.ds)
        .bind(student.marks.vccf)
        .bind(student.marks.daa)
        .bind(student.marks.dpco)
        .execute(&self.pool)
        .await
        .map_err(|err| ServiceError::classify_write(err, "Student"))?;

        Ok(result.last_insert_id())
    }

    async fn update_marks(&self, id: u64, marks: &MarkSet) -> Result<(), ServiceError> {
        let result =
            sqlx::query("UPDATE stdmark SET JP = ?, DS = ?, VCCF = ?, DAA = ?, DPCO = ? WHERE ID = ?")
                .bind(marks.jp)
                .bind(marks.ds)
                .bind(marks.vccf)
                .bind(marks.daa)
                .bind(marks.dpco)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("Student"));
        }

        Ok(())
    }

    async fn upsert_sub_mark(&self, sub: &SubMark) -> Result<(), ServiceError> {
        // it's important to have the db do the insert-or-update in one
        // statement; a read-then-write would race concurrent upserts for the
        // same roll
        sqlx::query(
            "INSERT INTO substd (ROLL, NAME, JP) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE NAME = VALUES(NAME), JP = VALUES(JP)",
        )
        .bind(&sub.roll)
        .bind(&sub.name)
        .bind(sub.jp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_student(&self, roll: &str) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM stdmark WHERE ROLL = ?")
            .bind(roll)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("Student"));
        }

        Ok(())
    }

    async fn delete_all_students(&self) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM stdmark").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete_sub_mark(&self, roll: &str) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM substd WHERE ROLL = ?")
            .bind(roll)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("Record"));
        }

        Ok(())
    }

    async fn delete_all_sub_marks(&self) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM substd").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}
