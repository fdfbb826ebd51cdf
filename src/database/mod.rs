use async_trait::async_trait;

use crate::domain::{MarkSet, NewStudent, StudentMark, SubMark};
use crate::error::ServiceError;

pub mod mysql;

// a MarkRepository can be shared between concurrent request handlers
// sqlx::Pool is thread safe
// generic interface over the two mark tables, db specific implementation in
// "mysql.rs"
#[async_trait]
pub trait MarkRepository: Send + Sync {
    async fn list_students(&self) -> Result<Vec<StudentMark>, ServiceError>;
    async fn list_sub_marks(&self) -> Result<Vec<SubMark>, ServiceError>;

    // write operations
    async fn insert_student(&self, student: &NewStudent) -> Result<u64, ServiceError>;
    async fn update_marks(&self, id: u64, marks: &MarkSet) -> Result<(), ServiceError>;
    async fn upsert_sub_mark(&self, sub: &SubMark) -> Result<(), ServiceError>;
    async fn delete_student(&self, roll: &str) -> Result<(), ServiceError>;
    async fn delete_all_students(&self) -> Result<u64, ServiceError>;
    async fn delete_sub_mark(&self, roll: &str) -> Result<(), ServiceError>;
    async fn delete_all_sub_marks(&self) -> Result<u64, ServiceError>;

    // liveness probe for the health endpoint
    async fn ping(&self) -> Result<(), ServiceError>;
}
