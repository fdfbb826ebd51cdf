pub mod model;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use model::{CreateStudentRequest, CreateStudentResponse, StudentMarkJson, UpdateMarksRequest};

use crate::AppState;
use crate::domain::{MarkSet, NewStudent};
use crate::error::ServiceError;
use crate::features::MessageResponse;

pub fn students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students_handler))
        .route("/create", post(create_student_handler))
        .route("/update/{id}", put(update_marks_handler))
        .route("/delete/{roll}", delete(delete_student_handler))
        .route("/delete-all", delete(delete_all_students_handler))
}

async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentMarkJson>>, ServiceError> {
    let students = state.repo.list_students().await?;
    tracing::info!("fetched {} students", students.len());

    Ok(Json(
        students.into_iter().map(StudentMarkJson::from).collect(),
    ))
}

async fn create_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<CreateStudentResponse>, ServiceError> {
    let student: NewStudent = payload.try_into()?;

    let id = state.repo.insert_student(&student).await?;
    tracing::info!("inserted student {} ({})", student.name, student.roll);

    Ok(Json(CreateStudentResponse {
        message: "Success".to_string(),
        id,
    }))
}

async fn update_marks_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateMarksRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let marks = MarkSet::from(payload);
    state.repo.update_marks(id, &marks).await?;

    Ok(Json(MessageResponse::success()))
}

async fn delete_student_handler(
    State(state): State<AppState>,
    Path(roll): Path<String>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.repo.delete_student(&roll).await?;
    tracing::info!("deleted student {roll}");

    Ok(Json(MessageResponse::success()))
}

async fn delete_all_students_handler(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let removed = state.repo.delete_all_students().await?;
    tracing::info!("deleted all {removed} student records");

    Ok(Json(MessageResponse::success()))
}
