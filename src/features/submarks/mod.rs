pub mod model;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use model::{SubMarkJson, UpsertSubMarkRequest};

use crate::AppState;
use crate::domain::SubMark;
use crate::error::ServiceError;
use crate::features::MessageResponse;

pub fn sub_marks_router() -> Router<AppState> {
    Router::new()
        .route("/jpstudent", get(list_sub_marks_handler))
        .route("/createjp", post(upsert_sub_mark_handler))
        .route("/deletejp/{roll}", delete(delete_sub_mark_handler))
        .route("/delete-alljp", delete(delete_all_sub_marks_handler))
}

async fn list_sub_marks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubMarkJson>>, ServiceError> {
    let sub_marks = state.repo.list_sub_marks().await?;
    tracing::info!("fetched {} jp records", sub_marks.len());

    Ok(Json(sub_marks.into_iter().map(SubMarkJson::from).collect()))
}

async fn upsert_sub_mark_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSubMarkRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let sub: SubMark = payload.try_into()?;

    state.repo.upsert_sub_mark(&sub).await?;
    tracing::info!("upserted jp record for {}", sub.roll);

    Ok(Json(MessageResponse::success()))
}

async fn delete_sub_mark_handler(
    State(state): State<AppState>,
    Path(roll): Path<String>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.repo.delete_sub_mark(&roll).await?;
    tracing::info!("deleted jp record {roll}");

    Ok(Json(MessageResponse::success()))
}

async fn delete_all_sub_marks_handler(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let removed = state.repo.delete_all_sub_marks().await?;
    tracing::info!("deleted all {removed} jp records");

    Ok(Json(MessageResponse::success()))
}
