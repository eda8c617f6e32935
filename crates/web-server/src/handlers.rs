use crate::{error::ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_types::{Student, StudentDraft};
use serde_json::{json, Value};
use std::sync::Arc;

/// # GET /students
///
/// Fetches every student. An empty roster is an empty JSON array.
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.students.list_all().await?;
    Ok(Json(students))
}

/// # POST /students
///
/// Validates the body, persists a new student, and responds 201 with the
/// stored record (including its database-assigned id). A rejected body never
/// reaches the repository.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let draft = StudentDraft::validate(&body)?;
    let student = state.students.insert(&draft).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// # GET /students/:id
pub async fn get_student(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Student>, ApiError> {
    let student = state.students.get_by_id(id).await?;
    Ok(Json(student))
}

/// # PUT /students/:id
///
/// Full overwrite of every field; no partial merge, no upsert. Responds with
/// the stored record, or 404 if the id does not exist.
pub async fn update_student(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Student>, ApiError> {
    let draft = StudentDraft::validate(&body)?;
    let student = state.students.update_by_id(id, &draft).await?;
    Ok(Json(student))
}

/// # DELETE /students/:id
///
/// Hard delete. Responds with a confirmation message, or 404 if the id does
/// not exist (including a second delete of the same id).
pub async fn delete_student(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    state.students.delete_by_id(id).await?;
    Ok(Json(json!({
        "message": format!("Student {id} has been deleted")
    })))
}
