use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ApiError;
use crate::models::*;
use crate::repository::Repository;
use crate::validation::validate_create_group;

/// Parse a group id from a path segment. Anything that is not an unsigned
/// integer cannot name a group, so it is reported as not found.
fn parse_group_id(raw: &str) -> Result<GroupId, ApiError> {
    raw.trim()
        .parse::<GroupId>()
        .map_err(|_| ApiError::group_not_found(raw))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Groups
// ============================================================

pub async fn list_groups(State(repo): State<Repository>) -> Json<Vec<GroupSummary>> {
    let groups = repo.list_group_summaries();
    tracing::debug!(count = groups.len(), "Listing groups");
    Json(groups)
}

pub async fn create_group(
    State(repo): State<Repository>,
    Json(input): Json<CreateGroupInput>,
) -> Result<Json<GroupSummary>, ApiError> {
    validate_create_group(&input)?;

    let summary = repo.create_group(&input.group_name, &input.members);
    tracing::info!(
        group_id = summary.id,
        members = summary.members.len(),
        "Created group {:?}",
        summary.group_name
    );
    Ok(Json(summary))
}

pub async fn get_group(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    let id = parse_group_id(&id)?;
    repo.find_group(id)
        .map(Json)
        .ok_or_else(|| ApiError::group_not_found(id))
}

pub async fn delete_group(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_group_id(&id)?;

    if repo.find_group(id).is_none() {
        return Err(ApiError::group_not_found(id));
    }

    // Existence was just confirmed; a failed delete here is a repository bug.
    if !repo.delete_group(id) {
        return Err(ApiError::delete_failed(id));
    }

    tracing::info!(group_id = id, "Deleted group");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Students
// ============================================================

pub async fn list_students(State(repo): State<Repository>) -> Json<Vec<Student>> {
    let students = repo.list_all_students();
    tracing::debug!(count = students.len(), "Listing students");
    Json(students)
}
