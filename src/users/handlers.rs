use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    response::{ApiResponse, Payload},
    state::AppState,
};

use super::dto::{CreateUserRequest, ListUsersQuery};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse>), (StatusCode, String)> {
    // Decoded straight from the body bytes; the Content-Type header is not
    // consulted. Undecodable bodies get a plain-text rejection, not the
    // envelope.
    let payload: CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "malformed create body");
        (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
    })?;

    if payload.name.is_empty() || payload.email.is_empty() {
        warn!("create rejected: missing name or email");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::fail("Name and email are required")),
        ));
    }

    let user = state.store.insert(payload.name, payload.email).await;
    info!(user_id = %user.id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User added successfully", Payload::User(user))),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> (StatusCode, Json<ApiResponse>) {
    // An empty ?name= is treated the same as no filter.
    if let Some(name) = query.name.as_deref().filter(|n| !n.is_empty()) {
        let found = state.store.find_by_name(name).await;
        if found.is_empty() {
            warn!(name, "no users matched name filter");
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::fail("User not found")),
            );
        }
        return (
            StatusCode::OK,
            Json(ApiResponse::ok("User found", Payload::Users(found))),
        );
    }

    let users = state.store.all().await;
    let message = format!("Found {} users", users.len());
    (
        StatusCode::OK,
        Json(ApiResponse::ok(message, Payload::Users(users))),
    )
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ApiResponse>) {
    match state.store.find_by_id(&id).await {
        Some(user) => (
            StatusCode::OK,
            Json(ApiResponse::ok("User found", Payload::User(user))),
        ),
        None => {
            warn!(%id, "user not found");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::fail("User not found")),
            )
        }
    }
}
