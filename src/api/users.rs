//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ConfirmationResponse, CreateUserApiRequest, ListUsersResponse,
    UpdateUserApiRequest, UserResponse,
};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// GET /api/getUser/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id, "Getting user");

    let user = state.user_service.get(id).await.map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/getUsers
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.get_all().await.map_err(ApiError::from)?;

    let user_responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = user_responses.len();

    Ok(Json(ListUsersResponse {
        users: user_responses,
        total,
    }))
}

/// GET /api/getUserByUsername/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(username = %username, "Getting user by username");

    let user = state
        .user_service
        .get_by_username(&username)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("No user present with username = {}", username)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/addUser
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    debug!(id = request.id, username = %request.username, "Adding user");

    let service_request = CreateUserRequest {
        id: request.id,
        name: request.name,
        last_name: request.last_name,
        email: request.email,
        username: request.username,
        addresses: request.addresses.into_iter().map(Into::into).collect(),
    };

    let user = state
        .user_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ConfirmationResponse {
        message: "User added successfully".to_string(),
        id: user.id().value(),
    }))
}

/// PUT /api/updateUser
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    debug!(id = request.id, "Updating user");

    let service_request = UpdateUserRequest {
        name: request.name,
        last_name: request.last_name,
        email: request.email,
    };

    let user = state
        .user_service
        .update(request.id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ConfirmationResponse {
        message: "User updated successfully".to_string(),
        id: user.id().value(),
    }))
}

/// DELETE /api/deleteUser/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    debug!(id, "Deleting user");

    state.user_service.delete(id).await.map_err(ApiError::from)?;

    Ok(Json(ConfirmationResponse {
        message: "User deleted successfully".to_string(),
        id,
    }))
}
