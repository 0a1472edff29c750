use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User management API
        .route("/api/getUser/{id}", get(users::get_user))
        .route("/api/getUsers", get(users::list_users))
        .route(
            "/api/getUserByUsername/{username}",
            get(users::get_user_by_username),
        )
        .route("/api/addUser", post(users::add_user))
        .route("/api/updateUser", put(users::update_user))
        .route("/api/deleteUser/{id}", delete(users::delete_user))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
