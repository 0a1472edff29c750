//! User infrastructure module
//!
//! Implementations of the user storage gateway (in-memory and PostgreSQL)
//! and the user service that applies the business rules on top of it.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
