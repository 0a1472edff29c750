//! Domain layer - entities, business rules, and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{Address, User, UserId, UserRepository};
