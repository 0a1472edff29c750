//! User domain
//!
//! Domain types and traits for user management: the user entity and its
//! owned addresses, username validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Address, User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
