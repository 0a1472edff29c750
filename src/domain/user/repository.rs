//! User repository trait - the storage gateway contract

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Uniqueness of ids and usernames is ultimately enforced by the backing
/// store; the service layer only pre-checks.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Find a user by their id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by their username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a username is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// Fetch all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a user (insert or update) and return the stored record
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user by id
    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError>;
}
