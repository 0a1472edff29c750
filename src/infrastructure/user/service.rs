//! User service - business rules over the storage gateway

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{validate_username, Address, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub addresses: Vec<Address>,
}

/// Request for updating an existing user
///
/// Only name, last name, and email are mutable; id and username are fixed
/// at creation. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// User service applying validation and orchestrating the repository
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    /// Reserved usernames, stored lowercase; compared case-insensitively
    reserved_usernames: Vec<String>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, reserved_usernames: Vec<String>) -> Self {
        let reserved_usernames = reserved_usernames
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();

        Self {
            repository,
            reserved_usernames,
        }
    }

    /// Get a user by id, failing if absent
    pub async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.repository
            .find_by_id(UserId::new(id))
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No user present with id = {}", id)))
    }

    /// Fetch all users; an empty store yields an empty list
    pub async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Get a user by username; absence is not an error
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_username(username).await
    }

    /// Check that a username may be assigned to a new user
    ///
    /// Fails if the username is reserved (case-insensitive) or already
    /// registered in the store.
    pub async fn check_username(&self, username: &str) -> Result<(), DomainError> {
        let lowered = username.to_lowercase();

        if self.reserved_usernames.iter().any(|r| *r == lowered) {
            return Err(DomainError::username_unavailable(username));
        }

        if self.repository.exists_by_username(username).await? {
            return Err(DomainError::username_in_use(username));
        }

        Ok(())
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.check_username(&request.username).await?;

        if self
            .repository
            .find_by_id(UserId::new(request.id))
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists(format!(
                "User with id {} already exists",
                request.id
            )));
        }

        let user = User::new(
            UserId::new(request.id),
            request.name,
            request.last_name,
            request.email,
            request.username,
            request.addresses,
        );

        debug!(id = %user.id(), username = %user.username(), "Creating user");

        self.repository.save(user).await
    }

    /// Update an existing user's name, last name, and email
    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<User, DomainError> {
        let mut user = self.get(id).await?;

        if let Some(name) = request.name {
            user.set_name(name);
        }

        if let Some(last_name) = request.last_name {
            user.set_last_name(last_name);
        }

        if let Some(email) = request.email {
            user.set_email(email);
        }

        debug!(id = %user.id(), "Updating user");

        self.repository.save(user).await
    }

    /// Delete a user by id, failing if absent
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if self
            .repository
            .find_by_id(UserId::new(id))
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(format!(
                "No user present with id = {}",
                id
            )));
        }

        debug!(id, "Deleting user");

        self.repository.delete_by_id(UserId::new(id)).await
    }
}
