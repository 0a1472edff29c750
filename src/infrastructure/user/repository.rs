//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Backs the `memory` storage backend; useful for local development
/// without a database.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    /// Index for username -> user id lookup
    username_index: Arc<RwLock<HashMap<String, i32>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            username_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut username_map = HashMap::new();

        for user in users {
            username_map.insert(user.username().to_string(), user.id().value());
            users_map.insert(user.id().value(), user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            username_index: Arc::new(RwLock::new(username_map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.value()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let username_index = self.username_index.read().await;

        if let Some(user_id) = username_index.get(username) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let username_index = self.username_index.read().await;
        Ok(username_index.contains_key(username))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by_key(|u| u.id().value());

        Ok(result)
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        let id = user.id().value();
        let username = user.username().to_string();

        // Insert-or-update: the username unique constraint only applies
        // against other users
        if let Some(&owner) = username_index.get(&username) {
            if owner != id {
                return Err(DomainError::username_in_use(username));
            }
        }

        if let Some(previous) = users.get(&id) {
            if previous.username() != username {
                username_index.remove(previous.username());
            }
        }

        username_index.insert(username, id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        if let Some(user) = users.remove(&id.value()) {
            username_index.remove(user.username());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Address;

    fn create_test_user(id: i32, username: &str) -> User {
        User::new(
            UserId::new(id),
            "Taha",
            "Unsal",
            "taha.f.unsal@gmail.com",
            username,
            vec![Address::new(1, "home", "Istanbul", "Turkey")],
        )
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(1, "taha.furkan");

        repo.save(user.clone()).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username(), "taha.furkan");
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(1, "taha.furkan");

        repo.save(user).await.unwrap();

        let retrieved = repo.find_by_username("taha.furkan").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id().value(), 1);

        let not_found = repo.find_by_username("nonexistent").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_username() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user(1, "taha.furkan")).await.unwrap();

        assert!(repo.exists_by_username("taha.furkan").await.unwrap());
        assert!(!repo.exists_by_username("zehra.unsal").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_updates_existing_user() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user(1, "taha.furkan");

        repo.save(user.clone()).await.unwrap();

        user.set_last_name("furkan");
        repo.save(user.clone()).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.last_name(), "furkan");

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_username_owned_by_another_user() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user(1, "taha.furkan")).await.unwrap();

        let result = repo.save(create_test_user(2, "taha.furkan")).await;
        assert!(matches!(result, Err(DomainError::UsernameInUse { .. })));
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_id() {
        let repo = InMemoryUserRepository::new();

        repo.save(create_test_user(2, "zehra.unsal")).await.unwrap();
        repo.save(create_test_user(1, "taha.furkan")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id().value(), 1);
        assert_eq!(all[1].id().value(), 2);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryUserRepository::new();
        let all = repo.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(1, "taha.furkan");

        repo.save(user.clone()).await.unwrap();
        repo.delete_by_id(user.id()).await.unwrap();

        assert!(repo.find_by_id(user.id()).await.unwrap().is_none());

        // Username should also be released
        assert!(!repo.exists_by_username("taha.furkan").await.unwrap());
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![
            create_test_user(1, "taha.furkan"),
            create_test_user(2, "zehra.unsal"),
        ]);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let user = repo.find_by_username("zehra.unsal").await.unwrap();
        assert!(user.is_some());
    }
}
