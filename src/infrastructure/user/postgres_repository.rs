//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;

use crate::domain::user::{Address, User, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Users live in the `users` table; their addresses in an owned
/// `addresses` table with `ON DELETE CASCADE`. A save rewrites the
/// address rows inside the same transaction as the user upsert.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_addresses(&self, user_id: i32) -> Result<Vec<Address>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, label, city, region
            FROM addresses
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load addresses: {}", e)))?;

        Ok(rows.iter().map(row_to_address).collect())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, last_name, email, username, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => {
                let addresses = self.load_addresses(id.value()).await?;
                Ok(Some(row_to_user(&row, addresses)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, last_name, email, username, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        match row {
            Some(row) => {
                let id: i32 = row.get("id");
                let addresses = self.load_addresses(id).await?;
                Ok(Some(row_to_user(&row, addresses)))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check username: {}", e)))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let user_rows = sqlx::query(
            r#"
            SELECT id, name, last_name, email, username, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let address_rows = sqlx::query(
            r#"
            SELECT user_id, id, label, city, region
            FROM addresses
            ORDER BY user_id, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list addresses: {}", e)))?;

        let mut addresses_by_user: HashMap<i32, Vec<Address>> = HashMap::new();

        for row in &address_rows {
            let user_id: i32 = row.get("user_id");
            addresses_by_user
                .entry(user_id)
                .or_default()
                .push(row_to_address(row));
        }

        let mut users = Vec::with_capacity(user_rows.len());

        for row in &user_rows {
            let id: i32 = row.get("id");
            let addresses = addresses_by_user.remove(&id).unwrap_or_default();
            users.push(row_to_user(row, addresses));
        }

        Ok(users)
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, name, last_name, email, username, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id().value())
        .bind(user.name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.username())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::username_in_use(user.username())
            } else {
                DomainError::storage(format!("Failed to save user: {}", e))
            }
        })?;

        sqlx::query("DELETE FROM addresses WHERE user_id = $1")
            .bind(user.id().value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to clear addresses: {}", e)))?;

        for address in user.addresses() {
            sqlx::query(
                r#"
                INSERT INTO addresses (user_id, id, label, city, region)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(user.id().value())
            .bind(address.id())
            .bind(address.label())
            .bind(address.city())
            .bind(address.region())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save address: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit save: {}", e)))?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        // Address rows go with the user via ON DELETE CASCADE
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow, addresses: Vec<Address>) -> User {
    let id: i32 = row.get("id");
    let name: String = row.get("name");
    let last_name: String = row.get("last_name");
    let email: String = row.get("email");
    let username: String = row.get("username");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    User::from_parts(
        UserId::new(id),
        name,
        last_name,
        email,
        username,
        addresses,
        created_at,
        updated_at,
    )
}

fn row_to_address(row: &sqlx::postgres::PgRow) -> Address {
    let id: i32 = row.get("id");
    let label: String = row.get("label");
    let city: String = row.get("city");
    let region: String = row.get("region");

    Address::new(id, label, city, region)
}
