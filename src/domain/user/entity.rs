//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier - assigned by the caller, unique across the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A postal address owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    id: i32,
    label: String,
    city: String,
    region: String,
}

impl Address {
    pub fn new(id: i32, label: impl Into<String>, city: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            city: city.into(),
            region: region.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// First name
    name: String,
    /// Last name
    last_name: String,
    /// Email address
    email: String,
    /// Username - unique, immutable after creation
    username: String,
    /// Addresses owned by this user
    addresses: Vec<Address>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        addresses: Vec<Address>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            username: username.into(),
            addresses,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a user from stored state, preserving its timestamps
    pub(crate) fn from_parts(
        id: UserId,
        name: String,
        last_name: String,
        email: String,
        username: String,
        addresses: Vec<Address>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            last_name,
            email,
            username,
            addresses,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators - id and username are immutable after creation

    /// Update the first name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Update the last name
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
        self.touch();
    }

    /// Update the email address
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i32, username: &str) -> User {
        User::new(
            UserId::new(id),
            "Taha",
            "Unsal",
            "taha.f.unsal@gmail.com",
            username,
            vec![
                Address::new(1, "home", "Istanbul", "Turkey"),
                Address::new(2, "work", "Istanbul", "Turkey"),
            ],
        )
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "taha.furkan");

        assert_eq!(user.id().value(), 1);
        assert_eq!(user.name(), "Taha");
        assert_eq!(user.last_name(), "Unsal");
        assert_eq!(user.email(), "taha.f.unsal@gmail.com");
        assert_eq!(user.username(), "taha.furkan");
        assert_eq!(user.addresses().len(), 2);
        assert_eq!(user.addresses()[0].label(), "home");
    }

    #[test]
    fn test_user_mutation_touches_timestamp() {
        let mut user = create_test_user(1, "taha.furkan");
        let original_updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.set_last_name("furkan");
        assert_eq!(user.last_name(), "furkan");
        assert!(user.updated_at() > original_updated);
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let user = create_test_user(1, "taha.furkan");

        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), user.id());
        assert_eq!(restored.username(), user.username());
        assert_eq!(restored.addresses(), user.addresses());
    }

    #[test]
    fn test_from_parts_preserves_timestamps() {
        let user = create_test_user(1, "taha.furkan");

        let restored = User::from_parts(
            user.id(),
            user.name().to_string(),
            user.last_name().to_string(),
            user.email().to_string(),
            user.username().to_string(),
            user.addresses().to_vec(),
            user.created_at(),
            user.updated_at(),
        );

        assert_eq!(restored.created_at(), user.created_at());
        assert_eq!(restored.updated_at(), user.updated_at());
    }
}
