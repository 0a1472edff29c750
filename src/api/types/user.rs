//! User-facing request and response shapes

use serde::{Deserialize, Serialize};

use crate::domain::user::{Address, User};

/// Address as carried in request and response bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub id: i32,
    pub label: String,
    pub city: String,
    pub region: String,
}

impl From<&Address> for AddressPayload {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id(),
            label: address.label().to_string(),
            city: address.city().to_string(),
            region: address.region().to_string(),
        }
    }
}

impl From<AddressPayload> for Address {
    fn from(payload: AddressPayload) -> Self {
        Address::new(payload.id, payload.label, payload.city, payload.region)
    }
}

/// Request to create a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub addresses: Vec<AddressPayload>,
}

/// Request to update a user; id travels in the body, the rest is optional
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub id: i32,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// User as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub addresses: Vec<AddressPayload>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            username: user.username().to_string(),
            addresses: user.addresses().iter().map(AddressPayload::from).collect(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// Confirmation body for mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub message: String,
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn test_create_user_request_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "Taha",
            "last_name": "Unsal",
            "email": "taha.f.unsal@gmail.com",
            "username": "taha.furkan",
            "addresses": [
                { "id": 1, "label": "home", "city": "Istanbul", "region": "Turkey" }
            ]
        }"#;

        let request: CreateUserApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 1);
        assert_eq!(request.username, "taha.furkan");
        assert_eq!(request.addresses.len(), 1);
        assert_eq!(request.addresses[0].city, "Istanbul");
    }

    #[test]
    fn test_create_user_request_addresses_default_empty() {
        let json = r#"{
            "id": 1,
            "name": "Taha",
            "last_name": "Unsal",
            "email": "taha.f.unsal@gmail.com",
            "username": "taha.furkan"
        }"#;

        let request: CreateUserApiRequest = serde_json::from_str(json).unwrap();
        assert!(request.addresses.is_empty());
    }

    #[test]
    fn test_update_user_request_partial_fields() {
        let json = r#"{ "id": 1, "last_name": "furkan" }"#;

        let request: UpdateUserApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 1);
        assert_eq!(request.last_name.as_deref(), Some("furkan"));
        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_user_response_from_entity() {
        let user = User::new(
            UserId::new(1),
            "Taha",
            "Unsal",
            "taha.f.unsal@gmail.com",
            "taha.furkan",
            vec![Address::new(2, "work", "Istanbul", "Turkey")],
        );

        let response = UserResponse::from(&user);
        assert_eq!(response.id, 1);
        assert_eq!(response.username, "taha.furkan");
        assert_eq!(response.addresses.len(), 1);
        assert_eq!(response.addresses[0].label, "work");
    }
}
