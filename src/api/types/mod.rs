//! API request/response types

pub mod error;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use user::{
    AddressPayload, ConfirmationResponse, CreateUserApiRequest, ListUsersResponse,
    UpdateUserApiRequest, UserResponse,
};
