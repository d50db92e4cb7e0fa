use serde_json::Value;

use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::{UserDto, UserId};

/// Projects a raw payload onto the four DTO fields. Anything else the API
/// sends alongside is dropped; a missing or mistyped field is a decode error.
fn to_dto(payload: Value) -> Result<UserDto, TransportError> {
    Ok(serde_json::from_value(payload)?)
}

pub struct UserRepository<T> {
    transport: T,
}

impl<T: Transport> UserRepository<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get_user_by_id(&self, id: &UserId) -> Result<UserDto, TransportError> {
        let payload = self.transport.fetch_user(id).await?;
        to_dto(payload)
    }

    pub async fn save_user(&self, dto: &UserDto) -> Result<UserDto, TransportError> {
        let payload = self.transport.replace_user(dto).await?;
        to_dto(payload)
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<(), TransportError> {
        self.transport.delete_user(id).await
    }
}
