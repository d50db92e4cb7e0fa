use crate::error::ValidationError;
use crate::types::{UserDto, UserId};

/// In-memory user for the duration of one use-case call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Email must contain an `@` before the user is persisted or returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.contains('@') {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }

    pub fn update_name(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    pub fn to_dto(&self) -> UserDto {
        UserDto {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_active: self.is_active,
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            is_active: dto.is_active,
        }
    }
}
