//! Business operations on a single user record.
//!
//! Each use case builds a [`User`] from the record it receives, applies the
//! entity rules, and hands the projection back. Errors are never recovered
//! here.

use crate::domain::User;
use crate::error::Result;
use crate::repository::UserRepository;
use crate::transport::Transport;
use crate::types::{UserDto, UserId};

/// Fetch a user and normalize the name to uppercase for display.
///
/// The normalized name is only returned, never written back.
pub async fn fetch_user_data<T: Transport>(
    repo: &UserRepository<T>,
    id: &UserId,
) -> Result<UserDto> {
    let mut user = User::from(repo.get_user_by_id(id).await?);
    user.validate()?;

    let upper = user.name.to_uppercase();
    user.update_name(upper);

    Ok(user.to_dto())
}

/// Validate and persist a user, returning the record the API echoes back.
pub async fn update_user_data<T: Transport>(
    repo: &UserRepository<T>,
    dto: UserDto,
) -> Result<UserDto> {
    let user = User::from(dto);
    user.validate()?;

    Ok(repo.save_user(&user.to_dto()).await?)
}

pub async fn delete_user_data<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> Result<()> {
    Ok(repo.delete_user(id).await?)
}
