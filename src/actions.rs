//! User-facing intents.
//!
//! Every intent has a form returning [`Result`] so callers decide how to
//! present either branch. The `_and_confirm` forms collapse that result to a
//! boolean for triggers that only need success or failure; they log the
//! failure and never propagate it.

use tracing::warn;

use crate::error::Result;
use crate::repository::UserRepository;
use crate::transport::Transport;
use crate::types::{UserDto, UserId};
use crate::use_cases;

pub const ACTIVE_MESSAGE: &str = "User is active";
pub const INACTIVE_MESSAGE: &str = "User is inactive";

pub async fn load_user<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> Result<UserDto> {
    use_cases::fetch_user_data(repo, id).await
}

pub async fn load_and_check_user_active<T: Transport>(
    repo: &UserRepository<T>,
    id: &UserId,
) -> Result<bool> {
    Ok(use_cases::fetch_user_data(repo, id).await?.is_active)
}

pub fn render_message(active: bool) -> &'static str {
    if active {
        ACTIVE_MESSAGE
    } else {
        INACTIVE_MESSAGE
    }
}

pub async fn load_user_data_and_render_message<T: Transport>(
    repo: &UserRepository<T>,
    id: &UserId,
) -> Result<&'static str> {
    let active = load_and_check_user_active(repo, id).await?;
    Ok(render_message(active))
}

pub async fn save_user<T: Transport>(repo: &UserRepository<T>, dto: UserDto) -> Result<UserDto> {
    use_cases::update_user_data(repo, dto).await
}

pub async fn save_user_and_confirm<T: Transport>(repo: &UserRepository<T>, dto: UserDto) -> bool {
    let id = dto.id.clone();
    match save_user(repo, dto).await {
        Ok(_) => true,
        Err(e) => {
            warn!(user_id = %id, error = %e, "failed to save user");
            false
        }
    }
}

pub async fn delete_user<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> Result<()> {
    use_cases::delete_user_data(repo, id).await
}

pub async fn delete_user_and_confirm<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> bool {
    match delete_user(repo, id).await {
        Ok(()) => true,
        Err(e) => {
            warn!(user_id = %id, error = %e, "failed to delete user");
            false
        }
    }
}
