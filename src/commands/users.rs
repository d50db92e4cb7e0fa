use crate::actions;
use crate::cli::SaveArgs;
use crate::error::Result;
use crate::output;
use crate::repository::UserRepository;
use crate::transport::Transport;
use crate::types::{UserDto, UserId};

pub async fn status<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> Result<()> {
    let active = actions::load_and_check_user_active(repo, id).await?;
    let message = actions::render_message(active);

    output::print_item(
        &serde_json::json!({ "id": id, "isActive": active, "message": message }),
        |_| println!("{}", output::status_colored(message, active)),
    );

    Ok(())
}

pub async fn show<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> Result<()> {
    let user = actions::load_user(repo, id).await?;

    output::print_item(&user, |u| println!("{}", output::user_table(u)));

    Ok(())
}

/// Returns whether the save went through; failures are reported, not raised.
pub async fn save<T: Transport>(repo: &UserRepository<T>, args: SaveArgs) -> bool {
    let dto = UserDto {
        id: args.id,
        name: args.name,
        email: args.email,
        is_active: !args.inactive,
    };
    let id = dto.id.clone();

    let saved = actions::save_user_and_confirm(repo, dto).await;
    if saved {
        output::print_message(&format!("Saved user {id}"));
    } else {
        output::print_message_always(&format!("Failed to save user {id}"));
    }
    saved
}

pub async fn delete<T: Transport>(repo: &UserRepository<T>, id: &UserId) -> bool {
    let deleted = actions::delete_user_and_confirm(repo, id).await;
    if deleted {
        output::print_message(&format!("Deleted user {id}"));
    } else {
        output::print_message_always(&format!("Failed to delete user {id}"));
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::MockTransport;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_save_marks_active_unless_inactive_flag() {
        let expected = UserDto {
            id: UserId::Number(4),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            is_active: true,
        };
        let mut transport = MockTransport::new();
        transport
            .expect_replace_user()
            .with(eq(expected))
            .times(1)
            .returning(|sent| Ok(serde_json::to_value(sent).unwrap()));
        let repo = UserRepository::new(transport);

        let args = SaveArgs {
            id: UserId::Number(4),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            inactive: false,
        };
        assert!(save(&repo, args).await);
    }

    #[tokio::test]
    async fn test_status_reads_active_flag() {
        let mut transport = MockTransport::new();
        transport.expect_fetch_user().times(1).returning(|_| {
            Ok(serde_json::json!({
                "id": 4,
                "name": "Ann",
                "email": "ann@example.com",
                "isActive": false
            }))
        });
        let repo = UserRepository::new(transport);

        status(&repo, &UserId::Number(4)).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_reports_failure() {
        let mut transport = MockTransport::new();
        transport.expect_delete_user().returning(|_| {
            Err(TransportError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let repo = UserRepository::new(transport);

        assert!(!delete(&repo, &UserId::Number(4)).await);
    }
}
