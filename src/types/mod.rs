mod user;

pub use user::{UserDto, UserId};
