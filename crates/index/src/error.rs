use directory_model::UserId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Unknown friend id {friend} (referenced by user {referenced_by})")]
    UnknownFriend {
        friend: UserId,
        referenced_by: UserId,
    },
}
