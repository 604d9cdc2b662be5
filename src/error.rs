use thiserror::Error;

/// Errors raised by the chat session and room channel.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("room code must not be empty")]
    EmptyRoomCode,
    #[error("user name must not be empty")]
    EmptyUserName,
    #[error("message text must not be empty")]
    EmptyMessage,
    #[error("channel `{0}` is closed")]
    ChannelClosed(String),
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
