pub mod commands;
pub mod types;

pub use commands::TabAction;
pub use types::{ChatSession, Message, MessageKind};
