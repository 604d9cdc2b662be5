pub mod channel;
pub mod common;
pub mod config;
pub mod demo;
pub mod error;
pub mod session;
pub mod ui;

pub use channel::{BroadcastBus, ChannelHandle, RoomChannel};
pub use common::{ChatSession, Message, MessageKind};
pub use error::{ChatError, Result};
