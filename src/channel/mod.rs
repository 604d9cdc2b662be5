pub mod bus;
pub mod room;

pub use bus::{BroadcastBus, ChannelHandle};
pub use room::{RoomChannel, channel_name};
