use crate::common::{ChatSession, Message};
use crate::config::AppConfig;
use crate::error::{ChatError, Result};

use super::bus::{BroadcastBus, ChannelHandle};

/// Channel name shared by every tab using `room_code`.
pub fn channel_name(prefix: &str, room_code: &str) -> String {
    format!("{prefix}{room_code}")
}

pub fn join_notice(user_name: &str) -> String {
    format!("{user_name} se ha unido al chat.")
}

pub fn leave_notice(user_name: &str) -> String {
    format!("{user_name} ha abandonado la sala.")
}

/// A tab's view of one chat room for the lifetime of its chat screen.
///
/// Opening announces the user, sending appends locally and publishes, and
/// leaving (explicitly or on drop) announces the departure before the handle
/// is closed. Own messages are appended exactly once, never via echo.
pub struct RoomChannel {
    session: ChatSession,
    system_sender: String,
    handle: Option<ChannelHandle>,
    messages: Vec<Message>,
}

impl RoomChannel {
    pub fn open(bus: &BroadcastBus, session: ChatSession, config: &AppConfig) -> Result<Self> {
        let name = channel_name(&config.channel_prefix, &session.room_code);
        let handle = bus.subscribe(&name);
        log::info!("{} joined channel `{name}`", session.user_name);

        let mut room = Self {
            session,
            system_sender: config.system_sender.clone(),
            handle: Some(handle),
            messages: Vec::new(),
        };

        let notice = Message::system(
            room.system_sender.as_str(),
            &join_notice(&room.session.user_name),
        );
        room.publish(notice)?;
        Ok(room)
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn channel_name(&self) -> Option<&str> {
        self.handle.as_ref().map(ChannelHandle::name)
    }

    /// Publishes `input` as a text message from the local user.
    pub fn send(&mut self, input: &str) -> Result<&Message> {
        if input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let message = Message::text(self.session.user_name.as_str(), input);
        self.publish(message)
    }

    /// Moves everything that arrived since the last call into the list.
    /// Returns the number of new messages.
    pub fn poll(&mut self) -> usize {
        let Some(handle) = self.handle.as_mut() else {
            return 0;
        };
        let before = self.messages.len();
        while let Some(message) = handle.try_recv() {
            self.messages.push(message);
        }
        self.messages.len() - before
    }

    /// Announces the departure and closes the handle. Subsequent calls do
    /// nothing.
    pub fn leave(&mut self) -> Result<()> {
        let Some(mut handle) = self.handle.take() else {
            return Ok(());
        };
        let notice = Message::system(
            self.system_sender.as_str(),
            &leave_notice(&self.session.user_name),
        );
        let posted = handle.post(&notice);
        handle.close();
        log::info!(
            "{} left channel `{}`",
            self.session.user_name,
            handle.name()
        );
        posted.map(|_| ())
    }

    fn publish(&mut self, message: Message) -> Result<&Message> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| ChatError::ChannelClosed(self.session.room_code.clone()))?;
        handle.post(&message)?;
        self.messages.push(message);
        Ok(&self.messages[self.messages.len() - 1])
    }
}

impl Drop for RoomChannel {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            log::warn!("Failed to announce leave for {}: {err}", self.session.user_name);
        }
    }
}
