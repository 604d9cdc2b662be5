use crate::common::ChatSession;
use crate::error::{ChatError, Result};

/// Active screen of one tab. The chat screen carries its session, so a chat
/// without a session cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Create,
    Join,
    Chat(ChatSession),
}

#[derive(Debug, Default)]
pub struct ViewController {
    screen: Screen,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&ChatSession> {
        match &self.screen {
            Screen::Chat(session) => Some(session),
            _ => None,
        }
    }

    pub fn go_create(&mut self) {
        self.screen = Screen::Create;
    }

    pub fn go_join(&mut self) {
        self.screen = Screen::Join;
    }

    /// Back to the start screen. Drops the session if there was one.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn start_chat(&mut self, room_code: &str, user_name: &str) -> Result<()> {
        if room_code.is_empty() {
            return Err(ChatError::EmptyRoomCode);
        }
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(ChatError::EmptyUserName);
        }

        self.screen = Screen::Chat(ChatSession::new(room_code, user_name));
        Ok(())
    }
}
