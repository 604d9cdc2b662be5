use crate::channel::{BroadcastBus, RoomChannel};
use crate::common::TabAction;
use crate::config::AppConfig;
use crate::error::{ChatError, Result};
use crate::session::{CreateForm, JoinForm, Screen, ViewController};

/// Everything one tab owns: its screen, the form being filled in, and the
/// room channel while the chat screen is up.
pub struct TabState {
    controller: ViewController,
    pub create_form: CreateForm,
    pub join_form: JoinForm,
    pub input_text: String,
    room: Option<RoomChannel>,
    bus: BroadcastBus,
    config: AppConfig,
}

impl TabState {
    pub fn new(bus: BroadcastBus, config: AppConfig) -> Self {
        Self {
            controller: ViewController::new(),
            create_form: CreateForm::new(),
            join_form: JoinForm::new(),
            input_text: String::new(),
            room: None,
            bus,
            config,
        }
    }

    pub fn room(&self) -> Option<&RoomChannel> {
        self.room.as_ref()
    }

    /// The open room together with the message box, for the chat view.
    pub fn chat_parts(&mut self) -> Option<(&RoomChannel, &mut String)> {
        let room = self.room.as_ref()?;
        Some((room, &mut self.input_text))
    }

    pub fn screen(&self) -> &Screen {
        self.controller.screen()
    }

    /// Short label for the tab strip.
    pub fn title(&self) -> String {
        match self.controller.session() {
            Some(session) => format!("{} · {}", session.user_name, session.room_code),
            None => "Inicio".to_string(),
        }
    }

    /// Drains the room channel. Returns the number of new messages.
    pub fn poll(&mut self) -> usize {
        self.room.as_mut().map_or(0, RoomChannel::poll)
    }

    pub fn apply(&mut self, action: TabAction) -> Result<()> {
        match action {
            TabAction::GoCreate => {
                self.close_room();
                // Remounting the create screen rolls a fresh code.
                self.create_form = CreateForm::new();
                self.controller.go_create();
            }
            TabAction::GoJoin => {
                self.close_room();
                self.join_form = JoinForm::new();
                self.controller.go_join();
            }
            TabAction::GoHome | TabAction::Exit => {
                self.close_room();
                self.controller.go_home();
            }
            TabAction::StartChat {
                room_code,
                user_name,
            } => {
                self.controller.start_chat(&room_code, &user_name)?;
                self.open_room()?;
            }
            TabAction::Send(text) => {
                let room = self
                    .room
                    .as_mut()
                    .ok_or_else(|| ChatError::ChannelClosed("none".to_string()))?;
                room.send(&text)?;
                self.input_text.clear();
            }
        }
        Ok(())
    }

    fn open_room(&mut self) -> Result<()> {
        self.close_room();
        let Some(session) = self.controller.session().cloned() else {
            return Ok(());
        };
        match RoomChannel::open(&self.bus, session, &self.config) {
            Ok(room) => {
                self.room = Some(room);
                Ok(())
            }
            Err(err) => {
                self.controller.go_home();
                Err(err)
            }
        }
    }

    fn close_room(&mut self) {
        if let Some(mut room) = self.room.take() {
            if let Err(err) = room.leave() {
                log::warn!("Leave notice for {} failed: {err}", room.session().user_name);
            }
        }
    }
}
