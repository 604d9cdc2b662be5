mod app;
mod components;
pub mod state;

pub use app::QuickChatApp;
pub use state::TabState;
