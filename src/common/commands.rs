/// Actions emitted by the tab screens and applied by `TabState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    GoCreate,
    GoJoin,
    GoHome,
    /// Confirm on the create or join screen.
    StartChat {
        room_code: String,
        user_name: String,
    },
    /// Submit the chat input box.
    Send(String),
    /// Exit button in the chat header.
    Exit,
}
