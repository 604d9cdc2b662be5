pub mod chat_room;
pub mod create_view;
pub mod home;
pub mod input_bar;
pub mod join_view;
pub mod tab_bar;
