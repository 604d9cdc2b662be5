pub mod controller;
pub mod forms;

pub use controller::{Screen, ViewController};
pub use forms::{CreateForm, JoinForm, generate_room_code};
