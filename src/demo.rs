//! Headless replay of a two-tab conversation on one bus.

use crate::channel::{BroadcastBus, RoomChannel};
use crate::common::{ChatSession, Message, MessageKind};
use crate::config::AppConfig;
use crate::error::Result;

/// Final message lists of both participants after the scripted run.
#[derive(Debug)]
pub struct DemoTranscript {
    pub room_code: String,
    pub first: Vec<Message>,
    pub second: Vec<Message>,
    /// What the first tab saw after the second one left.
    pub first_after_leave: Vec<Message>,
}

/// `first` opens the room, `second` joins, they trade one message each, and
/// `second` leaves.
pub fn run(config: &AppConfig, room_code: &str, first: &str, second: &str) -> Result<DemoTranscript> {
    let bus = BroadcastBus::new();

    let mut host = RoomChannel::open(&bus, ChatSession::new(room_code, first), config)?;
    let mut guest = RoomChannel::open(&bus, ChatSession::new(room_code, second), config)?;
    host.poll();

    host.send(&format!("Hola, soy {first}"))?;
    guest.poll();
    guest.send(&format!("Hola {first}, aquí {second}"))?;
    host.poll();

    let first_list = host.messages().to_vec();
    let second_list = guest.messages().to_vec();

    guest.leave()?;
    host.poll();

    Ok(DemoTranscript {
        room_code: room_code.to_string(),
        first: first_list,
        second: second_list,
        first_after_leave: host.messages().to_vec(),
    })
}

pub fn format_line(message: &Message) -> String {
    match message.kind {
        MessageKind::System => format!("  -- {} --", message.text),
        MessageKind::Text => format!("  {}: {}", message.sender, message.text),
    }
}

pub fn print_transcript(transcript: &DemoTranscript, first: &str, second: &str) {
    println!("Sala {}", transcript.room_code);
    println!("[{first}]");
    for message in &transcript.first {
        println!("{}", format_line(message));
    }
    println!("[{second}]");
    for message in &transcript.second {
        println!("{}", format_line(message));
    }
    println!("[{first}] tras la salida de {second}");
    for message in &transcript.first_after_leave {
        println!("{}", format_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches_the_conversation() {
        let transcript = run(&AppConfig::default(), "482913", "Alex", "Maria").unwrap();

        let first: Vec<&str> = transcript.first.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            first,
            [
                "Alex se ha unido al chat.",
                "Maria se ha unido al chat.",
                "Hola, soy Alex",
                "Hola Alex, aquí Maria",
            ]
        );

        let second: Vec<&str> = transcript.second.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            second,
            [
                "Maria se ha unido al chat.",
                "Hola, soy Alex",
                "Hola Alex, aquí Maria",
            ]
        );

        let last = transcript.first_after_leave.last().unwrap();
        assert_eq!(last.text, "Maria ha abandonado la sala.");
    }

    #[test]
    fn format_line_marks_system_notices() {
        assert_eq!(
            format_line(&Message::system("Sistema", "x")),
            "  -- x --"
        );
        assert_eq!(format_line(&Message::text("Alex", "hola")), "  Alex: hola");
    }
}
