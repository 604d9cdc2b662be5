//! Tab-level navigation driving the room channel lifecycle.

use quickchat::common::TabAction;
use quickchat::config::AppConfig;
use quickchat::session::Screen;
use quickchat::ui::TabState;
use quickchat::{BroadcastBus, ChatError};

fn tab(bus: &BroadcastBus) -> TabState {
    TabState::new(bus.clone(), AppConfig::default())
}

#[test]
fn test_create_flow_opens_a_room() {
    let bus = BroadcastBus::new();
    let mut alex = tab(&bus);

    alex.apply(TabAction::GoCreate).unwrap();
    assert_eq!(alex.screen(), &Screen::Create);

    alex.create_form.name = "Alex".to_string();
    let (room_code, user_name) = alex.create_form.submit().unwrap();
    alex.apply(TabAction::StartChat {
        room_code: room_code.clone(),
        user_name,
    })
    .unwrap();

    let room = alex.room().unwrap();
    assert!(room.is_open());
    assert_eq!(room.session().room_code, room_code);
    assert_eq!(bus.subscriber_count(&format!("quickchat_room_{room_code}")), 1);
}

#[test]
fn test_create_screen_rerolls_code_on_each_visit() {
    let bus = BroadcastBus::new();
    let mut state = tab(&bus);

    let mut codes = std::collections::HashSet::new();
    for _ in 0..20 {
        state.apply(TabAction::GoCreate).unwrap();
        codes.insert(state.create_form.code().to_string());
        state.apply(TabAction::GoHome).unwrap();
    }
    assert!(codes.len() > 1);
}

#[test]
fn test_join_flow_reaches_existing_room() {
    let bus = BroadcastBus::new();
    let mut alex = tab(&bus);
    let mut maria = tab(&bus);

    alex.apply(TabAction::StartChat {
        room_code: "482913".to_string(),
        user_name: "Alex".to_string(),
    })
    .unwrap();

    maria.apply(TabAction::GoJoin).unwrap();
    maria.join_form.set_code("48-29-13");
    maria.join_form.name = "Maria".to_string();
    let (room_code, user_name) = maria.join_form.submit().unwrap();
    maria
        .apply(TabAction::StartChat {
            room_code,
            user_name,
        })
        .unwrap();

    assert_eq!(alex.poll(), 1);
    maria.apply(TabAction::Send("hola".to_string())).unwrap();
    alex.poll();

    let last = alex.room().unwrap().messages().last().unwrap();
    assert_eq!(last.sender, "Maria");
    assert_eq!(last.text, "hola");
}

#[test]
fn test_invalid_start_keeps_screen() {
    let bus = BroadcastBus::new();
    let mut state = tab(&bus);
    state.apply(TabAction::GoJoin).unwrap();

    let result = state.apply(TabAction::StartChat {
        room_code: "482913".to_string(),
        user_name: "  ".to_string(),
    });

    assert!(matches!(result, Err(ChatError::EmptyUserName)));
    assert_eq!(state.screen(), &Screen::Join);
    assert!(state.room().is_none());
}

#[test]
fn test_exit_leaves_room_and_returns_home() {
    let bus = BroadcastBus::new();
    let mut alex = tab(&bus);
    let mut maria = tab(&bus);
    for (state, name) in [(&mut alex, "Alex"), (&mut maria, "Maria")] {
        state
            .apply(TabAction::StartChat {
                room_code: "482913".to_string(),
                user_name: name.to_string(),
            })
            .unwrap();
    }
    alex.poll();

    maria.apply(TabAction::Exit).unwrap();
    alex.poll();

    assert_eq!(maria.screen(), &Screen::Home);
    assert!(maria.room().is_none());
    assert_eq!(
        alex.room().unwrap().messages().last().unwrap().text,
        "Maria ha abandonado la sala."
    );
    assert_eq!(bus.subscriber_count("quickchat_room_482913"), 1);
}

#[test]
fn test_closing_a_tab_leaves_its_room() {
    let bus = BroadcastBus::new();
    let mut alex = tab(&bus);
    alex.apply(TabAction::StartChat {
        room_code: "482913".to_string(),
        user_name: "Alex".to_string(),
    })
    .unwrap();

    {
        let mut maria = tab(&bus);
        maria
            .apply(TabAction::StartChat {
                room_code: "482913".to_string(),
                user_name: "Maria".to_string(),
            })
            .unwrap();
    }
    alex.poll();

    let texts: Vec<&str> = alex
        .room()
        .unwrap()
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        texts,
        [
            "Alex se ha unido al chat.",
            "Maria se ha unido al chat.",
            "Maria ha abandonado la sala.",
        ]
    );
}

#[test]
fn test_send_clears_input_only_on_success() {
    let bus = BroadcastBus::new();
    let mut state = tab(&bus);

    state.input_text = "hola".to_string();
    assert!(state.apply(TabAction::Send("hola".to_string())).is_err());
    assert_eq!(state.input_text, "hola");

    state
        .apply(TabAction::StartChat {
            room_code: "482913".to_string(),
            user_name: "Alex".to_string(),
        })
        .unwrap();
    state.apply(TabAction::Send("hola".to_string())).unwrap();
    assert!(state.input_text.is_empty());
    assert_eq!(state.title(), "Alex · 482913");
}

#[test]
fn test_leaving_chat_for_another_screen_leaves_the_room() {
    for next in [TabAction::GoCreate, TabAction::GoJoin] {
        let bus = BroadcastBus::new();
        let mut alex = tab(&bus);
        let mut maria = tab(&bus);
        for (state, name) in [(&mut alex, "Alex"), (&mut maria, "Maria")] {
            state
                .apply(TabAction::StartChat {
                    room_code: "482913".to_string(),
                    user_name: name.to_string(),
                })
                .unwrap();
        }
        alex.poll();

        maria.apply(next.clone()).unwrap();
        alex.poll();

        assert!(maria.room().is_none(), "{next:?} kept the room open");
        assert_eq!(maria.poll(), 0);
        assert_eq!(maria.title(), "Inicio");
        assert_eq!(bus.subscriber_count("quickchat_room_482913"), 1);
        assert_eq!(
            alex.room().unwrap().messages().last().unwrap().text,
            "Maria ha abandonado la sala."
        );
    }
}
