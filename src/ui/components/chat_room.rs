use chrono::{Local, TimeZone};
use eframe::egui;

use crate::channel::RoomChannel;
use crate::common::{Message, TabAction};

use super::input_bar;

pub fn render(ui: &mut egui::Ui, room: &RoomChannel, input_text: &mut String) -> Option<TabAction> {
    let mut action = None;
    let session = room.session();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong(format!("Sala {}", session.room_code));
            let status = if room.is_open() {
                egui::RichText::new(format!("● Conectado como {}", session.user_name))
                    .color(egui::Color32::GREEN)
            } else {
                egui::RichText::new("○ Desconectado").weak()
            };
            ui.label(status.small());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Salir").on_hover_text("Salir del chat").clicked() {
                action = Some(TabAction::Exit);
            }
        });
    });
    ui.separator();

    let list_height = (ui.available_height() - 40.0).max(0.0);
    egui::ScrollArea::vertical()
        .max_height(list_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in room.messages() {
                render_message(ui, message, &session.user_name);
                ui.add_space(4.0);
            }
        });

    ui.separator();
    if let Some(content) = input_bar::render(ui, input_text) {
        action = Some(TabAction::Send(content));
    }

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message, own_name: &str) {
    if message.is_system() {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&message.text).small().weak());
        });
        return;
    }

    let is_me = message.sender == own_name;
    let layout = if is_me {
        egui::Layout::top_down(egui::Align::Max)
    } else {
        egui::Layout::top_down(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        let who = if is_me { "Tú" } else { message.sender.as_str() };
        ui.label(
            egui::RichText::new(format!("{who} • {}", format_time(message.timestamp)))
                .small()
                .weak(),
        );
        let fill = if is_me {
            egui::Color32::from_rgb(79, 70, 229)
        } else {
            ui.visuals().faint_bg_color
        };
        egui::Frame::new()
            .fill(fill)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                let text = egui::RichText::new(&message.text);
                ui.label(if is_me { text.color(egui::Color32::WHITE) } else { text });
            });
    });
}

/// Local `HH:MM` for a millisecond timestamp.
fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => String::from("--:--"),
    }
}
