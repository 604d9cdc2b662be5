use eframe::egui;

/// Enter submits; Shift+Enter falls through to the text box as a newline.
pub fn submits_on_enter(modifiers: egui::Modifiers) -> bool {
    !modifiers.shift
}

/// Message box plus send button. Returns the text to send, if submitted.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    let can_send = !input_text.trim().is_empty();
    let input_id = ui.make_persistent_id("chat_input");

    ui.horizontal(|ui| {
        // Consume Enter before the text box sees it, otherwise it becomes a newline.
        if ui.memory(|memory| memory.has_focus(input_id)) {
            send |= ui.input_mut(|input| {
                submits_on_enter(input.modifiers)
                    && input.consume_key(input.modifiers, egui::Key::Enter)
            });
        }

        let width = (ui.available_width() - 80.0).max(80.0);
        ui.add(
            egui::TextEdit::multiline(input_text)
                .id(input_id)
                .hint_text("Escribe un mensaje...")
                .desired_rows(1)
                .desired_width(width),
        );
        if ui
            .add_enabled(can_send, egui::Button::new("Enviar"))
            .clicked()
        {
            send = true;
        }
    });

    if send && !input_text.trim().is_empty() {
        return Some(input_text.clone());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_enter_submits() {
        assert!(submits_on_enter(egui::Modifiers::NONE));
    }

    #[test]
    fn shift_enter_inserts_newline() {
        assert!(!submits_on_enter(egui::Modifiers::SHIFT));
    }
}
