use eframe::egui;

use crate::common::TabAction;
use crate::session::JoinForm;

pub fn render(ui: &mut egui::Ui, form: &mut JoinForm) -> Option<TabAction> {
    let mut action = None;

    if ui.button("← Volver").clicked() {
        action = Some(TabAction::GoHome);
    }

    ui.vertical_centered(|ui| {
        ui.heading("Unirse a una sala");
        ui.label("Ingresa el código compartido por tu amigo");
    });
    ui.add_space(8.0);

    ui.label("Código de Sala (6 dígitos)");
    let mut code = form.code().to_string();
    let code_response = ui.add(
        egui::TextEdit::singleline(&mut code)
            .hint_text("000000")
            .font(egui::TextStyle::Monospace),
    );
    if code_response.changed() {
        form.set_code(&code);
    }

    ui.label("Tu nombre o alias");
    let name_response = ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Ej: Maria"));
    let pressed_enter =
        name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let clicked = ui
        .add_enabled(form.can_submit(), egui::Button::new("Entrar al Chat"))
        .clicked();

    if clicked || pressed_enter {
        if let Some((room_code, user_name)) = form.submit() {
            action = Some(TabAction::StartChat {
                room_code,
                user_name,
            });
        }
    }

    action
}
