use eframe::egui;

use crate::common::TabAction;
use crate::session::CreateForm;

pub fn render(ui: &mut egui::Ui, form: &mut CreateForm) -> Option<TabAction> {
    let mut action = None;

    if ui.button("← Volver").clicked() {
        action = Some(TabAction::GoHome);
    }

    ui.vertical_centered(|ui| {
        ui.heading("Crear tu sala");
        ui.label("Este es tu código de invitación:");
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(form.code())
                .monospace()
                .size(40.0)
                .strong(),
        );
        ui.add_space(8.0);
    });

    ui.label("Tu nombre o alias");
    let response = ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Ej: Alex"));
    let pressed_enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let clicked = ui
        .add_enabled(form.can_submit(), egui::Button::new("Iniciar Sala de Chat"))
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
