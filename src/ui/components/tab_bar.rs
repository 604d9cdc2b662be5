use eframe::egui;

#[derive(Default)]
pub struct TabBarActions {
    pub select: Option<usize>,
    pub close: Option<usize>,
    pub open_new: bool,
}

/// Tab strip. `titles` are rendered in order; `active` is highlighted.
pub fn render(ui: &mut egui::Ui, titles: &[String], active: usize) -> TabBarActions {
    let mut actions = TabBarActions::default();

    ui.horizontal_wrapped(|ui| {
        for (index, title) in titles.iter().enumerate() {
            ui.group(|ui| {
                if ui.selectable_label(index == active, title.as_str()).clicked() {
                    actions.select = Some(index);
                }
                if ui.small_button("×").on_hover_text("Cerrar pestaña").clicked() {
                    actions.close = Some(index);
                }
            });
        }

        if ui.button("+").on_hover_text("Nueva pestaña").clicked() {
            actions.open_new = true;
        }
    });

    actions
}
