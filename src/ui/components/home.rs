use eframe::egui;

use crate::common::TabAction;

const STEPS: [(&str, &str); 3] = [
    (
        "1. Generación",
        "Crea un código único de 6 dígitos que identifica tu canal de comunicación.",
    ),
    (
        "2. Sincronización",
        "Comparte el código con un amigo (o abre otra pestaña tú mismo).",
    ),
    (
        "3. Conexión",
        "Los mensajes viajan por un canal de difusión local, sin servidor.",
    ),
];

pub fn render(ui: &mut egui::Ui) -> Option<TabAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new("QuickChat").size(32.0).strong());
        ui.label(egui::RichText::new("Comunicación instantánea, privada y efímera.").weak());
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            if ui.button("Crear Nueva Sala").clicked() {
                action = Some(TabAction::GoCreate);
            }
            if ui.button("Unirse con Código").clicked() {
                action = Some(TabAction::GoJoin);
            }
        });
    });

    ui.add_space(24.0);
    ui.separator();
    ui.label(egui::RichText::new("¿Cómo funciona?").small().strong());
    for (title, body) in STEPS {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(title).strong());
            ui.label(egui::RichText::new(body).small());
        });
    }

    action
}
