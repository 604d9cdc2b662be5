use eframe::egui;

use crate::channel::BroadcastBus;
use crate::common::TabAction;
use crate::config::AppConfig;
use crate::session::Screen;

use super::components::{chat_room, create_view, home, join_view, tab_bar};
use super::state::TabState;

struct Tab {
    id: usize,
    state: TabState,
}

/// Window hosting any number of chat tabs that share one broadcast bus.
pub struct QuickChatApp {
    bus: BroadcastBus,
    config: AppConfig,
    tabs: Vec<Tab>,
    active: usize,
    next_tab_id: usize,
}

impl QuickChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, bus: BroadcastBus, config: AppConfig) -> Self {
        let mut app = Self {
            bus,
            tabs: Vec::new(),
            active: 0,
            next_tab_id: 1,
            config,
        };
        for _ in 0..app.config.initial_tabs.max(1) {
            app.open_tab();
        }
        app.active = 0;
        app
    }

    fn open_tab(&mut self) {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        self.tabs.push(Tab {
            id,
            state: TabState::new(self.bus.clone(), self.config.clone()),
        });
        self.active = self.tabs.len() - 1;
        log::info!("Opened tab {id}");
    }

    fn close_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        // Dropping the tab state leaves its room, if any.
        let tab = self.tabs.remove(index);
        log::info!("Closed tab {}", tab.id);
        drop(tab);

        if index < self.active {
            self.active -= 1;
        }
        if self.tabs.is_empty() {
            self.open_tab();
        }
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }
    }

    fn poll_tabs(&mut self) {
        for tab in &mut self.tabs {
            let received = tab.state.poll();
            if received > 0 {
                log::debug!("Tab {} received {received} message(s)", tab.id);
            }
        }
    }

    fn apply(&mut self, action: TabAction) {
        let Some(tab) = self.tabs.get_mut(self.active) else {
            return;
        };
        if let Err(err) = tab.state.apply(action) {
            log::warn!("Tab {} rejected action: {err}", tab.id);
        }
    }

    fn render_active(&mut self, ui: &mut egui::Ui) -> Option<TabAction> {
        let state = &mut self.tabs.get_mut(self.active)?.state;
        let screen = state.screen().clone();
        match screen {
            Screen::Home => home::render(ui),
            Screen::Create => create_view::render(ui, &mut state.create_form),
            Screen::Join => join_view::render(ui, &mut state.join_form),
            Screen::Chat(_) => {
                let (room, input_text) = state.chat_parts()?;
                chat_room::render(ui, room, input_text)
            }
        }
    }
}

impl eframe::App for QuickChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tabs();

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            let titles: Vec<String> = self
                .tabs
                .iter()
                .map(|tab| format!("{}: {}", tab.id, tab.state.title()))
                .collect();
            let actions = tab_bar::render(ui, &titles, self.active);

            if let Some(index) = actions.select {
                self.active = index;
            }
            if let Some(index) = actions.close {
                self.close_tab(index);
            }
            if actions.open_new {
                self.open_tab();
            }
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(
                        "Las pestañas se comunican por un canal de difusión en memoria, sin servidor.",
                    )
                    .small()
                    .weak(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.render_active(ui) {
                self.apply(action);
            }
        });

        ctx.request_repaint();
    }
}
