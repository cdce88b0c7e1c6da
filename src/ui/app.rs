//! Main application struct and eframe integration
//!
//! `DeskView` draws the whole window from `AppState`; `HealthDeskApp` wraps
//! it as an `eframe::App` and owns the advisor connection.

use crate::advisor::AdvisorCommand;
use crate::config::AppConfig;
use crate::ui::assets::{self, PHOTO_SIZE};
use crate::ui::components::{AiPage, Appointments, Dashboard, NavBar, Reports, Settings};
use crate::ui::state::{AppState, Page};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use std::time::Duration;
use tracing::{info, warn};

/// Window title
pub const WINDOW_TITLE: &str = "AI-Powered Healthcare App";
/// Heading shown above the navigation bar
pub const APP_HEADING: &str = "HealthDesk";
/// Fixed window size
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Renders the title, navigation bar and the visible page
pub struct DeskView {
    pub state: AppState,
    theme: Theme,
    photo: Option<egui::TextureHandle>,
}

impl DeskView {
    pub fn new(state: AppState, theme: Theme) -> Self {
        Self {
            state,
            theme,
            photo: None,
        }
    }

    /// Set the dashboard photo texture
    pub fn with_photo(mut self, photo: egui::TextureHandle) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.show_header(ctx);
        self.show_content(ctx);
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(self.theme.bg_primary).inner_margin(self.theme.spacing))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(APP_HEADING)
                            .size(self.theme.title_size)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });

                ui.add_space(self.theme.spacing_sm);

                NavBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary).inner_margin(self.theme.spacing))
            .show(ctx, |ui| match self.state.current_page {
                Page::Dashboard => Dashboard::new(self.photo.as_ref(), &self.theme).show(ui),
                Page::Ai => AiPage::new(&mut self.state, &self.theme).show(ui),
                Page::Reports => Reports::new(&self.state, &self.theme).show(ui),
                Page::Appointments => Appointments::new(&self.theme).show(ui),
                Page::Settings => Settings::new(&self.theme).show(ui),
            });
    }
}

/// Main HealthDesk application
pub struct HealthDeskApp {
    view: DeskView,
}

impl HealthDeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, config: &AppConfig) -> Self {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        let mut view = DeskView::new(state, theme);

        match assets::load_photo(&config.photo_path, PHOTO_SIZE) {
            Ok(image) => {
                let texture =
                    cc.egui_ctx
                        .load_texture("profile_photo", image, egui::TextureOptions::LINEAR);
                view = view.with_photo(texture);
            }
            Err(e) => warn!("Profile photo unavailable: {}", e),
        }

        info!("HealthDesk UI initialized");
        Self { view }
    }
}

impl eframe::App for HealthDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.state.poll_events();
        self.view.show(ctx);

        // Replies arrive off the UI thread; keep polling until they land
        if self.view.state.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(tx) = &self.view.state.advisor_command_tx {
            let _ = tx.send(AdvisorCommand::Shutdown);
        }
        info!("HealthDesk shutting down");
    }
}
