//! AI Health Predictor page
//!
//! A single-line query field and the "Ask AI" button. Submitting logs the
//! query and schedules the advisor reply; the conversation itself is shown
//! on the reports page.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Key};

/// Accessibility label of the query field
pub const QUERY_INPUT_LABEL: &str = "Health query input";

pub struct AiPage<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> AiPage<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
                .hint_text("Enter your health query...")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Body)
                .margin(egui::Margin::symmetric(8.0, 6.0))
                .id(egui::Id::new("health_query_input"));

            let response = ui.add(text_edit);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, QUERY_INPUT_LABEL)
            });

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(self.theme.spacing_sm);

            let button = self
                .theme
                .colored_button("Ask AI", self.theme.nav_button)
                .min_size(egui::vec2(ui.available_width(), 36.0));

            if ui.add(button).clicked() || enter_pressed {
                self.state.submit_query();
            }

            if let Some(error) = &self.state.last_error {
                ui.add_space(self.theme.spacing_sm);
                ui.label(egui::RichText::new(error).color(self.theme.error));
            }
        });
    }
}
