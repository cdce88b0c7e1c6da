//! Reports page: the read-only conversation log

use crate::records::Speaker;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct Reports<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Reports<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let entries = self.state.log.entries();

        egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &entries {
                            let color = match entry.speaker {
                                Speaker::Separator => self.theme.text_muted,
                                _ => self.theme.text_primary,
                            };

                            let response = ui.label(
                                RichText::new(entry.line())
                                    .size(self.theme.body_size)
                                    .color(color),
                            );

                            if entry.speaker != Speaker::Separator {
                                response.on_hover_text(
                                    entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                                );
                            }
                        }
                    });
            });
    }
}
