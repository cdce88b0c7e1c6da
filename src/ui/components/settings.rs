use crate::records::SETTINGS_TEXT;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct Settings<'a> {
    theme: &'a Theme,
}

impl<'a> Settings<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(SETTINGS_TEXT)
                    .size(self.theme.settings_size)
                    .color(self.theme.text_primary),
            );
        });
    }
}
