//! Dashboard page: profile photo and contact details

use crate::records::PROFILE;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct Dashboard<'a> {
    photo: Option<&'a egui::TextureHandle>,
    theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(photo: Option<&'a egui::TextureHandle>, theme: &'a Theme) -> Self {
        Self { photo, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing);

            if let Some(photo) = self.photo {
                let sized = egui::load::SizedTexture::new(photo.id(), photo.size_vec2());
                ui.add(egui::Image::new(sized));
                ui.add_space(self.theme.spacing_sm);
            }

            for line in PROFILE.display_lines() {
                ui.label(
                    RichText::new(line)
                        .size(self.theme.body_size)
                        .color(self.theme.text_primary),
                );
            }
        });
    }
}
