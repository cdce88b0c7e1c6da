//! Appointments page: the doctor directory and a booking button

use crate::records::DOCTORS;
use crate::ui::theme::Theme;
use egui::{self, RichText};
use tracing::debug;

pub struct Appointments<'a> {
    theme: &'a Theme,
}

impl<'a> Appointments<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            for doctor in DOCTORS.iter() {
                ui.label(
                    RichText::new(doctor.display_line())
                        .size(self.theme.body_size)
                        .color(self.theme.text_primary),
                );
            }

            ui.add_space(self.theme.spacing);

            let button = self
                .theme
                .colored_button("Book Appointment", self.theme.book_button)
                .min_size(egui::vec2(ui.available_width(), 36.0));

            // Booking is not wired to anything yet
            if ui.add(button).clicked() {
                debug!("Book Appointment clicked");
            }
        });
    }
}
