//! Navigation bar component
//!
//! One button per page; clicking a button makes its page the visible one.

use crate::ui::state::{AppState, Page};
use crate::ui::theme::Theme;
use egui::{self, Vec2};

pub struct NavBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let count = Page::ALL.len() as f32;
        let gaps = ui.spacing().item_spacing.x * (count - 1.0);
        let width = ((ui.available_width() - gaps) / count).max(0.0);

        ui.horizontal(|ui| {
            for page in Page::ALL {
                let fill = if self.state.current_page == page {
                    self.theme.nav_button_active
                } else {
                    self.theme.nav_button
                };

                let button = self
                    .theme
                    .colored_button(page.title(), fill)
                    .min_size(Vec2::new(width, 36.0));

                if ui.add(button).clicked() {
                    self.state.select_page(page);
                }
            }
        });
    }
}
