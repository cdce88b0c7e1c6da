//! Theme and styling for the HealthDesk UI
//!
//! This module provides colors, fonts, and visual styling for the application.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Navigation button fill
    pub nav_button: Color32,
    /// Navigation button fill for the visible page
    pub nav_button_active: Color32,
    /// "Book Appointment" button fill
    pub book_button: Color32,
    /// Text on colored buttons
    pub button_text: Color32,
    /// Error text
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,

    /// Font sizes
    pub title_size: f32,
    pub body_size: f32,
    pub settings_size: f32,
    pub button_size: f32,

    /// Standard spacing
    pub spacing: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Create the default light theme
    pub fn light() -> Self {
        Self {
            nav_button: Color32::from_rgb(0x4c, 0xaf, 0x50), // Green
            nav_button_active: Color32::from_rgb(0x38, 0x8e, 0x3c),
            book_button: Color32::from_rgb(0xf3, 0x9c, 0x12), // Orange
            button_text: Color32::WHITE,
            error: Color32::from_rgb(211, 47, 47),

            bg_primary: Color32::from_rgb(250, 250, 250),
            bg_secondary: Color32::from_rgb(240, 240, 240),

            text_primary: Color32::from_rgb(33, 33, 33),
            text_muted: Color32::from_rgb(117, 117, 117),

            button_rounding: Rounding::same(5.0),

            title_size: 20.0,
            body_size: 14.0,
            settings_size: 16.0,
            button_size: 14.0,

            spacing: 10.0,
            spacing_sm: 6.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = Color32::WHITE;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.selection.bg_fill = self.nav_button.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.nav_button);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(self.title_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(self.body_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(self.button_size, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Build a filled button in the navigation style
    pub fn colored_button<'a>(&self, label: &str, fill: Color32) -> egui::Button<'a> {
        egui::Button::new(
            egui::RichText::new(label)
                .size(self.button_size)
                .color(self.button_text),
        )
        .fill(fill)
        .rounding(self.button_rounding)
    }
}
