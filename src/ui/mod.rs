//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for HealthDesk.

mod app;
pub mod assets;
pub mod components;
mod state;
mod theme;

pub use app::{DeskView, HealthDeskApp, APP_HEADING, WINDOW_SIZE, WINDOW_TITLE};
pub use state::{AppState, Page};
pub use theme::Theme;

use crate::advisor::{AdvisorPipeline, GeminiClient};
use crate::config::AppConfig;
use std::sync::Arc;
use tracing::warn;

/// Start the advisor worker and run the window until it is closed
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let client = GeminiClient::new(&config)?;
    let pipeline = AdvisorPipeline::new(Arc::new(client), config.reply_delay());

    let mut state = AppState::new();
    state.connect_advisor(&pipeline);
    pipeline.start_worker()?;

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(WINDOW_SIZE)
        .with_resizable(false)
        .with_title(WINDOW_TITLE);

    match assets::load_icon(&config.icon_path) {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => warn!("Window icon unavailable: {}", e),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(HealthDeskApp::new(cc, state, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
