//! Page and navigation widgets

mod ai_page;
mod appointments;
mod dashboard;
mod nav_bar;
mod reports;
mod settings;

pub use ai_page::{AiPage, QUERY_INPUT_LABEL};
pub use appointments::Appointments;
pub use dashboard::Dashboard;
pub use nav_bar::NavBar;
pub use reports::Reports;
pub use settings::Settings;
