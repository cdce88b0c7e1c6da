pub mod directory;
pub mod storage;
pub mod types;

pub use directory::{DOCTORS, PROFILE, SETTINGS_TEXT};
pub use storage::ConversationLog;
pub use types::{Doctor, LogEntry, Speaker, UserProfile};
