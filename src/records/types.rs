use chrono::{DateTime, Utc};

/// Line printed between exchanges in the conversation log
pub const SEPARATOR_LINE: &str = "\n----------------------\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub age: u32,
    pub email: &'static str,
    pub phone: &'static str,
}

impl UserProfile {
    /// Labels shown on the dashboard, top to bottom
    pub fn display_lines(&self) -> [String; 4] {
        [
            format!("Name: {}", self.name),
            format!("Age: {}", self.age),
            format!("Email: {}", self.email),
            format!("Phone: {}", self.phone),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub phone: &'static str,
}

impl Doctor {
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Ai,
    Separator,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Speaker::Ai, text)
    }

    pub fn separator() -> Self {
        Self::new(Speaker::Separator, SEPARATOR_LINE)
    }

    /// The line as it appears in the reports view
    pub fn line(&self) -> String {
        match self.speaker {
            Speaker::User => format!("User: {}", self.text),
            Speaker::Ai => format!("AI: {}", self.text),
            Speaker::Separator => SEPARATOR_LINE.to_string(),
        }
    }
}
