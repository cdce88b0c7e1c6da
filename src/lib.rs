pub mod advisor;
pub mod config;
pub mod records;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HealthDeskError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Connection-level failure; displayed as the client reported it
    #[error("{0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request rejected: {0}")]
    RequestError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Malformed response: {0}")]
    ResponseError(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for HealthDeskError {
    fn from(e: std::io::Error) -> Self {
        HealthDeskError::IOError(e.to_string())
    }
}

impl HealthDeskError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Fixing these requires editing config or restarting
            HealthDeskError::ConfigError(_) => false,
            HealthDeskError::AuthError(_) => false,
            HealthDeskError::ChannelError(_) => false,
            HealthDeskError::IOError(_) => false,
            // Asking again may succeed
            HealthDeskError::Transport(_) => true,
            HealthDeskError::RateLimited(_) => true,
            HealthDeskError::RequestError(_) => true,
            HealthDeskError::ProviderError(_) => true,
            HealthDeskError::ResponseError(_) => true,
            // The UI renders without the image
            HealthDeskError::AssetError(_) => true,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            HealthDeskError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            HealthDeskError::Transport(_) => {
                "Could not reach the AI service. Please check your connection.".to_string()
            }
            HealthDeskError::AuthError(_) => {
                "The AI service rejected the API key.".to_string()
            }
            HealthDeskError::RateLimited(_) => {
                "Too many requests. Please wait and try again.".to_string()
            }
            HealthDeskError::RequestError(_) => {
                "The AI service could not handle that request.".to_string()
            }
            HealthDeskError::ProviderError(_) => {
                "The AI service is having trouble. Please try again.".to_string()
            }
            HealthDeskError::ResponseError(_) => {
                "The AI service sent an unexpected reply.".to_string()
            }
            HealthDeskError::AssetError(_) => "An image could not be loaded.".to_string(),
            HealthDeskError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
            HealthDeskError::IOError(_) => "File system error occurred.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthDeskError>;
