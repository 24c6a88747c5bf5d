use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ft_config::ConfigError),

    #[error("Auth error: {0}")]
    Auth(#[from] ft_auth::AuthError),

    #[error("API error: {0}")]
    Client(#[from] ft_client::ClientError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile validation failed: {0}")]
    ProfileValidation(String),

    #[error("Profile update rejected ({field}): {message}")]
    ProfileUpdateRejected {
        field: &'static str,
        message: String,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
