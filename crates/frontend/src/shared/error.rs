use thiserror::Error;

/// Ошибки обращения к внешнему API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Статус вне диапазона 2xx
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(Self::Status(status))
        }
    }
}
