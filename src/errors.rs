use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Invalid AWS configuration: {0}")]
    Configuration(String),

    #[error("Failed to reach AWS service: {0}")]
    Transport(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to drive blocking client: {0}")]
    Runtime(String),
}

impl ProvisionError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProvisionError::NotFound(_))
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ProvisionError::Transport(_))
    }
}

impl From<std::io::Error> for ProvisionError {
    fn from(error: std::io::Error) -> Self {
        ProvisionError::Runtime(error.to_string())
    }
}
