use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    HostUnavailable(String),
    ContainerNotFound(String),
    Dom(String),
    Config(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::HostUnavailable(msg) => write!(f, "Host unavailable: {msg}"),
            UiError::ContainerNotFound(selector) => {
                write!(f, "Notification container not found: {selector}")
            }
            UiError::Dom(msg) => write!(f, "DOM Error: {msg}"),
            UiError::Config(msg) => write!(f, "Config Error: {msg}"),
        }
    }
}

impl std::error::Error for UiError {}

impl UiError {
    pub fn host_unavailable(message: impl Into<String>) -> Self {
        UiError::HostUnavailable(message.into())
    }

    pub fn dom(message: impl Into<String>) -> Self {
        UiError::Dom(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        UiError::Config(message.into())
    }
}
