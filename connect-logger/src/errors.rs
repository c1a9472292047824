use thiserror::Error;

use crate::page::PageId;

#[derive(Error, Debug)]
pub enum SessionError {
    /// A readiness condition was never satisfied within its attempt budget.
    /// Carries the human-readable name of the thing being waited for.
    #[error("The browser timed out ({0}), bad connection?")]
    ReadinessTimeout(String),

    /// A page rendered a different number of key and value elements.
    #[error("Malformed {page} page: {keys} key elements but {values} value elements")]
    MalformedPage {
        page: PageId,
        keys: usize,
        values: usize,
    },

    #[error("Browser driver error: {0}")]
    Driver(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// True for the timeout kind; everything else is an unexpected fault.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SessionError::ReadinessTimeout(_))
    }
}
