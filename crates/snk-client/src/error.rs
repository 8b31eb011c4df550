use std::fmt;

/// Errors a [`ShopBackend`](crate::ShopBackend) implementation may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Network or transport failure (connect, timeout, reset).
    Transport(String),
    /// The backend answered with a non-success status.
    Status { status: u16, body: String },
    /// A response payload could not be decoded.
    Decode(String),
    /// The client could not be constructed (bad base URL, TLS setup, ...).
    Config(String),
}

/// Error bodies are echoed into user-visible messages; keep them short.
const MAX_BODY_CHARS: usize = 200;

impl BackendError {
    pub(crate) fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_CHARS) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };
        BackendError::Status { status, body }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(msg) => write!(f, "transport error: {msg}"),
            BackendError::Status { status, body } if body.is_empty() => {
                write!(f, "backend returned http {status}")
            }
            BackendError::Status { status, body } => {
                write!(f, "backend returned http {status}: {body}")
            }
            BackendError::Decode(msg) => write!(f, "decode error: {msg}"),
            BackendError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}
