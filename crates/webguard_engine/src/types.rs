use std::fmt;

/// Failure from a fetch attempt, tagged by kind so the cycle can distinguish
/// expected outcomes (selector missing from the page) from infrastructure
/// faults (network, timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchFailure,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FetchFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    InvalidUrl,
    InvalidSelector,
    /// The page loaded but no node matched the configured selector.
    SelectorNotMatched,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::InvalidUrl => write!(f, "invalid url"),
            FetchFailure::InvalidSelector => write!(f, "invalid selector"),
            FetchFailure::SelectorNotMatched => write!(f, "selector matched no element"),
            FetchFailure::HttpStatus(code) => write!(f, "http status {code}"),
            FetchFailure::Timeout => write!(f, "timeout"),
            FetchFailure::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FetchFailure::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FetchFailure::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FetchFailure::Decode => write!(f, "undecodable page bytes"),
            FetchFailure::Network => write!(f, "network error"),
        }
    }
}

/// Failure from an alert delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    pub kind: NotifyFailure,
    pub message: String,
}

impl NotifyError {
    pub(crate) fn new(kind: NotifyFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for NotifyError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyFailure {
    /// The server rejected the configured credentials.
    Auth,
    /// The send did not complete within the configured bound.
    Timeout,
    /// Connection or protocol fault talking to the mail server.
    Transport,
    /// The alert message itself could not be built (bad address).
    Message,
}

impl fmt::Display for NotifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyFailure::Auth => write!(f, "authentication failed"),
            NotifyFailure::Timeout => write!(f, "send timed out"),
            NotifyFailure::Transport => write!(f, "transport error"),
            NotifyFailure::Message => write!(f, "invalid message"),
        }
    }
}
