use crate::utils::error::Result;
use async_trait::async_trait;

/// Status and body text returned by a form relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-shot JSON POST to a third-party form relay. A transport failure is an
/// `Err`; any HTTP status, including 4xx/5xx, is an `Ok`.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn post_json(&self, endpoint: &str, payload: &serde_json::Value)
        -> Result<RelayResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Message Sent!",
            NotificationKind::Error => "Error",
        }
    }
}

/// Transient toast-style feedback.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Client-side navigation to another route of the site.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}
