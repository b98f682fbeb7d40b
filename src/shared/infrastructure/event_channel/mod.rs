use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventChannelError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Side channel for domain events. Publishing is fire-and-forget from the caller's point
/// of view: the state change has already been persisted when an event goes out.
#[async_trait]
pub trait EventChannel<Event: Send + 'static>: Send + Sync {
    async fn publish(&self, event: Event) -> Result<(), EventChannelError>;
}

pub mod in_memory;
