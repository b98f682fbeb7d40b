use crate::shared::infrastructure::event_channel::{EventChannel, EventChannelError};
use tokio::sync::Mutex;

pub struct InMemoryEventChannel<Event> {
    pub published: Mutex<Vec<Event>>,
    offline: bool,
}

impl<Event> InMemoryEventChannel<Event> {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

impl<Event> Default for InMemoryEventChannel<Event> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<Event> EventChannel<Event> for InMemoryEventChannel<Event>
where
    Event: Send + Sync + 'static,
{
    async fn publish(&self, event: Event) -> Result<(), EventChannelError> {
        if self.offline {
            return Err(EventChannelError::Backend("Event channel offline".into()));
        }
        self.published.lock().await.push(event);
        Ok(())
    }
}
