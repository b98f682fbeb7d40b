// In memory implementation of the BookingRepository port.
//
// Overlapping bookings for the same apartment are stored side by side; nothing here
// arbitrates between them.

use crate::modules::apartments::core::booking::{Booking, BookingId};
use crate::modules::apartments::core::ports::{BookingRepository, RepositoryError};
use std::collections::{HashMap, VecDeque};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<BookingId, Booking>>,
    queued_ids: Mutex<VecDeque<BookingId>>,
    offline: bool,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<BookingId>,
    {
        Self {
            queued_ids: Mutex::new(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn count(&self) -> usize {
        self.bookings.read().await.len()
    }

    async fn next_id(&self) -> BookingId {
        self.queued_ids
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Uuid::now_v7().to_string())
    }
}

#[async_trait::async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: Booking) -> Result<BookingId, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Booking repository offline".into()));
        }
        let id = self.next_id().await;
        self.bookings
            .write()
            .await
            .insert(id.clone(), booking.with_id(id.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Booking repository offline".into()));
        }
        Ok(self.bookings.read().await.get(id).cloned())
    }
}
