// In memory implementation of the ApartmentRepository port.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Hand out identifiers on save: queued ones first, then fresh uuid v7 values.
// - Store a copy of the apartment carrying its identity.

use crate::modules::apartments::core::apartment::{Apartment, ApartmentId};
use crate::modules::apartments::core::ports::{ApartmentRepository, RepositoryError};
use std::collections::{HashMap, VecDeque};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryApartmentRepository {
    apartments: RwLock<HashMap<ApartmentId, Apartment>>,
    queued_ids: Mutex<VecDeque<ApartmentId>>,
    offline: bool,
}

impl InMemoryApartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ApartmentId>,
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
        self.apartments.read().await.len()
    }

    async fn next_id(&self) -> ApartmentId {
        self.queued_ids
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Uuid::now_v7().to_string())
    }
}

#[async_trait::async_trait]
impl ApartmentRepository for InMemoryApartmentRepository {
    async fn save(&self, apartment: Apartment) -> Result<ApartmentId, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Apartment repository offline".into()));
        }
        let id = self.next_id().await;
        self.apartments
            .write()
            .await
            .insert(id.clone(), apartment.with_id(id.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Apartment>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Apartment repository offline".into()));
        }
        Ok(self.apartments.read().await.get(id).cloned())
    }
}
