// Ports define what the apartments core needs from the outside world, without implementing it.
//
// Responsibilities
// - Keep the core independent of any database by coding against traits.
// - Identifiers are minted by the repository on save and are opaque to everyone else.
//
// Testing guidance
// - In memory implementations live in adapters/outbound.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::apartments::core::apartment::{Apartment, ApartmentId};
use crate::modules::apartments::core::booking::{Booking, BookingId};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ApartmentRepository: Send + Sync {
    async fn save(&self, apartment: Apartment) -> Result<ApartmentId, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Apartment>, RepositoryError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save(&self, booking: Booking) -> Result<BookingId, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, RepositoryError>;
}
