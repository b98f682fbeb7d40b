// Apartment aggregate root.
//
// An apartment is immutable once created. It owns the creation of its bookings, so every
// booking points back at a persisted apartment.

use std::collections::BTreeMap;

use crate::modules::apartments::core::address::Address;
use crate::modules::apartments::core::booking::Booking;
use crate::modules::apartments::core::errors::{DomainError, require_non_blank};
use crate::modules::apartments::core::period::Period;
use crate::modules::apartments::core::room::Room;

pub type ApartmentId = String;

#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    id: Option<ApartmentId>,
    owner_id: String,
    address: Address,
    description: String,
    rooms: Vec<Room>,
}

impl Apartment {
    pub(crate) fn new(
        owner_id: String,
        address: Address,
        description: String,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            id: None,
            owner_id,
            address,
            description,
            rooms,
        }
    }

    pub fn with_id(self, id: impl Into<ApartmentId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room name to area, the same shape the apartment was defined with.
    pub fn rooms_definition(&self) -> BTreeMap<String, f64> {
        self.rooms
            .iter()
            .map(|room| (room.name().to_string(), room.size().value()))
            .collect()
    }

    pub fn book(&self, tenant_id: &str, period: Period) -> Result<Booking, DomainError> {
        let apartment_id = self.id.clone().ok_or(DomainError::NotPersisted)?;
        let tenant_id = require_non_blank("tenant_id", tenant_id)?;
        Ok(Booking::apartment(apartment_id, tenant_id, period))
    }
}
