// Builds a valid Apartment out of raw primitives.
//
// Rules
// - owner id and every address part must contain something besides whitespace.
// - at least one room; every room needs a name and a finite, positive area.
// - the description is free text and may be empty.

use std::collections::BTreeMap;

use crate::modules::apartments::core::address::Address;
use crate::modules::apartments::core::apartment::Apartment;
use crate::modules::apartments::core::errors::{DomainError, require_non_blank};
use crate::modules::apartments::core::room::Room;

#[derive(Debug, Default, Clone, Copy)]
pub struct ApartmentFactory;

impl ApartmentFactory {
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        owner_id: &str,
        street: &str,
        postal_code: &str,
        house_number: &str,
        apartment_number: &str,
        city: &str,
        country: &str,
        description: &str,
        rooms_definition: &BTreeMap<String, f64>,
    ) -> Result<Apartment, DomainError> {
        let owner_id = require_non_blank("owner_id", owner_id)?;
        let address = Address::new(
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
        )?;
        if rooms_definition.is_empty() {
            return Err(DomainError::NoRooms);
        }
        let rooms = rooms_definition
            .iter()
            .map(|(name, area)| Room::new(name, *area))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Apartment::new(
            owner_id,
            address,
            description.to_string(),
            rooms,
        ))
    }
}
