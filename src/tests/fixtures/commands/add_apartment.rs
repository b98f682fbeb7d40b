// Shared test fixture for the AddApartment command.

use crate::modules::apartments::use_cases::add_apartment::command::AddApartment;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddApartmentDto {
    pub owner_id: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub rooms: BTreeMap<String, f64>,
}

pub struct AddApartmentBuilder {
    inner: AddApartment,
}

impl Default for AddApartmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddApartmentBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/add_apartment.json").unwrap();
        let dto: AddApartmentDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: AddApartment {
                owner_id: dto.owner_id,
                street: dto.street,
                postal_code: dto.postal_code,
                house_number: dto.house_number,
                apartment_number: dto.apartment_number,
                city: dto.city,
                country: dto.country,
                description: dto.description,
                rooms: dto.rooms,
            },
        }
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn street(mut self, v: impl Into<String>) -> Self {
        self.inner.street = v.into();
        self
    }

    pub fn city(mut self, v: impl Into<String>) -> Self {
        self.inner.city = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn rooms(mut self, v: BTreeMap<String, f64>) -> Self {
        self.inner.rooms = v;
        self
    }

    pub fn room(mut self, name: impl Into<String>, area: f64) -> Self {
        self.inner.rooms.insert(name.into(), area);
        self
    }

    pub fn build(self) -> AddApartment {
        self.inner
    }
}

#[cfg(test)]
mod add_apartment_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddApartmentBuilder::default().build();
        assert_eq!(built.owner_id, "1234");
        assert_eq!(built.street, "Florianska");
        assert_eq!(built.postal_code, "12-345");
        assert_eq!(built.house_number, "1");
        assert_eq!(built.apartment_number, "13");
        assert_eq!(built.city, "Cracow");
        assert_eq!(built.country, "Poland");
        assert_eq!(built.description, "Nice place to stay");
        assert_eq!(
            built.rooms,
            BTreeMap::from([("Toilet".to_string(), 10.0), ("Bedroom".to_string(), 30.0)])
        );
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = AddApartmentBuilder::new()
            .owner_id("owner-1")
            .street("Grodzka")
            .city("Warsaw")
            .description("desc")
            .room("Kitchen", 12.5)
            .build();

        assert_eq!(custom.owner_id, "owner-1");
        assert_eq!(custom.street, "Grodzka");
        assert_eq!(custom.city, "Warsaw");
        assert_eq!(custom.description, "desc");
        assert_eq!(custom.rooms.len(), 3);
        assert_eq!(custom.rooms.get("Kitchen"), Some(&12.5));
    }
}
