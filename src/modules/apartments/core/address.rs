use crate::modules::apartments::core::errors::{DomainError, require_non_blank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    postal_code: String,
    house_number: String,
    apartment_number: String,
    city: String,
    country: String,
}

impl Address {
    pub fn new(
        street: &str,
        postal_code: &str,
        house_number: &str,
        apartment_number: &str,
        city: &str,
        country: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            street: require_non_blank("street", street)?,
            postal_code: require_non_blank("postal_code", postal_code)?,
            house_number: require_non_blank("house_number", house_number)?,
            apartment_number: require_non_blank("apartment_number", apartment_number)?,
            city: require_non_blank("city", city)?,
            country: require_non_blank("country", country)?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn house_number(&self) -> &str {
        &self.house_number
    }

    pub fn apartment_number(&self) -> &str {
        &self.apartment_number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}
