// Command data type for listing a new apartment.
//
// Carries raw input for the factory to validate. Independent of HTTP or GraphQL.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct AddApartment {
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
