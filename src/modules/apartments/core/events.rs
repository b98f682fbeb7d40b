// Root event enumeration for the apartments module.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - The sibling folder 'events/' contains versioned payload modules.

pub mod v1 {
    pub mod apartment_booked;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ApartmentEvent {
    ApartmentBookedV1(v1::apartment_booked::ApartmentBookedV1),
}
