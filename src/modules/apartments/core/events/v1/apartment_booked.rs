// Event payload: ApartmentBookedV1.
//
// Records that a tenant booked an apartment for a closed period. Published once the
// booking has been persisted.
//
// Timestamps
// - occurred_at is epoch milliseconds.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::apartments::core::period::Period;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ApartmentBookedV1 {
    pub event_id: String,
    pub occurred_at: i64,
    pub apartment_id: String,
    pub owner_id: String,
    pub tenant_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl ApartmentBookedV1 {
    pub fn new(
        apartment_id: impl Into<String>,
        owner_id: impl Into<String>,
        tenant_id: impl Into<String>,
        period: Period,
        occurred_at: i64,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7().to_string(),
            occurred_at,
            apartment_id: apartment_id.into(),
            owner_id: owner_id.into(),
            tenant_id: tenant_id.into(),
            period_start: period.start(),
            period_end: period.end(),
        }
    }
}
