// Reservation of a rental place by a tenant over a closed period.
//
// Bookings are only created through the place being rented (see `Apartment::book`), which
// keeps the apartment as the consistency boundary. The identity is handed out by the
// booking repository on save.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::apartments::core::period::{Period, PeriodDays};

pub type BookingId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalType {
    Apartment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: Option<BookingId>,
    rental_type: RentalType,
    rental_place_id: String,
    tenant_id: String,
    period: Period,
}

impl Booking {
    pub(crate) fn apartment(apartment_id: String, tenant_id: String, period: Period) -> Self {
        Self {
            id: None,
            rental_type: RentalType::Apartment,
            rental_place_id: apartment_id,
            tenant_id,
            period,
        }
    }

    pub fn with_id(self, id: impl Into<BookingId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn rental_type(&self) -> RentalType {
        self.rental_type
    }

    pub fn is_apartment(&self) -> bool {
        self.rental_type == RentalType::Apartment
    }

    pub fn rental_place_id(&self) -> &str {
        &self.rental_place_id
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.period.contains(day)
    }

    pub fn contains_all_days(&self, days: impl IntoIterator<Item = NaiveDate>) -> bool {
        days.into_iter().all(|day| self.contains_day(day))
    }

    pub fn days(&self) -> PeriodDays {
        self.period.days()
    }
}
