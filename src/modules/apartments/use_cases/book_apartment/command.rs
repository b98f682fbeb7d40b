// Command data type for booking an apartment over an inclusive range of days.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookApartment {
    pub apartment_id: String,
    pub tenant_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}
