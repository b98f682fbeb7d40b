// Shared test fixture for the BookApartment command.

use crate::modules::apartments::use_cases::book_apartment::command::BookApartment;
use chrono::NaiveDate;

pub const APARTMENT_ID: &str = "2178231";
pub const TENANT_ID: &str = "137";

pub fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 4).unwrap()
}

pub fn middle() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 5).unwrap()
}

pub fn end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 6).unwrap()
}

pub struct BookApartmentBuilder {
    inner: BookApartment,
}

impl Default for BookApartmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookApartmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: BookApartment {
                apartment_id: APARTMENT_ID.to_string(),
                tenant_id: TENANT_ID.to_string(),
                start: start(),
                end: end(),
            },
        }
    }

    pub fn apartment_id(mut self, v: impl Into<String>) -> Self {
        self.inner.apartment_id = v.into();
        self
    }

    pub fn tenant_id(mut self, v: impl Into<String>) -> Self {
        self.inner.tenant_id = v.into();
        self
    }

    pub fn start(mut self, v: NaiveDate) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: NaiveDate) -> Self {
        self.inner.end = v;
        self
    }

    pub fn build(self) -> BookApartment {
        self.inner
    }
}
