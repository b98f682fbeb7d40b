use async_graphql::{
    ComplexObject, Context, ID, InputObject, Object, Result as GqlResult, SimpleObject,
};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

use crate::modules::apartments::core::apartment::Apartment;
use crate::modules::apartments::core::booking::Booking;
use crate::modules::apartments::core::period::Period;
use crate::modules::apartments::use_cases::add_apartment::command::AddApartment;
use crate::modules::apartments::use_cases::book_apartment::command::BookApartment;
use crate::shell::state::AppState;

pub const MAX_DAYS_PER_PAGE: u32 = 366;

#[derive(SimpleObject, Clone)]
pub struct GqlRoom {
    pub name: String,
    pub area: f64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlApartment {
    pub id: ID,
    pub owner_id: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub rooms: Vec<GqlRoom>,
}

impl From<Apartment> for GqlApartment {
    fn from(a: Apartment) -> Self {
        let address = a.address();
        Self {
            id: ID(a.id().unwrap_or_default().to_string()),
            owner_id: a.owner_id().to_string(),
            street: address.street().to_string(),
            postal_code: address.postal_code().to_string(),
            house_number: address.house_number().to_string(),
            apartment_number: address.apartment_number().to_string(),
            city: address.city().to_string(),
            country: address.country().to_string(),
            description: a.description().to_string(),
            rooms: a
                .rooms()
                .iter()
                .map(|room| GqlRoom {
                    name: room.name().to_string(),
                    area: room.size().value(),
                })
                .collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct GqlBooking {
    pub id: ID,
    pub apartment_id: String,
    pub tenant_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[graphql(skip)]
    pub period: Period,
}

#[ComplexObject]
impl GqlBooking {
    async fn day_count(&self) -> u64 {
        self.period.len_in_days()
    }

    async fn contains_day(&self, day: NaiveDate) -> bool {
        self.period.contains(day)
    }

    /// Days of the booking in order, one page at a time. `limit` is capped at 366.
    async fn days(
        &self,
        #[graphql(default = 0)] offset: u32,
        #[graphql(default = 366)] limit: u32,
    ) -> Vec<NaiveDate> {
        let limit = limit.min(MAX_DAYS_PER_PAGE) as usize;
        let first = match self.period.start().checked_add_days(Days::new(offset.into())) {
            Some(first) if first <= self.period.end() => first,
            _ => return Vec::new(),
        };
        match Period::new(first, self.period.end()) {
            Ok(page) => page.days().take(limit).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl From<Booking> for GqlBooking {
    fn from(b: Booking) -> Self {
        let period = b.period();
        Self {
            id: ID(b.id().unwrap_or_default().to_string()),
            apartment_id: b.rental_place_id().to_string(),
            tenant_id: b.tenant_id().to_string(),
            start: period.start(),
            end: period.end(),
            period,
        }
    }
}

#[derive(InputObject)]
pub struct RoomInput {
    pub name: String,
    pub area: f64,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn apartment(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlApartment>> {
        let state = context.data_unchecked::<AppState>();
        let apartment = state
            .apartments
            .find_by_id(&id.0)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(apartment.map(Into::into))
    }

    async fn booking(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlBooking>> {
        let state = context.data_unchecked::<AppState>();
        let booking = state
            .bookings
            .find_by_id(&id.0)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(booking.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_apartment(
        &self,
        context: &Context<'_>,
        owner_id: String,
        street: String,
        postal_code: String,
        house_number: String,
        apartment_number: String,
        city: String,
        country: String,
        description: String,
        rooms: Vec<RoomInput>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let mut rooms_definition = BTreeMap::new();
        for room in rooms {
            if rooms_definition.insert(room.name.clone(), room.area).is_some() {
                return Err(async_graphql::Error::new(format!(
                    "room {} is defined more than once",
                    room.name
                )));
            }
        }

        let command = AddApartment {
            owner_id,
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
            description,
            rooms: rooms_definition,
        };

        let apartment_id = state
            .apartment_service
            .add(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(apartment_id))
    }

    async fn book_apartment(
        &self,
        context: &Context<'_>,
        apartment_id: ID,
        tenant_id: String,
        start: NaiveDate,
        end: NaiveDate,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = BookApartment {
            apartment_id: apartment_id.0,
            tenant_id,
            start,
            end,
        };

        let booking_id = state
            .apartment_service
            .book(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(booking_id))
    }
}
