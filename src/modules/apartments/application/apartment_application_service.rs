// Application service for apartments. Orchestrates the write flows.
//
// Responsibilities
// - add: build the apartment through the factory and persist it.
// - book: load the apartment, let it create the booking, persist the booking and announce
//   it on the event channel.
// - Identifiers come from the repositories and are passed through untouched.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::apartments::application::errors::ApplicationError;
use crate::modules::apartments::core::apartment::ApartmentId;
use crate::modules::apartments::core::apartment_factory::ApartmentFactory;
use crate::modules::apartments::core::booking::BookingId;
use crate::modules::apartments::core::events::ApartmentEvent;
use crate::modules::apartments::core::events::v1::apartment_booked::ApartmentBookedV1;
use crate::modules::apartments::core::period::Period;
use crate::modules::apartments::core::ports::{ApartmentRepository, BookingRepository};
use crate::modules::apartments::use_cases::add_apartment::command::AddApartment;
use crate::modules::apartments::use_cases::book_apartment::command::BookApartment;
use crate::shared::infrastructure::event_channel::EventChannel;

pub struct ApartmentApplicationService<TApartments, TEvents, TBookings>
where
    TApartments: ApartmentRepository + 'static,
    TEvents: EventChannel<ApartmentEvent> + 'static,
    TBookings: BookingRepository + 'static,
{
    apartment_repository: Arc<TApartments>,
    event_channel: Arc<TEvents>,
    booking_repository: Arc<TBookings>,
    apartment_factory: ApartmentFactory,
}

impl<TApartments, TEvents, TBookings> ApartmentApplicationService<TApartments, TEvents, TBookings>
where
    TApartments: ApartmentRepository + 'static,
    TEvents: EventChannel<ApartmentEvent> + 'static,
    TBookings: BookingRepository + 'static,
{
    pub fn new(
        apartment_repository: Arc<TApartments>,
        event_channel: Arc<TEvents>,
        booking_repository: Arc<TBookings>,
    ) -> Self {
        Self {
            apartment_repository,
            event_channel,
            booking_repository,
            apartment_factory: ApartmentFactory,
        }
    }

    #[tracing::instrument(skip_all, fields(owner_id = %command.owner_id))]
    pub async fn add(&self, command: AddApartment) -> Result<ApartmentId, ApplicationError> {
        let apartment = self.apartment_factory.create(
            &command.owner_id,
            &command.street,
            &command.postal_code,
            &command.house_number,
            &command.apartment_number,
            &command.city,
            &command.country,
            &command.description,
            &command.rooms,
        )?;

        let apartment_id = self.apartment_repository.save(apartment).await?;
        info!(%apartment_id, "apartment added");
        Ok(apartment_id)
    }

    #[tracing::instrument(
        skip_all,
        fields(apartment_id = %command.apartment_id, tenant_id = %command.tenant_id)
    )]
    pub async fn book(&self, command: BookApartment) -> Result<BookingId, ApplicationError> {
        let apartment = self
            .apartment_repository
            .find_by_id(&command.apartment_id)
            .await?
            .ok_or_else(|| ApplicationError::ApartmentNotFound(command.apartment_id.clone()))?;

        let period = Period::new(command.start, command.end)?;
        let booking = apartment.book(&command.tenant_id, period)?;
        let event = ApartmentEvent::ApartmentBookedV1(ApartmentBookedV1::new(
            booking.rental_place_id(),
            apartment.owner_id(),
            booking.tenant_id(),
            booking.period(),
            Utc::now().timestamp_millis(),
        ));

        let booking_id = self.booking_repository.save(booking).await?;
        info!(%booking_id, days = period.len_in_days(), "apartment booked");

        // Fire-and-forget: the booking stays persisted whatever the channel does.
        if let Err(error) = self.event_channel.publish(event).await {
            warn!(%booking_id, %error, "failed to publish apartment booked event");
        }

        Ok(booking_id)
    }
}
