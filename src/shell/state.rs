use crate::modules::apartments::adapters::outbound::apartment_repository_in_memory::InMemoryApartmentRepository;
use crate::modules::apartments::adapters::outbound::booking_repository_in_memory::InMemoryBookingRepository;
use crate::modules::apartments::application::apartment_application_service::ApartmentApplicationService;
use crate::modules::apartments::core::events::ApartmentEvent;
use crate::modules::apartments::core::ports::{ApartmentRepository, BookingRepository};
use crate::shared::infrastructure::event_channel::in_memory::InMemoryEventChannel;
use std::sync::Arc;

pub type InMemoryApartmentService = ApartmentApplicationService<
    InMemoryApartmentRepository,
    InMemoryEventChannel<ApartmentEvent>,
    InMemoryBookingRepository,
>;

#[derive(Clone)]
pub struct AppState {
    pub apartment_service: Arc<InMemoryApartmentService>,
    pub apartments: Arc<dyn ApartmentRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(
        apartments: Arc<InMemoryApartmentRepository>,
        events: Arc<InMemoryEventChannel<ApartmentEvent>>,
        bookings: Arc<InMemoryBookingRepository>,
    ) -> Self {
        let apartment_service = Arc::new(ApartmentApplicationService::new(
            apartments.clone(),
            events,
            bookings.clone(),
        ));
        Self {
            apartment_service,
            apartments,
            bookings,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryApartmentRepository::new()),
            Arc::new(InMemoryEventChannel::new()),
            Arc::new(InMemoryBookingRepository::new()),
        )
    }
}
