use crate::modules::apartments::adapters::outbound::apartment_repository_in_memory::InMemoryApartmentRepository;
use crate::modules::apartments::adapters::outbound::booking_repository_in_memory::InMemoryBookingRepository;
use crate::modules::apartments::application::apartment_application_service::ApartmentApplicationService;
use crate::modules::apartments::core::events::ApartmentEvent;
use crate::modules::apartments::core::ports::BookingRepository;
use crate::shared::infrastructure::event_channel::in_memory::InMemoryEventChannel;
use crate::tests::fixtures::commands::add_apartment::AddApartmentBuilder;
use crate::tests::fixtures::commands::book_apartment::BookApartmentBuilder;
use chrono::NaiveDate;
use std::sync::Arc;

#[tokio::test]
async fn lists_an_apartment_and_books_it_over_a_month_boundary() {
    let apartments = Arc::new(InMemoryApartmentRepository::new());
    let events = Arc::new(InMemoryEventChannel::<ApartmentEvent>::new());
    let bookings = Arc::new(InMemoryBookingRepository::new());
    let service =
        ApartmentApplicationService::new(apartments.clone(), events.clone(), bookings.clone());

    let apartment_id = service
        .add(AddApartmentBuilder::new().build())
        .await
        .unwrap();

    let stays = [
        ("137", (2020, 3, 30), (2020, 4, 2)),
        ("138", (2020, 4, 2), (2020, 4, 2)),
        ("139", (2020, 12, 31), (2021, 1, 1)),
    ];

    let mut booking_ids = Vec::new();
    for (tenant_id, (sy, sm, sd), (ey, em, ed)) in stays {
        let command = BookApartmentBuilder::new()
            .apartment_id(apartment_id.clone())
            .tenant_id(tenant_id)
            .start(NaiveDate::from_ymd_opt(sy, sm, sd).unwrap())
            .end(NaiveDate::from_ymd_opt(ey, em, ed).unwrap())
            .build();
        booking_ids.push(service.book(command).await.unwrap());
    }

    let first = bookings.find_by_id(&booking_ids[0]).await.unwrap().unwrap();
    let days: Vec<String> = first.days().map(|day| day.to_string()).collect();
    assert_eq!(
        days,
        vec!["2020-03-30", "2020-03-31", "2020-04-01", "2020-04-02"]
    );

    // Overlapping stays are both kept.
    let second = bookings.find_by_id(&booking_ids[1]).await.unwrap().unwrap();
    assert_eq!(second.days().count(), 1);
    assert!(first.contains_day(second.period().start()));

    let third = bookings.find_by_id(&booking_ids[2]).await.unwrap().unwrap();
    assert_eq!(third.period().len_in_days(), 2);

    let published = events.published.lock().await;
    assert_eq!(published.len(), 3);
    let tenants: Vec<&str> = published
        .iter()
        .map(|ApartmentEvent::ApartmentBookedV1(event)| event.tenant_id.as_str())
        .collect();
    assert_eq!(tenants, vec!["137", "138", "139"]);
    assert!(
        published
            .iter()
            .all(|ApartmentEvent::ApartmentBookedV1(event)| event.apartment_id == apartment_id)
    );
}
