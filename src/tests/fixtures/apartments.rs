use crate::modules::apartments::core::apartment::Apartment;
use crate::modules::apartments::core::apartment_factory::ApartmentFactory;
use crate::tests::fixtures::commands::add_apartment::AddApartmentBuilder;

pub fn make_apartment() -> Apartment {
    let command = AddApartmentBuilder::new().build();
    ApartmentFactory
        .create(
            &command.owner_id,
            &command.street,
            &command.postal_code,
            &command.house_number,
            &command.apartment_number,
            &command.city,
            &command.country,
            &command.description,
            &command.rooms,
        )
        .expect("fixture apartment must be valid")
}
