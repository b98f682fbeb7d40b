use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::modules::apartments::application::errors::ApplicationError;
use crate::modules::apartments::use_cases::add_apartment::command::AddApartment;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddApartmentBody {
    pub owner_id: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[serde(deserialize_with = "unique_rooms")]
    pub rooms: BTreeMap<String, f64>,
}

// JSON objects may repeat a key; a room defined twice is rejected instead of overwritten.
fn unique_rooms<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueRooms;

    impl<'de> Visitor<'de> for UniqueRooms {
        type Value = BTreeMap<String, f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of room names to areas")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut rooms = BTreeMap::new();
            while let Some((name, area)) = access.next_entry::<String, f64>()? {
                if rooms.contains_key(&name) {
                    return Err(M::Error::custom(format!(
                        "room {name} is defined more than once"
                    )));
                }
                rooms.insert(name, area);
            }
            Ok(rooms)
        }
    }

    deserializer.deserialize_map(UniqueRooms)
}

#[derive(Serialize)]
pub struct AddApartmentResponse {
    pub apartment_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddApartmentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddApartment {
        owner_id: body.owner_id,
        street: body.street,
        postal_code: body.postal_code,
        house_number: body.house_number,
        apartment_number: body.apartment_number,
        city: body.city,
        country: body.country,
        description: body.description,
        rooms: body.rooms,
    };

    match state.apartment_service.add(command).await {
        Ok(apartment_id) => (
            StatusCode::CREATED,
            Json(AddApartmentResponse { apartment_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::BAD_REQUEST.into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to add apartment");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
