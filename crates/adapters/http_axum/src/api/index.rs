//! Service status and record counts.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /status`.
#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
}

/// Number of stored records per kind.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub amenities: usize,
    pub cities: usize,
    pub places: usize,
    pub states: usize,
    pub users: usize,
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<Stats>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// `GET /api/v1/stats`
pub async fn stats<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
) -> Result<StatsResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let stats = Stats {
        amenities: state.amenity_service.list_amenities().await?.len(),
        cities: state.city_service.list_cities().await?.len(),
        places: state.place_service.list_places().await?.len(),
        states: state.state_service.list_states().await?.len(),
        users: state.user_service.list_users().await?.len(),
    };
    Ok(StatsResponse::Ok(Json(stats)))
}
