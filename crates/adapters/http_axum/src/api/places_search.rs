//! JSON REST handler for place search.

use axum::Json;
use axum::extract::State;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::place::Place;
use hbnb_domain::search::PlaceSearchRequest;

use crate::error::ApiError;
use crate::extract::JsonPayload;
use crate::response::ListResponse;
use crate::state::AppState;

/// `POST /api/v1/places_search`
///
/// An amenity id that does not parse names no amenity, so no place can
/// offer it and the result is empty.
pub async fn search<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    JsonPayload(request): JsonPayload<PlaceSearchRequest>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let Some(search) = request.resolve() else {
        return Ok(ListResponse::Ok(Json(Vec::new())));
    };
    let places = state.search_service.search(search).await?;
    Ok(ListResponse::Ok(Json(places)))
}
