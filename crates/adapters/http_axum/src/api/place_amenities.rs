//! JSON REST handlers for the amenities linked to a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_app::services::place_service::AmenityLink;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::{AmenityId, PlaceId};

use crate::error::ApiError;
use crate::extract::path_id;
use crate::response::{DeleteResponse, ListResponse};
use crate::state::AppState;

/// Possible responses from the link endpoint.
pub enum LinkResponse {
    /// The amenity was newly linked.
    Created(Json<Amenity>),
    /// The amenity was already linked.
    Ok(Json<Amenity>),
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Ok(json) => json.into_response(),
        }
    }
}

impl From<AmenityLink> for LinkResponse {
    fn from(link: AmenityLink) -> Self {
        match link {
            AmenityLink::Created(amenity) => Self::Created(Json(amenity)),
            AmenityLink::Existing(amenity) => Self::Ok(Json(amenity)),
        }
    }
}

fn ids(place_id: &str, amenity_id: &str) -> Result<(PlaceId, AmenityId), ApiError> {
    Ok((path_id(place_id, "Place")?, path_id(amenity_id, "Amenity")?))
}

/// `GET /api/v1/places/{id}/amenities`
pub async fn list<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = path_id(&place_id, "Place")?;
    let amenities = state.place_service.list_amenities_of_place(place_id).await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /api/v1/places/{id}/amenities/{amenity_id}`
pub async fn link<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<LinkResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let (place_id, amenity_id) = ids(&place_id, &amenity_id)?;
    let link = state
        .place_service
        .link_amenity(place_id, amenity_id)
        .await?;
    Ok(link.into())
}

/// `DELETE /api/v1/places/{id}/amenities/{amenity_id}`
pub async fn unlink<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let (place_id, amenity_id) = ids(&place_id, &amenity_id)?;
    state
        .place_service
        .unlink_amenity(place_id, amenity_id)
        .await?;
    Ok(DeleteResponse::Ok)
}
