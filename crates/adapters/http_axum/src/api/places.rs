//! JSON REST handlers for places, top-level and nested under their city.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::place::{NewPlace, Place, PlaceUpdate};

use crate::error::ApiError;
use crate::extract::{JsonPayload, path_id};
use crate::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::state::AppState;

/// `GET /api/v1/places`
pub async fn list<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/cities/{id}/places`
pub async fn list_of_city<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(city_id): Path<String>,
) -> Result<ListResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let city_id: CityId = path_id(&city_id, "City")?;
    let places = state.place_service.list_places_of_city(city_id).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/places/{id}`
pub async fn get<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = path_id(&id, "Place")?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `POST /api/v1/cities/{id}/places`
pub async fn create<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(city_id): Path<String>,
    JsonPayload(draft): JsonPayload<NewPlace>,
) -> Result<CreateResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let city_id: CityId = path_id(&city_id, "City")?;
    let created = state.place_service.create_place(city_id, draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/places/{id}`
pub async fn update<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
    JsonPayload(patch): JsonPayload<PlaceUpdate>,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = path_id(&id, "Place")?;
    let updated = state.place_service.update_place(place_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/places/{id}`
pub async fn delete<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = path_id(&id, "Place")?;
    state.place_service.delete_place(place_id).await?;
    Ok(DeleteResponse::Ok)
}
