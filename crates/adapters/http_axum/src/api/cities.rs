//! JSON REST handlers for cities, top-level and nested under their state.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::city::{City, CityUpdate, NewCity};
use hbnb_domain::id::{CityId, StateId};

use crate::error::ApiError;
use crate::extract::{JsonPayload, path_id};
use crate::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::state::AppState;

/// `GET /api/v1/cities`
pub async fn list<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
) -> Result<ListResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let cities = state.city_service.list_cities().await?;
    Ok(ListResponse::Ok(Json(cities)))
}

/// `GET /api/v1/states/{id}/cities`
pub async fn list_of_state<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(state_id): Path<String>,
) -> Result<ListResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let state_id: StateId = path_id(&state_id, "State")?;
    let cities = state.city_service.list_cities_of_state(state_id).await?;
    Ok(ListResponse::Ok(Json(cities)))
}

/// `GET /api/v1/cities/{id}`
pub async fn get<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let city_id: CityId = path_id(&id, "City")?;
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::Ok(Json(city)))
}

/// `POST /api/v1/states/{id}/cities`
pub async fn create<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(state_id): Path<String>,
    JsonPayload(draft): JsonPayload<NewCity>,
) -> Result<CreateResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let state_id: StateId = path_id(&state_id, "State")?;
    let created = state.city_service.create_city(state_id, draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/cities/{id}`
pub async fn update<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
    JsonPayload(patch): JsonPayload<CityUpdate>,
) -> Result<GetResponse<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let city_id: CityId = path_id(&id, "City")?;
    let updated = state.city_service.update_city(city_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/cities/{id}`
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
    let city_id: CityId = path_id(&id, "City")?;
    state.city_service.delete_city(city_id).await?;
    Ok(DeleteResponse::Ok)
}
