//! JSON REST handlers for amenities.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::amenity::{Amenity, AmenityUpdate, NewAmenity};
use hbnb_domain::id::AmenityId;

use crate::error::ApiError;
use crate::extract::{JsonPayload, path_id};
use crate::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::state::AppState;

/// `GET /api/v1/amenities`
pub async fn list<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
) -> Result<ListResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let amenities = state.amenity_service.list_amenities().await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `GET /api/v1/amenities/{id}`
pub async fn get<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let amenity_id: AmenityId = path_id(&id, "Amenity")?;
    let found = state.amenity_service.get_amenity(amenity_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/amenities`
pub async fn create<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    JsonPayload(draft): JsonPayload<NewAmenity>,
) -> Result<CreateResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let created = state.amenity_service.create_amenity(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/amenities/{id}`
pub async fn update<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
    JsonPayload(patch): JsonPayload<AmenityUpdate>,
) -> Result<GetResponse<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let amenity_id: AmenityId = path_id(&id, "Amenity")?;
    let updated = state.amenity_service.update_amenity(amenity_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/amenities/{id}`
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
    let amenity_id: AmenityId = path_id(&id, "Amenity")?;
    state.amenity_service.delete_amenity(amenity_id).await?;
    Ok(DeleteResponse::Ok)
}
