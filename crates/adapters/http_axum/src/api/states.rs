//! JSON REST handlers for states.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::id::StateId;
use hbnb_domain::state::{NewState, State as StateRecord, StateUpdate};

use crate::error::ApiError;
use crate::extract::{JsonPayload, path_id};
use crate::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::state::AppState;

/// `GET /api/v1/states`
pub async fn list<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
) -> Result<ListResponse<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let states = state.state_service.list_states().await?;
    Ok(ListResponse::Ok(Json(states)))
}

/// `GET /api/v1/states/{id}`
pub async fn get<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let state_id: StateId = path_id(&id, "State")?;
    let found = state.state_service.get_state(state_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/states`
pub async fn create<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    JsonPayload(draft): JsonPayload<NewState>,
) -> Result<CreateResponse<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let created = state.state_service.create_state(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/states/{id}`
pub async fn update<SR, CR, AR, UR, PR>(
    State(state): State<AppState<SR, CR, AR, UR, PR>>,
    Path(id): Path<String>,
    JsonPayload(patch): JsonPayload<StateUpdate>,
) -> Result<GetResponse<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let state_id: StateId = path_id(&id, "State")?;
    let updated = state.state_service.update_state(state_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/states/{id}`
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
    let state_id: StateId = path_id(&id, "State")?;
    state.state_service.delete_state(state_id).await?;
    Ok(DeleteResponse::Ok)
}
