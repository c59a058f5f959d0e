//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod place_amenities;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod places_search;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<SR, CR, AR, UR, PR>() -> Router<AppState<SR, CR, AR, UR, PR>>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        // Index
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<SR, CR, AR, UR, PR>))
        // States
        .route(
            "/states",
            get(states::list::<SR, CR, AR, UR, PR>).post(states::create::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/states/{id}",
            get(states::get::<SR, CR, AR, UR, PR>)
                .put(states::update::<SR, CR, AR, UR, PR>)
                .delete(states::delete::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/states/{id}/cities",
            get(cities::list_of_state::<SR, CR, AR, UR, PR>)
                .post(cities::create::<SR, CR, AR, UR, PR>),
        )
        // Cities
        .route("/cities", get(cities::list::<SR, CR, AR, UR, PR>))
        .route(
            "/cities/{id}",
            get(cities::get::<SR, CR, AR, UR, PR>)
                .put(cities::update::<SR, CR, AR, UR, PR>)
                .delete(cities::delete::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/cities/{id}/places",
            get(places::list_of_city::<SR, CR, AR, UR, PR>)
                .post(places::create::<SR, CR, AR, UR, PR>),
        )
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<SR, CR, AR, UR, PR>)
                .post(amenities::create::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/amenities/{id}",
            get(amenities::get::<SR, CR, AR, UR, PR>)
                .put(amenities::update::<SR, CR, AR, UR, PR>)
                .delete(amenities::delete::<SR, CR, AR, UR, PR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, CR, AR, UR, PR>).post(users::create::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<SR, CR, AR, UR, PR>)
                .put(users::update::<SR, CR, AR, UR, PR>)
                .delete(users::delete::<SR, CR, AR, UR, PR>),
        )
        // Places
        .route("/places", get(places::list::<SR, CR, AR, UR, PR>))
        .route(
            "/places/{id}",
            get(places::get::<SR, CR, AR, UR, PR>)
                .put(places::update::<SR, CR, AR, UR, PR>)
                .delete(places::delete::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/places/{id}/amenities",
            get(place_amenities::list::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/places/{id}/amenities/{amenity_id}",
            post(place_amenities::link::<SR, CR, AR, UR, PR>)
                .delete(place_amenities::unlink::<SR, CR, AR, UR, PR>),
        )
        .route(
            "/places_search",
            post(places_search::search::<SR, CR, AR, UR, PR>),
        )
}
