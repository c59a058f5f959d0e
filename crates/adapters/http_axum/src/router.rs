//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

use crate::state::AppState;

/// The served application: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Build the top-level axum application.
///
/// Nests API routes under `/api/v1`, answers unmatched routes with a JSON
/// 404, and includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem. A trailing slash is
/// trimmed before routing, so `/api/v1/states/` reaches `/api/v1/states`.
pub fn build<SR, CR, AR, UR, PR>(state: AppState<SR, CR, AR, UR, PR>) -> App
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .fallback(crate::error::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    // Path rewriting must run before routing, so it wraps the router.
    NormalizePath::trim_trailing_slash(router)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::city::City;
    use hbnb_domain::error::HbnbError;
    use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
    use hbnb_domain::place::Place;
    use hbnb_domain::state::State;
    use hbnb_domain::user::User;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubStateRepo;
    #[derive(Clone)]
    struct StubCityRepo;
    #[derive(Clone)]
    struct StubAmenityRepo;
    #[derive(Clone)]
    struct StubUserRepo;
    #[derive(Clone)]
    struct StubPlaceRepo;

    impl StateRepository for StubStateRepo {
        async fn create(&self, state: State) -> Result<State, HbnbError> {
            Ok(state)
        }
        async fn get_by_id(&self, _id: StateId) -> Result<Option<State>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, state: State) -> Result<State, HbnbError> {
            Ok(state)
        }
        async fn delete(&self, _id: StateId) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    impl CityRepository for StubCityRepo {
        async fn create(&self, city: City) -> Result<City, HbnbError> {
            Ok(city)
        }
        async fn get_by_id(&self, _id: CityId) -> Result<Option<City>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<City>, HbnbError> {
            Ok(vec![])
        }
        async fn find_by_state(&self, _state_id: StateId) -> Result<Vec<City>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, city: City) -> Result<City, HbnbError> {
            Ok(city)
        }
        async fn delete(&self, _id: CityId) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    impl AmenityRepository for StubAmenityRepo {
        async fn create(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
            Ok(amenity)
        }
        async fn get_by_id(&self, _id: AmenityId) -> Result<Option<Amenity>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
            Ok(amenity)
        }
        async fn delete(&self, _id: AmenityId) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    impl UserRepository for StubUserRepo {
        async fn create(&self, user: User) -> Result<User, HbnbError> {
            Ok(user)
        }
        async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, user: User) -> Result<User, HbnbError> {
            Ok(user)
        }
        async fn delete(&self, _id: UserId) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    impl PlaceRepository for StubPlaceRepo {
        async fn create(&self, place: Place) -> Result<Place, HbnbError> {
            Ok(place)
        }
        async fn get_by_id(&self, _id: PlaceId) -> Result<Option<Place>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
            Ok(vec![])
        }
        async fn find_by_city(&self, _city_id: CityId) -> Result<Vec<Place>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, place: Place) -> Result<Place, HbnbError> {
            Ok(place)
        }
        async fn delete(&self, _id: PlaceId) -> Result<(), HbnbError> {
            Ok(())
        }
        async fn add_amenity(
            &self,
            _place_id: PlaceId,
            _amenity_id: AmenityId,
        ) -> Result<(), HbnbError> {
            Ok(())
        }
        async fn remove_amenity(
            &self,
            _place_id: PlaceId,
            _amenity_id: AmenityId,
        ) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    fn app() -> App {
        build(AppState::from_repositories(
            StubStateRepo,
            StubCityRepo,
            StubAmenityRepo,
            StubUserRepo,
            StubPlaceRepo,
        ))
    }

    async fn send(method: &str, uri: &str, body: &'static str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let (status, bytes) = send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send("GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn should_report_status_ok() {
        let (status, body) = send_json("GET", "/api/v1/status", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn should_count_zero_records_when_storage_empty() {
        let (status, body) = send_json("GET", "/api/v1/stats", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"amenities": 0, "cities": 0, "places": 0, "states": 0, "users": 0})
        );
    }

    #[tokio::test]
    async fn should_answer_unknown_route_with_json_not_found() {
        let (status, body) = send_json("GET", "/api/v1/nowhere", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_reject_non_json_body_on_every_create_route() {
        let id = StateId::new();
        let nested_city = format!("/api/v1/states/{id}/cities");
        let nested_place = format!("/api/v1/cities/{id}/places");
        for uri in [
            "/api/v1/states",
            "/api/v1/amenities",
            "/api/v1/users",
            "/api/v1/places_search",
            nested_city.as_str(),
            nested_place.as_str(),
        ] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .body(Body::from("not json"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({"error": "Not a JSON"}), "{uri}");
        }
    }

    #[tokio::test]
    async fn should_return_not_found_when_path_id_is_not_a_uuid() {
        let (status, body) = send_json("GET", "/api/v1/states/not-a-uuid", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_return_not_found_when_record_missing() {
        let uri = format!("/api/v1/places/{}", PlaceId::new());
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_create_state_and_hide_server_fields_from_input() {
        let (status, body) = send_json(
            "POST",
            "/api/v1/states",
            r#"{"name": "California", "id": "ignored", "__class__": "State"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["__class__"], "State");
        assert_eq!(body["name"], "California");
        assert_ne!(body["id"], "ignored");
    }

    #[tokio::test]
    async fn should_reject_unknown_field_on_create() {
        let (status, body) =
            send_json("POST", "/api/v1/amenities", r#"{"name": "Wifi", "speed": 5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Unknown field speed"}));
    }

    #[tokio::test]
    async fn should_never_serialize_user_password() {
        let (status, body) = send_json(
            "POST",
            "/api/v1/users",
            r#"{"email": "a@b.c", "password": "secret"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "a@b.c");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn should_return_empty_search_when_amenity_id_malformed() {
        let (status, body) =
            send_json("POST", "/api/v1/places_search", r#"{"amenities": ["nope"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn should_reject_empty_object_on_create_and_update() {
        let update = format!("/api/v1/states/{}", StateId::new());
        for (method, uri) in [("POST", "/api/v1/states"), ("PUT", update.as_str())] {
            let (status, body) = send_json(method, uri, "{}").await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(body, json!({"error": "Not a JSON"}), "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn should_accept_empty_object_as_search_without_filter() {
        let (status, body) = send_json("POST", "/api/v1/places_search", "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn should_route_paths_with_trailing_slash() {
        let (status, body) = send_json("GET", "/api/v1/states/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send_json("GET", "/api/v1/status/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK"}));
    }
}
