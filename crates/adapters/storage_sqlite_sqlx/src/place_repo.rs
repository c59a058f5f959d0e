//! `SQLite` implementation of [`PlaceRepository`].
//!
//! Places live in `places`; their amenities live in the `place_amenity` link
//! table and are attached to every place read back.

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId};
use hbnb_domain::place::Place;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Place`], without links.
struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Place {
            id: decode::id(row, "id")?,
            city_id: decode::id(row, "city_id")?,
            user_id: decode::id(row, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: decode::count(row, "number_rooms")?,
            number_bathrooms: decode::count(row, "number_bathrooms")?,
            max_guest: decode::count(row, "max_guest")?,
            price_by_night: decode::count(row, "price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            amenity_ids: Vec::new(),
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

/// One row of the `place_amenity` link table.
struct Link {
    place_id: PlaceId,
    amenity_id: AmenityId,
}

impl<'r> FromRow<'r, SqliteRow> for Link {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            place_id: decode::id(row, "place_id")?,
            amenity_id: decode::id(row, "amenity_id")?,
        })
    }
}

/// Attach links to their places, keeping link order.
fn attach(rows: Vec<Wrapper>, links: Vec<Link>) -> Vec<Place> {
    let mut by_place: HashMap<PlaceId, Vec<AmenityId>> = HashMap::new();
    for link in links {
        by_place
            .entry(link.place_id)
            .or_default()
            .push(link.amenity_id);
    }
    rows.into_iter()
        .map(|Wrapper(mut place)| {
            place.amenity_ids = by_place.remove(&place.id).unwrap_or_default();
            place
        })
        .collect()
}

const INSERT: &str = "INSERT INTO places (id, city_id, user_id, name, description, number_rooms, number_bathrooms, max_guest, price_by_night, latitude, longitude, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY rowid";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE places SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?, max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

const SELECT_LINKS_BY_PLACE: &str =
    "SELECT place_id, amenity_id FROM place_amenity WHERE place_id = ? ORDER BY rowid";
const SELECT_LINKS_ALL: &str = "SELECT place_id, amenity_id FROM place_amenity ORDER BY rowid";
const SELECT_LINKS_BY_CITY: &str = "SELECT pa.place_id, pa.amenity_id FROM place_amenity pa JOIN places p ON p.id = pa.place_id WHERE p.city_id = ? ORDER BY pa.rowid";
const INSERT_LINK: &str = "INSERT OR IGNORE INTO place_amenity (place_id, amenity_id) VALUES (?, ?)";
const DELETE_LINK: &str = "DELETE FROM place_amenity WHERE place_id = ? AND amenity_id = ?";

/// `SQLite`-backed place repository.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(place.id.to_string())
                .bind(place.city_id.to_string())
                .bind(place.user_id.to_string())
                .bind(&place.name)
                .bind(&place.description)
                .bind(i64::from(place.number_rooms))
                .bind(i64::from(place.number_bathrooms))
                .bind(i64::from(place.max_guest))
                .bind(i64::from(place.price_by_night))
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(place.created_at.to_rfc3339())
                .bind(place.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Place {
                amenity_ids: Vec::new(),
                ..place
            })
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;
            let Some(row) = row else {
                return Ok(None);
            };

            let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_PLACE)
                .bind(id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(vec![row], links).pop())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(rows, links))
        }
    }

    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
                .bind(city_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_CITY)
                .bind(city_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(attach(rows, links))
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&place.name)
                .bind(&place.description)
                .bind(i64::from(place.number_rooms))
                .bind(i64::from(place.number_bathrooms))
                .bind(i64::from(place.max_guest))
                .bind(i64::from(place.price_by_night))
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(place.updated_at.to_rfc3339())
                .bind(place.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn add_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT_LINK)
                .bind(place_id.to_string())
                .bind(amenity_id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn remove_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_LINK)
                .bind(place_id.to_string())
                .bind(amenity_id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
