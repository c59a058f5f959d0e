//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1` (`/states`, `/cities`,
//!   `/amenities`, `/users`, `/places`, `/places_search`, `/status`, `/stats`)
//! - Turn request bodies into domain drafts and patches, rejecting anything
//!   that is not a JSON object
//! - Map application results into HTTP responses, and [`HbnbError`] into
//!   status codes with a `{"error": ...}` body
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.
//!
//! [`HbnbError`]: hbnb_domain::error::HbnbError

pub mod api;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod state;
