//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the record kinds: **States**, **Cities**, **Amenities**,
//!   **Users** and **Places**
//! - Define the create drafts and update patches accepted for each kind,
//!   and how a raw JSON object is turned into one ([`payload`])
//! - Define the place search filter ([`search`])
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod search;
pub mod state;
pub mod user;
