//! meansum HTTP server library.
//!
//! Exposes [`meansum::aggregate`] over a small JSON API:
//! `GET /` reports that the service is up and `POST /calculate` returns the
//! mean and sum of the submitted numbers.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use routes::create_router;
