//! # drplan-api
//!
//! HTTP API server for DR Plan.
//!
//! This crate provides the REST surface over the catalog and the planning
//! engine:
//! - Resource listing with filtering, search, and pagination
//! - Reference data (strategy comparison matrix, downloadable assets)
//! - Testimonial and contact intake with field-level validation
//! - Planning tools: strategy generation, cost estimation, risk assessment
//!
//! Handlers are thin controllers: extract parameters, validate, delegate to
//! the catalog store or the engine, serialize the result. All failures map
//! onto the three-bucket error taxonomy in [`error::ApiError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
