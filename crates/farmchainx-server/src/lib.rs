//! REST API server for FarmChainX: routes, authentication, DTOs, and
//! OpenAPI documentation.

pub mod auth;
pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
