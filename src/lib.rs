//! HR administration backend
//!
//! Superadmin authentication and tenant lifecycle management over a JSON HTTP
//! API, laid out in hexagonal layers:
//!
//! - `domain`: entities, value objects, ports and services
//! - `application`: use cases invoked by the HTTP adapter
//! - `adapters`: the actix-web surface
//! - `infrastructure`: configuration, persistence and security implementations

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
