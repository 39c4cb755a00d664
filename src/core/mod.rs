//! Core domain logic: request composition, HTTP plumbing, fetch operations.

pub mod client;
pub mod http;
pub mod logging;
pub mod models;
pub mod request;
