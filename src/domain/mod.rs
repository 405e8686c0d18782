//! Domain layer
//!
//! Plain data types shared with the rest of the service.

pub mod models;
