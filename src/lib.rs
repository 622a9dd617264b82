//! Attraction tools: trigger-host tools backed by a travel-data API.
//!
//! Exposes attraction search and attraction reviews as named tools. Each
//! tool forwards the caller's query upstream and reduces the response to
//! a small, stable record schema.

pub mod config;
pub mod extract;
pub mod tools;
pub mod travel;
pub mod types;
