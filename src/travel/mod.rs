pub mod client;

pub use client::{TravelClient, UpstreamError};
