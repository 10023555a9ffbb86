//! Client for the YouTube Data API v3 and the normalization of its payloads.

pub mod api;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod transport;
