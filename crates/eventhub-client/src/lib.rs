//! EventHub Client - Rust SDK for the EventHub platform
//!
//! This crate provides:
//! - HTTP client with bearer-token lifecycle (set on login, cleared on logout/401)
//! - API client with typed methods for the events, internship, auth, and admin endpoints
//! - Resilient collection fetching: a consumer always receives a renderable,
//!   non-empty page, degrading to a bundled fallback dataset when the live
//!   backend fails or returns nothing
//! - The bundled sample events dataset

pub mod api;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod http;

pub use api::{EventHubApiClient, ResumeUpload};
pub use error::ClientError;
pub use fallback::sample_events;
pub use fetcher::{FallbackDataset, ResilientCollection, fetch_collection, fetch_pair};
pub use http::{EventHubHttpClient, HttpClientConfig, TokenPair};
