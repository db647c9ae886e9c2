//! # Lidarr Integration Module
//!
//! This module provides the interface to the Lidarr v1 HTTP API,
//! implementing the lookups and mutations the want-list importer
//! consumes. It abstracts away request construction, the API-key
//! header, and response deserialization, providing a clean Rust
//! interface for the higher-level CLI logic.
//!
//! ## Architecture
//!
//! All requests go through [`LidarrClient`], which is constructed with
//! the base URL and API key (see [`crate::config`]) and holds the
//! shared `reqwest` client. The per-domain submodules attach the
//! operations:
//!
//! ```text
//! CLI Layer (import, search)
//!          ↓
//! Lidarr Integration Layer
//!     ├── Artist Operations (lookup, add)
//!     └── Album Operations (lookup, listing, monitor toggle)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Lidarr v1 API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /artist/lookup?term=` - free-text artist search; returned
//!   records carry an `id` only when the artist is already tracked
//! - `GET /album/lookup?term=` - free-text album search against the
//!   metadata provider
//! - `GET /album?artistId=` - albums of a tracked artist
//! - `POST /artist` - add an artist, optionally with albums
//!   pre-monitored and an immediate search
//! - `PUT /album/monitor` - flip the monitored flag on a set of albums
//!
//! ## Authentication
//!
//! Lidarr authenticates with a static key sent as the `X-Api-Key`
//! header on every request. The key is passed to the client at
//! construction; there is no token lifecycle.
//!
//! ## Error Handling
//!
//! HTTP-level failures surface through `error_for_status` and
//! propagate as `reqwest::Error`. There is no retry layer: the importer
//! runs against a local instance and treats transport faults as fatal.

mod albums;
mod artists;
mod client;

pub use client::LidarrClient;
