//! # CLI Module
//!
//! This module provides the command-line interface layer for Lidlist.
//! It implements the user-facing commands and coordinates between the
//! Lidarr API client, the matching heuristic, and user feedback.
//!
//! ## Commands
//!
//! - [`import`] - Reads a CSV want list and reconciles every entry
//!   against Lidarr: tracked artists get their matched album's
//!   monitored flag flipped, untracked artists are added with the
//!   matched album pre-monitored and searched immediately.
//! - [`search`] - Runs the same artist/album lookups the importer uses
//!   and prints the raw candidates as a table, useful for checking why
//!   an entry did or did not match.
//!
//! ## Error Handling
//!
//! Business-level misses (no artist found, no album matched) are
//! reported as warning lines and the run continues with the next
//! entry. Transport and parse faults terminate the run via `error!`.
//!
//! ## Pacing
//!
//! The import loop waits a fixed delay between entries as a courtesy
//! to the metadata provider behind Lidarr's lookup endpoints. The
//! delay is unconditional; skipped entries pace the loop too.

mod import;
mod search;

pub use import::import;
pub use search::search;
