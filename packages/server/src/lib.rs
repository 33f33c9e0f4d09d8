//! Statistics server library for the hibiki application.
//!
//! This library exposes library-wide statistics (songs, albums, users and
//! distinct artists) over HTTP, backed by a pluggable catalog store.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
