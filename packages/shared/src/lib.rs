//! Shared utilities for the hibiki chat and music-library application.
//!
//! Provides logging setup and time helpers used by both the server and the
//! client packages.

pub mod logger;
pub mod time;
