//! API client library for cinefind.
//!
//! Provides a client for The Movie Database (TMDB) API v3.

/// TMDB API client.
pub mod tmdb;
