// src/lib.rs

//! Mood-driven movie and book discovery.
//!
//! Maps a small closed set of moods onto TMDB genre filters and Google
//! Books search strings, fetches one page of matches through the
//! corresponding catalog client, and tracks the results in a per-screen
//! session (phase, cursor, selection, supersession of stale fetches).

pub mod config;
pub mod error;
pub mod models;
pub mod moods;
pub mod services;
pub mod session;
pub mod utils;
