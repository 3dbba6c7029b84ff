//! Library crate for leaderboard-back, exposing modules for the binaries and tests.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
