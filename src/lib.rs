//! ApiKey Authorization Library
//!
//! This module exposes the server components for testing purposes.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
