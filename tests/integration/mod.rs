//! Integration tests module
//!
//! Runs the routes in-process through actix-web's test service.
