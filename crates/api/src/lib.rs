//! SuitePrompt API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! routes, CAPTCHA verification) so integration tests and the binary
//! entrypoint can both access them.

pub mod captcha;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
