//! REST client layer for the cooking platform backend.
//!
//! This crate is the only place that talks HTTP. It owns the session
//! lifecycle (token storage, decode, expiry, the one-shot refresh retry),
//! the typed models for every endpoint, and the client-side media rules.
//! The UI crates consume it through [`ApiClient`] and [`Session`].

mod client;
mod endpoints;
mod error;
pub mod media;
pub mod models;
mod session;
pub mod storage;
pub mod token;
pub mod youtube;

pub use client::{ApiClient, ApiConfig, RetryPolicy};
pub use error::ApiError;
pub use session::{Session, SessionState};
