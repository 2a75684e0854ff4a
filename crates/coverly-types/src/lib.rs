//! Shared domain types for Coverly.
//!
//! This crate contains the types used across the Coverly client: transcript
//! messages, consultation payloads, backend wire shapes, profile slots,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod consultation;
pub mod error;
pub mod message;
pub mod profile;
pub mod wire;
