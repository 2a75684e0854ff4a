//! Consultation logic for Coverly.
//!
//! Everything in this crate is deterministic and network-free: parsing
//! product summaries, resolving recommendation cards, assembling the
//! final consultation view, and driving the turn-by-turn chat state
//! machine over an append-only transcript. The single seam to the
//! outside world is [`backend::ConsultBackend`]; the HTTP implementation
//! lives in `coverly-infra`.

pub mod backend;
pub mod card;
pub mod consultation;
pub mod controller;
pub mod summary;
pub mod transcript;
