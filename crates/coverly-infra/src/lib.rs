//! Infrastructure adapters for Coverly.
//!
//! Everything that touches the outside world lives here: the reqwest
//! client speaking the orchestrator's chat protocol and the loader for
//! the on-disk configuration file.

pub mod config;
pub mod orchestrator;
