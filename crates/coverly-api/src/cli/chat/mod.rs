//! Interactive CLI consultation experience for Coverly.
//!
//! This module implements the full chat loop: welcome banner, advisor
//! greeting, async line input with slash commands and backslash
//! continuation, a thinking spinner while the backend works, and
//! rendering of replies, profile tables, and the final consultation.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
