//! Replyforge: prompt configuration and compilation for an AI reply composer.
//!
//! The deterministic core behind a compose-surface overlay: given a
//! tab-dependent configuration (persona, four-part style, custom, or image
//! generation) and the scraped reply context, produce the
//! `{system_prompt, user_prompt, temperature}` triple for a
//! chat-completion request. Everything here is pure and synchronous;
//! scraping, storage, networking, and UI are the caller's problem.
//!
//! See `DESIGN.md` for the full design notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
