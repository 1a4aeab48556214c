//! HTTP reply-fetching backend.

mod api;
mod client;
mod config;

pub use client::{BackendClient, EMPTY_REPLY_FALLBACK};
pub use config::BackendConfig;
