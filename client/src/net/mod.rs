//! Networking modules for the site's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and their timeouts, and `types` defines the
//! request/response bodies shared with the server.

pub mod api;
pub mod types;
