//! Backends behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Each service sits behind an async trait so route tests can swap in
//! in-memory or mock implementations; the production ones speak HTTP to
//! hosted providers through `reqwest`.

pub mod speech;
pub mod subscribers;
