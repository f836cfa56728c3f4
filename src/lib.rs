//! DevConnect — developer social network backend + Rust API client.
//!
//! ARCHITECTURE
//! ============
//! The server half is a stateless JSON REST API: every request is
//! authenticated (bearer token in the `x-access-token` header), validated,
//! and resolved against Postgres with no shared mutable state beyond the
//! immutable signing key. The `client` module is the consumer half: a typed
//! REST client plus a single-writer session state machine that mirrors the
//! server's auth lifecycle.

pub mod client;
pub mod db;
pub mod routes;
pub mod services;
pub mod state;
