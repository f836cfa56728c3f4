//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own token issuance, password hashing, and identity
//! persistence so route handlers can stay focused on protocol translation
//! and auth plumbing.

pub mod password;
pub mod token;
pub mod user;
