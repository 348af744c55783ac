//! Services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks, token signing, and backend access
//! so route handlers can stay focused on protocol translation and auth
//! plumbing.

pub mod backend;
pub mod credentials;
pub mod session;
