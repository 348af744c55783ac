//! Networking modules for the server's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the `/api/*` calls the screens make, and `types` defines the
//! JSON schema shared with the server proxy.

pub mod api;
pub mod types;
