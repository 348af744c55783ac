//! Client view state.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions. Pages wrap them in `RwSignal`s and
//! provide the shared ones (`auth`, `toast`) through Leptos context, so every
//! transition is testable without a browser.

pub mod articles;
pub mod auth;
pub mod load;
pub mod settings;
pub mod toast;
