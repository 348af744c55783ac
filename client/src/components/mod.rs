//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard widgets own their fetch lifecycle; article components are
//! presentational and report user intent through callbacks.

pub mod activity_log;
pub mod article_card;
pub mod article_detail;
pub mod dashboard_stats;
pub mod nav_bar;
pub mod quick_actions;
pub mod recent_articles;
pub mod status_badge;
pub mod toast_host;
