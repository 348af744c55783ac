//! Article status badge.

use leptos::prelude::*;

use crate::net::types::ArticleStatus;

#[must_use]
pub fn badge_class(status: &ArticleStatus) -> &'static str {
    match status {
        ArticleStatus::Published => "badge badge--published",
        ArticleStatus::Approved => "badge badge--approved",
        ArticleStatus::Rejected => "badge badge--rejected",
        ArticleStatus::Pending | ArticleStatus::Other(_) => "badge badge--pending",
    }
}

#[component]
pub fn StatusBadge(status: ArticleStatus) -> impl IntoView {
    view! { <span class=badge_class(&status)>{status.label()}</span> }
}
