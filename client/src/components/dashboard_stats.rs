//! Aggregate count cards at the top of the dashboard.
//!
//! A failed or pending fetch renders the same cards with zeros; the stats
//! widget has no separate empty state.

#[cfg(test)]
#[path = "dashboard_stats_test.rs"]
mod dashboard_stats_test;

use leptos::prelude::*;

use crate::net::types::DashboardStats;
use crate::state::load::LoadState;
use crate::util::format::format_score;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: &'static str,
}

#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard { label: "Всего статей", value: stats.total_articles.to_string(), tone: "blue" },
        StatCard { label: "В ожидании", value: stats.pending_articles.to_string(), tone: "yellow" },
        StatCard { label: "Опубликовано", value: stats.published_articles.to_string(), tone: "green" },
        StatCard { label: "Средний балл", value: format_score(stats.avg_score), tone: "purple" },
    ]
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let stats = RwSignal::new(LoadState::<DashboardStats>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::mount::MountGuard::install();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_stats().await;
            if let Err(e) = &result {
                log::warn!("stats fetch failed: {e}");
            }
            guard.deliver(LoadState::from_record(result), |next| stats.set(next));
        });
    }

    view! {
        <section class="stats-panel">
            {move || {
                let state = stats.get();
                let loading = state.is_loading();
                let values = state.populated().cloned().unwrap_or_default();
                stat_cards(&values)
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class=format!("stat-card stat-card--{}", card.tone) class:skeleton=loading>
                                <p class="stat-card__label">{card.label}</p>
                                <p class="stat-card__value">{if loading { String::new() } else { card.value }}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
