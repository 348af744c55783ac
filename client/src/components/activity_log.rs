//! Recent backend activity on the dashboard.

#[cfg(test)]
#[path = "activity_log_test.rs"]
mod activity_log_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{LogAction, LogEntry, LogStatus};
use crate::state::load::LoadState;
use crate::util::format::format_date_time;

/// Entries requested for the dashboard log.
pub const LOG_LIMIT: u32 = 10;

#[must_use]
pub fn action_icon(action: &LogAction) -> &'static str {
    match action {
        LogAction::Search => "🔍",
        LogAction::Publish => "📝",
        LogAction::Share => "📣",
        LogAction::Other(_) => "•",
    }
}

#[must_use]
pub fn status_class(status: LogStatus) -> &'static str {
    match status {
        LogStatus::Success => "log-entry log-entry--success",
        LogStatus::Error => "log-entry log-entry--error",
        LogStatus::Info => "log-entry log-entry--info",
    }
}

#[component]
pub fn ActivityLog() -> impl IntoView {
    let logs = RwSignal::new(LoadState::<Vec<LogEntry>>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::mount::MountGuard::install();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_logs(LOG_LIMIT).await;
            if let Err(e) = &result {
                log::warn!("logs fetch failed: {e}");
            }
            guard.deliver(LoadState::from_list(result), |next| logs.set(next));
        });
    }

    view! {
        <section class="panel activity-log">
            <header class="panel__header">
                <h2>"Лог активности"</h2>
            </header>
            {move || {
                let state = logs.get();
                if state.is_loading() {
                    return view! {
                        <div class="skeleton-list">
                            {(0..4).map(|_| view! { <div class="skeleton skeleton--line"></div> }).collect_view()}
                        </div>
                    }
                        .into_any();
                }
                if state.shows_empty() {
                    return view! { <p class="panel__empty">"Нет записей активности"</p> }.into_any();
                }
                state
                    .items()
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class=status_class(entry.status)>
                                <span class="log-entry__icon">{action_icon(&entry.action)}</span>
                                <div class="log-entry__body">
                                    <p class="log-entry__message">{entry.message.clone()}</p>
                                    <p class="log-entry__time">{format_date_time(&entry.timestamp)}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
