//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Each widget fetches its own slice on mount,
//! so one failing backend endpoint never blanks the others.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::activity_log::ActivityLog;
use crate::components::dashboard_stats::StatsPanel;
use crate::components::nav_bar::NavBar;
use crate::components::quick_actions::QuickActions;
use crate::components::recent_articles::RecentArticles;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="page">
            <NavBar />
            <main class="page__main">
                <header class="page__header">
                    <h1>"Панель управления"</h1>
                    <p class="page__subtitle">"Система автоматического поиска и публикации контента для energo-audit.by"</p>
                </header>
                <StatsPanel />
                <div class="dashboard-grid">
                    <RecentArticles />
                    <ActivityLog />
                </div>
                <QuickActions />
            </main>
        </div>
    }
}
