//! The five most recently discovered articles on the dashboard.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::StatusBadge;
use crate::net::types::Article;
use crate::state::load::LoadState;
use crate::util::format::{format_date, format_score};

/// Rows requested for the dashboard preview.
pub const RECENT_LIMIT: u32 = 5;

#[component]
pub fn RecentArticles() -> impl IntoView {
    let articles = RwSignal::new(LoadState::<Vec<Article>>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::mount::MountGuard::install();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_articles(None, Some(RECENT_LIMIT)).await;
            if let Err(e) = &result {
                log::warn!("recent articles fetch failed: {e}");
            }
            guard.deliver(LoadState::from_list(result), |next| articles.set(next));
        });
    }

    view! {
        <section class="panel recent-articles">
            <header class="panel__header">
                <h2>"Последние статьи"</h2>
                <a class="panel__link" href="/articles">"Все статьи"</a>
            </header>
            {move || {
                let state = articles.get();
                if state.is_loading() {
                    return view! {
                        <div class="skeleton-list">
                            {(0..3).map(|_| view! { <div class="skeleton skeleton--row"></div> }).collect_view()}
                        </div>
                    }
                        .into_any();
                }
                if state.shows_empty() {
                    return view! { <p class="panel__empty">"Статьи не найдены. Запустите поиск."</p> }.into_any();
                }
                state
                    .items()
                    .iter()
                    .map(|article| {
                        view! {
                            <div class="recent-articles__row">
                                <p class="recent-articles__title">{article.title.clone()}</p>
                                <div class="recent-articles__meta">
                                    <span class="recent-articles__score">{format_score(article.ai_score)}</span>
                                    <StatusBadge status=article.status.clone() />
                                    <span>{format_date(&article.found_date)}</span>
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
