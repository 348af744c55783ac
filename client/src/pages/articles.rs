//! Article review screen: filter, inspect, approve, reject.
//!
//! DESIGN
//! ======
//! `ArticlesState` lives in one signal for the page. Filter changes and
//! successful decisions both call `reload`, which stamps a ticket so only
//! the newest response is applied.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::article_card::ArticleCard;
use crate::components::article_detail::ArticleDetail;
use crate::components::nav_bar::NavBar;
use crate::net::types::{ArticleAction, StatusFilter};
use crate::state::articles::ArticlesState;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;

pub const LOAD_FAILED: &str = "Ошибка загрузки статей";

/// Filter button caption; only "all" carries the current count.
#[must_use]
pub fn filter_label(filter: StatusFilter, count: usize) -> String {
    match filter {
        StatusFilter::All => format!("Все ({count})"),
        StatusFilter::Pending => "В ожидании".to_owned(),
        StatusFilter::Published => "Опубликовано".to_owned(),
    }
}

/// Toast for a settled approve/reject request.
#[must_use]
pub fn decision_toast(action: ArticleAction, ok: bool) -> (ToastKind, &'static str) {
    match (action, ok) {
        (ArticleAction::Approve, true) => (ToastKind::Success, "Статья одобрена"),
        (ArticleAction::Reject, true) => (ToastKind::Success, "Статья отклонена"),
        (ArticleAction::Approve, false) => (ToastKind::Error, "Ошибка одобрения статьи"),
        (ArticleAction::Reject, false) => (ToastKind::Error, "Ошибка отклонения статьи"),
    }
}

#[cfg(feature = "hydrate")]
fn reload(state: RwSignal<ArticlesState>, toasts: RwSignal<ToastState>, guard: crate::util::mount::MountGuard) {
    let mut ticket = 0;
    let mut filter = StatusFilter::All;
    state.update(|s| {
        ticket = s.begin_load();
        filter = s.filter;
    });
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_articles(Some(filter), None).await;
        if !guard.is_alive() {
            return;
        }
        if let Err(e) = &result {
            log::warn!("articles fetch failed: {e}");
        }
        let failed = result.is_err();
        let mut applied = false;
        state.update(|s| applied = s.finish_load(ticket, result));
        if applied && failed {
            crate::util::toast::notify_error(toasts, LOAD_FAILED);
        }
    });
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let state = RwSignal::new(ArticlesState::default());
    #[cfg(feature = "hydrate")]
    let guard = crate::util::mount::MountGuard::install();
    #[cfg(feature = "hydrate")]
    {
        reload(state, toasts, guard.clone());
    }

    #[cfg(feature = "hydrate")]
    let filter_guard = guard.clone();
    let on_filter = Callback::new(move |filter: StatusFilter| {
        let mut changed = false;
        state.update(|s| changed = s.set_filter(filter));
        #[cfg(feature = "hydrate")]
        {
            if changed {
                reload(state, toasts, filter_guard.clone());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = changed;
        }
    });

    let on_view = Callback::new(move |id: i64| state.update(|s| s.select(id)));
    let on_close = Callback::new(move |()| state.update(ArticlesState::close_detail));

    #[cfg(feature = "hydrate")]
    let decide_guard = guard.clone();
    let on_decide = Callback::new(move |(id, action): (i64, ArticleAction)| {
        let mut started = false;
        state.update(|s| started = s.begin_action(id));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let guard = decide_guard.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::post_article_action(id, action).await;
                if let Err(e) = &result {
                    log::warn!("article {id} {} failed: {e}", action.path_segment());
                }
                let (kind, message) = decision_toast(action, result.is_ok());
                crate::util::toast::notify(toasts, kind, message);
                if !guard.is_alive() {
                    return;
                }
                state.update(|s| s.finish_action(id));
                if result.is_ok() {
                    reload(state, toasts, guard);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, toasts);
        }
    });

    view! {
        <div class="page">
            <NavBar />
            <main class="page__main">
                <a class="page__back" href="/">"← Назад к Dashboard"</a>
                <header class="page__header">
                    <h1>"Управление статьями"</h1>
                    <p class="page__subtitle">"Просмотр, одобрение и редактирование найденных статей"</p>
                </header>
                <div class="filter-bar">
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="filter-bar__button"
                                    class:filter-bar__button--active=move || state.get().filter == filter
                                    on:click=move |_| on_filter.run(filter)
                                >
                                    {move || filter_label(filter, state.get().count())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let current = state.get();
                    if current.list.is_loading() {
                        return view! {
                            <div class="skeleton-list">
                                {(0..3).map(|_| view! { <div class="skeleton skeleton--card"></div> }).collect_view()}
                            </div>
                        }
                            .into_any();
                    }
                    if current.list.shows_empty() {
                        return view! { <p class="panel__empty">"Статьи не найдены"</p> }.into_any();
                    }
                    current
                        .list
                        .items()
                        .iter()
                        .map(|article| {
                            let id = article.id;
                            view! {
                                <ArticleCard
                                    article=article.clone()
                                    busy=Signal::derive(move || state.get().is_action_pending(id))
                                    on_view=on_view
                                    on_decide=on_decide
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                {move || {
                    state.get().selected.map(|article| view! { <ArticleDetail article=article on_close=on_close /> })
                }}
            </main>
        </div>
    }
}
