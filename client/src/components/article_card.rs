//! One article in the review list.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Article, ArticleAction};
use crate::util::format::{format_date, format_score};

/// Article card with view and (for pending articles) decision buttons.
///
/// `busy` disables the decision buttons while a request for this article
/// is in flight.
#[component]
pub fn ArticleCard(
    article: Article,
    #[prop(into)] busy: Signal<bool>,
    on_view: Callback<i64>,
    on_decide: Callback<(i64, ArticleAction)>,
) -> impl IntoView {
    let id = article.id;
    let pending = article.status.is_pending();

    view! {
        <article class="article-card">
            <div class="article-card__main">
                <h3 class="article-card__title">{article.title.clone()}</h3>
                <p class="article-card__content">{article.content.clone()}</p>
                <div class="article-card__meta">
                    <span>{format!("Балл: {}", format_score(article.ai_score))}</span>
                    <span>{format!("Релевантность: {}", format_score(article.relevance_score))}</span>
                    <span>{format_date(&article.found_date)}</span>
                    <StatusBadge status=article.status.clone() />
                </div>
                <div class="article-card__keywords">
                    {article
                        .keywords
                        .iter()
                        .map(|keyword| view! { <span class="chip">{keyword.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
            <div class="article-card__actions">
                <button class="btn btn--secondary" on:click=move |_| on_view.run(id)>
                    "Просмотр"
                </button>
                <Show when=move || pending>
                    <button
                        class="btn btn--success"
                        disabled=move || busy.get()
                        on:click=move |_| on_decide.run((id, ArticleAction::Approve))
                    >
                        "Одобрить"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_decide.run((id, ArticleAction::Reject))
                    >
                        "Отклонить"
                    </button>
                </Show>
            </div>
        </article>
    }
}
