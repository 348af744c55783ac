//! Read-only overlay with the full text of one article.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::format::{format_date_time, format_score};

#[component]
pub fn ArticleDetail(article: Article, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="overlay" on:click=move |_| on_close.run(())>
            <div class="overlay__dialog" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <header class="overlay__header">
                    <h2>{article.title.clone()}</h2>
                    <button class="overlay__close" aria-label="Закрыть" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <div class="overlay__body">
                    <p class="article-detail__content">{article.content.clone()}</p>
                    <dl class="article-detail__facts">
                        <dt>"Источник:"</dt>
                        <dd>{article.source.clone()}</dd>
                        <dt>"Балл AI:"</dt>
                        <dd>{format_score(article.ai_score)}</dd>
                        <dt>"Релевантность:"</dt>
                        <dd>{format_score(article.relevance_score)}</dd>
                        <dt>"Дата:"</dt>
                        <dd>{format_date_time(&article.found_date)}</dd>
                    </dl>
                    <a class="article-detail__link" href=article.url.clone() target="_blank" rel="noopener noreferrer">
                        "Открыть источник"
                    </a>
                </div>
            </div>
        </div>
    }
}
