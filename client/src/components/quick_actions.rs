//! Dashboard job triggers and the settings shortcut.

#[cfg(test)]
#[path = "quick_actions_test.rs"]
mod quick_actions_test;

use leptos::prelude::*;

use crate::net::types::{ActionMessage, Job};
use crate::state::toast::{ToastKind, ToastState};

pub const FALLBACK_MESSAGE: &str = "Действие выполнено";
pub const FAILURE_MESSAGE: &str = "Ошибка выполнения действия";

/// Toast to show once a trigger settles.
#[must_use]
pub fn trigger_outcome(result: Result<ActionMessage, String>) -> (ToastKind, String) {
    match result {
        Ok(ActionMessage { success: Some(false), message }) => {
            (ToastKind::Error, message.unwrap_or_else(|| FAILURE_MESSAGE.to_owned()))
        }
        Ok(ActionMessage { message, .. }) => {
            (ToastKind::Success, message.filter(|m| !m.is_empty()).unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()))
        }
        Err(_) => (ToastKind::Error, FAILURE_MESSAGE.to_owned()),
    }
}

#[component]
fn TriggerCard(job: Job, title: &'static str, description: &'static str, tone: &'static str) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let running = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let guard = crate::util::mount::MountGuard::install();

    let on_click = move |_| {
        if running.get_untracked() {
            return;
        }
        running.set(true);
        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::trigger_job(job).await;
                if let Err(e) = &result {
                    log::warn!("{} trigger failed: {e}", job.path_segment());
                }
                let (kind, message) = trigger_outcome(result);
                crate::util::toast::notify(toasts, kind, message);
                guard.deliver((), |()| running.set(false));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (job, toasts);
        }
    };

    view! {
        <button
            class=format!("quick-action quick-action--{tone}")
            class:quick-action--running=move || running.get()
            disabled=move || running.get()
            on:click=on_click
        >
            <span class="quick-action__title">
                {title}
                <Show when=move || running.get()>
                    <span class="spinner" aria-hidden="true"></span>
                </Show>
            </span>
            <span class="quick-action__description">{description}</span>
        </button>
    }
}

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <section class="quick-actions">
            <TriggerCard job=Job::Search title="Найти статьи" description="Запустить поиск новых статей" tone="blue" />
            <TriggerCard
                job=Job::Publish
                title="Опубликовать"
                description="Опубликовать одобренные статьи"
                tone="green"
            />
            <a class="quick-action quick-action--purple" href="/settings">
                <span class="quick-action__title">"Настройки"</span>
                <span class="quick-action__description">"Изменить параметры системы"</span>
            </a>
        </section>
    }
}
