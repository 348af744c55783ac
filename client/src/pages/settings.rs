//! Settings screen: pipeline schedule and content thresholds.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::settings::{SCHEDULE_ROWS, SettingsField, SettingsState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;

pub const LOAD_FAILED: &str = "Ошибка загрузки настроек";

#[must_use]
pub fn save_toast(ok: bool) -> (ToastKind, &'static str) {
    if ok { (ToastKind::Success, "Настройки сохранены") } else { (ToastKind::Error, "Ошибка сохранения настроек") }
}

#[cfg(feature = "hydrate")]
fn load(state: RwSignal<SettingsState>, toasts: RwSignal<ToastState>, guard: crate::util::mount::MountGuard) {
    state.update(SettingsState::begin_load);
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_settings().await;
        if !guard.is_alive() {
            return;
        }
        if let Err(e) = &result {
            log::warn!("settings fetch failed: {e}");
            crate::util::toast::notify_error(toasts, LOAD_FAILED);
        }
        state.update(|s| s.finish_load(result));
    });
}

#[component]
fn NumberInput(state: RwSignal<SettingsState>, field: SettingsField) -> impl IntoView {
    let bounds = field.bounds();
    view! {
        <input
            class="settings-input"
            type="number"
            min=bounds.min
            max=bounds.max
            step=bounds.step
            prop:value=move || field.read(&state.get().form)
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                state.update(|s| {
                    s.edit(field, &raw);
                });
            }
        />
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let state = RwSignal::new(SettingsState::default());
    #[cfg(feature = "hydrate")]
    let guard = crate::util::mount::MountGuard::install();
    #[cfg(feature = "hydrate")]
    {
        load(state, toasts, guard.clone());
    }

    #[cfg(feature = "hydrate")]
    let reset_guard = guard.clone();
    let on_reset = move |_| {
        if state.get_untracked().saving {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            load(state, toasts, reset_guard.clone());
        }
    };

    let on_save = move |_| {
        let mut payload = None;
        state.update(|s| payload = s.begin_save());
        let Some(payload) = payload else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_settings(&payload).await;
                if let Err(e) = &result {
                    log::warn!("settings save failed: {e}");
                }
                let (kind, message) = save_toast(result.is_ok());
                crate::util::toast::notify(toasts, kind, message);
                guard.deliver((), |()| state.update(SettingsState::finish_save));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, toasts);
        }
    };

    let saving = move || state.get().saving;

    view! {
        <div class="page">
            <NavBar />
            <main class="page__main">
                <a class="page__back" href="/">"← Назад к Dashboard"</a>
                <header class="page__header">
                    <h1>"Настройки системы"</h1>
                    <p class="page__subtitle">"Настройка расписания и параметров работы системы"</p>
                </header>
                <Show
                    when=move || !state.get().record.is_loading()
                    fallback=|| view! { <div class="skeleton skeleton--panel"></div> }
                >
                    <section class="panel settings-section">
                        <h2>"Расписание задач"</h2>
                        {SCHEDULE_ROWS
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="schedule-row">
                                        <span class="schedule-row__label">{row.label}</span>
                                        <NumberInput state=state field=row.hour />
                                        <span class="schedule-row__sep">":"</span>
                                        <NumberInput state=state field=row.minute />
                                        <span class="schedule-row__preview">
                                            {move || row.preview(&state.get().form)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>
                    <section class="panel settings-section">
                        <h2>"Параметры контента"</h2>
                        <label class="settings-field">
                            <span class="settings-field__label">"Максимум статей в день"</span>
                            <NumberInput state=state field=SettingsField::MaxArticlesPerDay />
                            <span class="settings-field__hint">"Максимальное количество статей для публикации в день"</span>
                        </label>
                        <label class="settings-field">
                            <span class="settings-field__label">"Минимальный балл статьи"</span>
                            <NumberInput state=state field=SettingsField::MinArticleScore />
                            <span class="settings-field__hint">"Минимальный балл AI для одобрения статьи (0-10)"</span>
                        </label>
                    </section>
                </Show>
                <div class="settings-actions">
                    <button class="btn btn--secondary" disabled=saving on:click=on_reset>
                        "Сбросить"
                    </button>
                    <button class="btn btn--primary" disabled=saving on:click=on_save>
                        {move || if saving() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </main>
        </div>
    }
}
