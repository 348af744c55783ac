//! Login page for the single operator account.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::LoginFailure;

/// Message shown under the form for a failed submission.
#[must_use]
pub fn login_error_message(failure: &LoginFailure) -> &'static str {
    match failure {
        LoginFailure::InvalidCredentials => "Неверный логин или пароль",
        LoginFailure::Unavailable(_) => "Произошла ошибка. Попробуйте снова.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let username_value = username.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(_) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(failure) => {
                        if let LoginFailure::Unavailable(detail) = &failure {
                            log::warn!("login request failed: {detail}");
                        }
                        error.set(Some(login_error_message(&failure)));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Content Dashboard"</h1>
                <p class="login-card__subtitle">"Вход в панель управления"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">"Логин"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Пароль"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
                <div class="login-hint">
                    <p><strong>"По умолчанию:"</strong></p>
                    <p>"Логин: " <code>"admin"</code></p>
                    <p>"Пароль: " <code>"admin123"</code></p>
                </div>
            </div>
        </div>
    }
}
