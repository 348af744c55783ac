//! Top navigation bar shared by the authenticated screens.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

pub const LOGOUT_FAILED: &str = "Ошибка выхода. Попробуйте снова.";

/// Page to load after a logout attempt, or the notification to show when
/// the cookie could not be cleared.
#[must_use]
pub fn logout_redirect(result: &Result<(), String>) -> Result<&'static str, &'static str> {
    match result {
        Ok(()) => Ok("/login"),
        Err(_) => Err(LOGOUT_FAILED),
    }
}

/// Navigation links, the signed-in operator's name, and logout.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::logout().await;
                match logout_redirect(&result) {
                    Ok(to) => {
                        auth.update(|a| a.user = None);
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href(to);
                        }
                    }
                    Err(message) => {
                        if let Err(e) = result {
                            log::warn!("logout failed: {e}");
                        }
                        crate::util::toast::notify_error(toasts, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts);
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Content Dashboard"</a>
            <a class="nav-bar__link" href="/">"Dashboard"</a>
            <a class="nav-bar__link" href="/articles">"Статьи"</a>
            <a class="nav-bar__link" href="/settings">"Настройки"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{move || auth.get().display_name()}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Выход"
            </button>
        </nav>
    }
}
