//! Notification dispatch from pages and components.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Push a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DISMISS_MS).await;
            toasts.try_update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}
