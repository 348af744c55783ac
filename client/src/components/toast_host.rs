//! Top-right notification stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the shared toast queue; clicking a toast dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <div
                    class=toast.kind.css_class()
                    role="status"
                    on:click=move |_| toasts.update(|state| state.dismiss(toast.id))
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
