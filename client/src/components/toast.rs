//! Toast notification stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Renders the queued notifications with manual dismissal.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts" role="status">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
