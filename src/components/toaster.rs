//! Renders the transient notification stack.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

/// Toast stack overlay. Each toast can be dismissed by hand; `util::toast`
/// schedules automatic dismissal when running in the browser.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class>
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
