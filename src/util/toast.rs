//! Toast push + auto-dismiss scheduling.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "csr")]
const TOAST_DISMISS_MS: u64 = 4000;

/// Push `toast` and, in the browser, schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, toast: Toast) {
    let id = toast.id.clone();
    toasts.update(|t| t.push(toast));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
