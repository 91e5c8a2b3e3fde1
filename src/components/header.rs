//! Site header with auth-aware navigation.

use leptos::prelude::*;

use crate::session::service::SessionService;
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::PendingNav;
use crate::util::toast::notify;

/// Header bar: brand link home, then a login link or the signed-in user's
/// name plus a logout link.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let pending = expect_context::<RwSignal<Option<PendingNav>>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let auth_state = session.auth();
    let display_name = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };

    // A deliberate trip to the login page drops any stale pending
    // destination from an abandoned earlier redirect.
    let on_login = move |_| pending.set(None);

    let on_logout = move |_| {
        session.logout();
        notify(toasts, Toast::new("Logged Out", "You have been logged out."));
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Curo24"
            </a>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth_state.get().is_authenticated()
                fallback=move || {
                    view! {
                        <a class="btn site-header__login" href="/login" on:click=on_login>
                            "Login"
                        </a>
                    }
                }
            >
                <a class="site-header__self" href="/profile">
                    {display_name}
                </a>
                <a class="btn site-header__logout" href="/" on:click=on_logout title="Logout">
                    "Logout"
                </a>
            </Show>
        </header>
    }
}
