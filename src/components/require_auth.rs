//! Wrapper gating a route's content behind the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their page in `RequireAuth`. While the session is
//! still restoring it renders a neutral placeholder and never redirects, so
//! an already-authenticated user is not bounced to the login page during
//! the startup window. Once settled, unauthenticated visitors are sent to
//! the login flow with the requested path recorded for the return trip.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::service::SessionService;
use crate::util::auth::{self, RouteDecision};

/// Render `children` only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionService>();
    let pending = expect_context::<RwSignal<Option<auth::PendingNav>>>();
    let location = use_location();
    let navigate = use_navigate();

    let auth_state = session.auth();
    let pathname = location.pathname;

    Effect::new(move || {
        let state = auth_state.get();
        if let RouteDecision::Denied(nav) = auth::evaluate(&state, &pathname.get()) {
            pending.set(Some(nav));
            navigate(auth::LOGIN_PATH, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || {
                matches!(
                    auth::evaluate(&auth_state.get(), &pathname.get()),
                    RouteDecision::Allowed
                )
            }
            fallback=move || {
                view! {
                    <p class="route-placeholder">
                        {move || {
                            if auth_state.get().loading { "Loading..." } else { "Redirecting to login..." }
                        }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
