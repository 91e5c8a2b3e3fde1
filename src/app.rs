//! Root application component: context provision, session restore, routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs the session service over browser storage, provides it
//! (plus the pending-navigation record and toast stack) through context,
//! kicks off the one-time session restore, and declares the route table.
//! Routes that require a login wrap their page in `RequireAuth`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::components::require_auth::RequireAuth;
use crate::components::toaster::Toaster;
use crate::pages::family::FamilyMembersPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::verify_otp::OtpVerificationPage;
use crate::session::service::SessionService;
use crate::session::storage::LocalSessionStorage;
use crate::state::toast::ToastState;
use crate::util::auth::PendingNav;

/// Root component mounted at the document body.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionService::new(Rc::new(LocalSessionStorage::new()));
    provide_context(session);
    provide_context(RwSignal::new(Option::<PendingNav>::None));
    provide_context(RwSignal::new(ToastState::default()));

    // Restore the persisted session exactly once, before any guard
    // decision can stick: guards stay in their pending state until this
    // flips `loading` off.
    Effect::new(move || session.restore());

    view! {
        <Title text="Curo24 - Complete Healthcare Solutions"/>
        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/verify-otp") view=OtpVerificationPage/>
                    <Route
                        path=path!("/profile")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=path!("/profile/family")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <FamilyMembersPage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
