//! Profile page showing the signed-in user's merged record.
//!
//! Rendered behind `RequireAuth`, so a user record is present whenever this
//! page is visible; the empty-string fallbacks only cover the instant of a
//! logout-triggered teardown.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::session::service::SessionService;

/// Profile page — demographic fields, ABHA status, and a family summary.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth_state = session.auth();

    let field = move |pick: fn(&crate::session::profile::UserProfile) -> String| {
        move || {
            auth_state
                .get()
                .user
                .as_ref()
                .map_or_else(String::new, pick)
        }
    };

    let family_count = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map_or(0, |u| u.family_members.len())
    };

    view! {
        <Title text="My Profile - Curo24"/>
        <div class="profile-page">
            <h1>"My Profile"</h1>
            <div class="profile-card">
                <div class="profile-card__row">
                    <span class="profile-card__label">"Name"</span>
                    <span class="profile-card__value">{field(|u| u.name.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Mobile"</span>
                    <span class="profile-card__value">{field(|u| u.mobile.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Email"</span>
                    <span class="profile-card__value">{field(|u| u.email.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Blood Group"</span>
                    <span class="profile-card__value">{field(|u| u.blood_group.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Address"</span>
                    <span class="profile-card__value">{field(|u| u.address.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"ABHA ID"</span>
                    <span class="profile-card__value">{field(|u| u.abha_id.clone())}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"ABHA Status"</span>
                    <span class="profile-card__value">
                        {field(|u| u.abha_status.label().to_owned())}
                    </span>
                </div>
            </div>
            <a class="btn profile-page__family-link" href="/profile/family">
                {move || format!("Family Members ({})", family_count())}
            </a>
        </div>
    }
}
