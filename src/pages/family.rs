//! Family members page listing the profile's dependent sub-records.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::session::service::SessionService;

/// Family members page — relation, age, and ABHA status per member.
#[component]
pub fn FamilyMembersPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth_state = session.auth();

    let members = move || {
        auth_state
            .get()
            .user
            .map(|u| u.family_members)
            .unwrap_or_default()
    };

    view! {
        <Title text="Family Members - Curo24"/>
        <div class="family-page">
            <h1>"Family Members"</h1>
            <div class="family-page__cards">
                {move || {
                    members()
                        .into_iter()
                        .map(|member| {
                            view! {
                                <div class="family-card">
                                    <p class="family-card__name">{member.name}</p>
                                    <p class="family-card__relation">
                                        {member.relation}
                                        ", "
                                        {member.age}
                                    </p>
                                    <p class="family-card__abha">
                                        "ABHA: "
                                        {member.abha_status.label()}
                                    </p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <a class="btn family-page__back" href="/profile">
                "Back to Profile"
            </a>
        </div>
    }
}
