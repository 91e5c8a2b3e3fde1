//! OTP verification page: the second half of the login challenge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the login page with the mobile number in the query string.
//! The challenge is simulated: any well-formed 6-digit code verifies, as no
//! delivery backend exists. On success the session service creates the
//! session and navigation resumes at the recorded pending path.

#[cfg(test)]
#[path = "verify_otp_test.rs"]
mod verify_otp_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::profile::LoginFields;
use crate::session::service::SessionService;
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::{LOGIN_PATH, PendingNav, resume_path};
use crate::util::toast::notify;

/// Validate an OTP form value: exactly 6 ASCII digits after trimming.
pub(crate) fn validate_otp_input(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code.to_owned())
    } else {
        Err("Please enter the 6-digit OTP.")
    }
}

/// OTP entry page — verifies the code and finishes the login round trip.
#[component]
pub fn OtpVerificationPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let pending = expect_context::<RwSignal<Option<PendingNav>>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let otp = RwSignal::new(String::new());

    let mobile = move || query.with(|q| q.get("mobile"));

    // Arriving without a mobile number bounces back to the login entry.
    let navigate_back = navigate.clone();
    Effect::new(move || {
        if mobile().is_none() {
            navigate_back(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(mobile_value) = query.with_untracked(|q| q.get("mobile")) else {
            return;
        };
        match validate_otp_input(&otp.get_untracked()) {
            Ok(_code) => {
                let fields = LoginFields { mobile: mobile_value };
                match session.login(&fields) {
                    Ok(()) => {
                        notify(toasts, Toast::new("Login Successful!", "Welcome back to Curo24."));
                        let target = resume_path(pending.get_untracked());
                        pending.set(None);
                        navigate(
                            &target,
                            NavigateOptions {
                                replace: true,
                                ..NavigateOptions::default()
                            },
                        );
                    }
                    Err(err) => {
                        notify(toasts, Toast::destructive("Login Failed", &err.to_string()));
                    }
                }
            }
            Err(message) => notify(toasts, Toast::destructive("Invalid OTP", message)),
        }
    };

    let on_resend = move |_| {
        notify(toasts, Toast::new("OTP Resent!", "A new OTP is on its way."));
    };

    view! {
        <Title text="Verify OTP - Curo24"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Enter Verification Code"</h1>
                <p class="login-card__subtitle">
                    "We've sent a 6-digit code to +91 "
                    {move || mobile().unwrap_or_default()}
                    "."
                </p>
                <form class="login-form" on:submit=on_verify>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="000000"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Verify & Proceed"
                    </button>
                </form>
                <p class="login-card__note">
                    "Didn't receive the code? "
                    <button class="btn btn--link" on:click=on_resend>
                        "Resend"
                    </button>
                </p>
            </div>
        </div>
    }
}
