//! Login page: mobile-number entry for the OTP challenge.
//!
//! The number's shape is validated here before anything else happens: a
//! malformed number never reaches the session service and never navigates.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::toast::{Toast, ToastState};
use crate::util::toast::notify;

/// Validate a mobile-number form value: exactly 10 ASCII digits after
/// trimming.
pub(crate) fn validate_mobile_input(raw: &str) -> Result<String, &'static str> {
    let mobile = raw.trim();
    if mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit()) {
        Ok(mobile.to_owned())
    } else {
        Err("Please enter a valid 10-digit mobile number.")
    }
}

/// Destination of the verification step for `mobile`.
pub(crate) fn otp_verification_href(mobile: &str) -> String {
    format!("/verify-otp?mobile={mobile}")
}

/// Login page — collects a mobile number and hands off to OTP verification.
#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let mobile = RwSignal::new(String::new());

    let on_send_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_mobile_input(&mobile.get_untracked()) {
            Ok(value) => {
                notify(
                    toasts,
                    Toast::new("OTP Sent!", &format!("An OTP has been sent to {value}.")),
                );
                navigate(&otp_verification_href(&value), NavigateOptions::default());
            }
            Err(message) => {
                notify(toasts, Toast::destructive("Invalid Mobile Number", message));
            }
        }
    };

    view! {
        <Title text="Login - Curo24"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome to Curo24"</h1>
                <p class="login-card__subtitle">"Your health, simplified."</p>
                <form class="login-form" on:submit=on_send_otp>
                    <input
                        class="login-input"
                        type="tel"
                        maxlength="10"
                        placeholder="Mobile Number"
                        prop:value=move || mobile.get()
                        on:input=move |ev| mobile.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Send OTP"
                    </button>
                </form>
                <p class="login-card__note">"Your information is safe and secure with us."</p>
            </div>
        </div>
    }
}
