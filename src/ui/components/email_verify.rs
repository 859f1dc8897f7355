use crate::ui::Route;
use crate::verify::{verify_email, VerificationState};
use crate::AppContext;
use dioxus::prelude::*;
use tracing::debug;

/// Email verification landing page for `/verify-email/:slug`
#[component]
pub fn EmailVerify(slug: ReadSignal<String>) -> Element {
    rsx! {
        VerificationPanel { token: Some(slug()) }
    }
}

/// `/verify-email` without a token
#[component]
pub fn EmailVerifyWithoutToken() -> Element {
    rsx! {
        VerificationPanel { token: None }
    }
}

#[component]
fn VerificationPanel(token: Option<String>) -> Element {
    let app_context = use_context::<AppContext>();

    // One request per mount; the resource stays pending while it runs
    let outcome = use_resource(move || {
        let backend = app_context.backend.clone();
        let token = token.clone();
        async move {
            debug!("Submitting email verification");
            verify_email(backend.as_ref(), token.as_deref()).await
        }
    });

    let state = outcome
        .value()
        .read()
        .clone()
        .unwrap_or(VerificationState::Verifying);

    rsx! {
        div { class: "min-h-screen bg-gray-50 flex flex-col items-center justify-center text-center p-4",
            div { class: "bg-white p-8 rounded-lg shadow-md max-w-md w-full",
                match state {
                    VerificationState::Verifying => rsx! {
                        div { class: "spinner mx-auto" }
                        h1 { class: "text-2xl font-bold mt-4", "Verifying your email..." }
                        p { class: "text-gray-500", "Please wait a moment." }
                    },
                    VerificationState::Failed(message) => rsx! {
                        div { class: "status-icon text-red-500", "✗" }
                        h1 { class: "text-2xl font-bold mt-4", "Verification Failed" }
                        p { class: "text-gray-500", "{message}" }
                        Link { to: Route::Login {},
                            button { class: "mt-6 bg-primary text-white px-6 py-2 rounded-lg", "Go to Login" }
                        }
                    },
                    VerificationState::Verified => rsx! {
                        div { class: "status-icon text-green-500", "✓" }
                        h1 { class: "text-2xl font-bold mt-4", "Your email verification is successful" }
                        p { class: "text-gray-500 mt-2",
                            "Welcome to Real Estate, for choosing your dream properties: house, villa, apartment."
                        }
                        Link { to: Route::Login {},
                            button { class: "mt-6 bg-primary text-white px-6 py-2 rounded-lg", "Proceed to Login" }
                        }
                    },
                }
            }
        }
    }
}
