use dioxus::prelude::*;

/// Login landing page; authentication itself lives on the backend
#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "container mx-auto p-6 max-w-md",
            h1 { class: "text-3xl font-bold mb-6", "Login" }
            p { class: "text-gray-600", "Sign in with your registered email address." }
        }
    }
}
