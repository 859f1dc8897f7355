use super::search_interface::SearchInterface;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 py-12 px-4",
            h1 { class: "text-3xl font-bold text-center mb-8", "Find your dream property" }
            SearchInterface {}
        }
    }
}
