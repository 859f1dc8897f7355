use crate::navigation::PostPropertyQuery;
use crate::search::SearchTab;
use dioxus::prelude::*;

/// Entry to the listing submission flow, prefilled from the search widget
#[component]
pub fn PostProperty(query: PostPropertyQuery) -> Element {
    let mut title = use_signal(|| query.title.clone().unwrap_or_default());
    let options = SearchTab::PostProperty.profile().options;
    let selected = query
        .kind
        .clone()
        .unwrap_or_else(|| SearchTab::PostProperty.profile().default_value().to_string());

    rsx! {
        div { class: "container mx-auto p-6 max-w-2xl",
            h1 { class: "text-3xl font-bold mb-6", "Post Your Property" }
            div { class: "bg-white rounded-lg shadow-md p-6 space-y-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Title" }
                    input {
                        class: "w-full p-3 border border-gray-300 rounded-lg",
                        placeholder: "Enter property details",
                        value: "{title}",
                        oninput: move |event: FormEvent| title.set(event.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Property Type" }
                    select { class: "w-full p-3 border border-gray-300 rounded-lg",
                        for choice in options.iter() {
                            option {
                                key: "{choice.value}",
                                value: choice.value,
                                selected: choice.value == selected,
                                "{choice.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
