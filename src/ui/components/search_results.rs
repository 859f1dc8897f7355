use super::property_card::PropertyCard;
use crate::ui::search_context::use_search;
use crate::ui::Route;
use dioxus::prelude::*;

/// Results page; shows whatever the search context currently holds
#[component]
pub fn SearchResults() -> Element {
    let search = use_search();
    let listing = search.listing.read().clone();

    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-3xl font-bold", "Search Results" }
                button {
                    class: "px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-100",
                    onclick: move |_| search.fetch_properties(),
                    "Refresh"
                }
            }

            if listing.loading {
                div { class: "text-center py-8",
                    p { class: "text-gray-600", "Loading properties..." }
                }
            } else if let Some(error) = listing.error.as_ref() {
                div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
                    "{error}"
                }
            }

            if listing.search_results.is_empty() && !listing.loading {
                div { class: "text-center py-12",
                    p { class: "text-gray-600 mb-4", "No properties found." }
                    Link { to: Route::Home {}, class: "text-purple-600 underline", "Start a new search" }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for property in listing.search_results.iter() {
                    PropertyCard { key: "{property.id}", property: property.clone() }
                }
            }
        }
    }
}
