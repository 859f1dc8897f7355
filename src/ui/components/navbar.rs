use crate::navigation::PostPropertyQuery;
use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the site header above the routed page
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "bg-white border-b px-6 py-4 flex items-center justify-between",
            Link { to: Route::Home {}, class: "text-xl font-bold text-purple-600", "Real Estate" }
            nav { class: "flex space-x-6 text-sm",
                Link { to: Route::SearchResults {}, class: "hover:text-purple-600", "Results" }
                Link {
                    to: Route::PostProperty {
                        query: PostPropertyQuery::default(),
                    },
                    class: "hover:text-purple-600",
                    "Post Property"
                }
                Link { to: Route::Login {}, class: "hover:text-purple-600", "Login" }
            }
        }
        Outlet::<Route> {}
    }
}
