use crate::search::{SearchForm, SearchTab, Submission, Submitter, POPULAR_SEARCHES};
use crate::ui::search_context::use_search;
use crate::ui::Route;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use tracing::{debug, warn};

/// Tabbed property search widget
#[component]
pub fn SearchInterface() -> Element {
    let search = use_search();
    let submitter = use_hook(|| Submitter::new(search.store.clone()));
    let loading = use_submitting(submitter.clone());
    let mut form = use_signal(SearchForm::default);
    let navigator = navigator();

    let current = form();
    let profile = current.profile();
    let is_loading = loading();

    rsx! {
        div { class: "w-full max-w-4xl mx-auto",
            div { class: "bg-white rounded-2xl p-4 sm:p-6 shadow-search",
                // Tabs
                div { class: "flex flex-wrap sm:gap-2 mb-2 sm:mb-6 border-b pb-4 justify-center",
                    for tab in SearchTab::ALL {
                        button {
                            key: "{tab}",
                            class: if current.tab() == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| {
                                debug!("Selected search tab {}", tab);
                                form.write().select_tab(tab);
                            },
                            "{tab}"
                            if tab == SearchTab::NewLaunch {
                                span { class: "tab-dot" }
                            }
                            if tab == SearchTab::PostProperty {
                                span { class: "tab-badge", "FREE" }
                            }
                        }
                    }
                }

                // Search fields
                div { class: "flex flex-col sm:flex-row gap-4 mb-4 sm:mb-6",
                    input {
                        class: "flex-1 p-3 border border-gray-200 rounded-lg",
                        placeholder: profile.placeholder,
                        value: "{current.query()}",
                        oninput: move |event: FormEvent| {
                            form.write().set_query(event.value());
                        },
                        onkeydown: {
                            let submitter = submitter.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == Key::Enter {
                                    let submission = form.read().submission();
                                    launch(&submitter, navigator, submission);
                                }
                            }
                        },
                    }
                    select {
                        class: "w-full sm:w-48 p-3 border border-gray-200 rounded-lg",
                        value: current.dropdown(),
                        onchange: move |event: FormEvent| {
                            if let Err(e) = form.write().set_dropdown(&event.value()) {
                                warn!("Ignoring dropdown change: {}", e);
                            }
                        },
                        for choice in profile.options.iter() {
                            option {
                                key: "{choice.value}",
                                value: choice.value,
                                selected: choice.value == current.dropdown(),
                                "{choice.label}"
                            }
                        }
                    }
                    button {
                        class: "bg-primary text-white px-6 sm:px-8 py-3 rounded-lg disabled:bg-gray-400",
                        disabled: is_loading,
                        onclick: {
                            let submitter = submitter.clone();
                            move |_| {
                                let submission = form.read().submission();
                                launch(&submitter, navigator, submission);
                            }
                        },
                        if is_loading {
                            "Searching..."
                        } else {
                            "{current.tab().submit_label()}"
                        }
                    }
                }

                // Popular searches
                div {
                    h3 { class: "text-xs sm:text-sm font-medium text-gray-600 mb-2 sm:mb-3",
                        "Popular Search"
                    }
                    div { class: "flex flex-wrap gap-2 justify-center",
                        for location in POPULAR_SEARCHES {
                            button {
                                key: "{location}",
                                class: "border border-gray-200 rounded-full text-xs sm:text-sm px-3 py-1.5",
                                onclick: {
                                    let submitter = submitter.clone();
                                    move |_| {
                                        let submission = form.write().popular_search(location);
                                        launch(&submitter, navigator, submission);
                                    }
                                },
                                "{location}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Run a submission in the background and follow its navigation
fn launch(submitter: &Submitter, navigator: Navigator, submission: Submission) {
    let submitter = submitter.clone();
    spawn(async move {
        if let Some(navigation) = submitter.submit(submission).await {
            navigator.push(Route::from(navigation));
        }
    });
}

/// Mirror the submitter's loading flag into a signal
fn use_submitting(submitter: Submitter) -> Signal<bool> {
    let mut loading = use_signal(|| submitter.is_loading());

    use_effect(move || {
        let mut loading_rx = submitter.subscribe_loading();
        spawn(async move {
            loop {
                loading.set(*loading_rx.borrow_and_update());
                if loading_rx.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    loading
}
