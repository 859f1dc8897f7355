use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use dioxus::router::FromQuery;

use crate::navigation::{Navigation, PostPropertyQuery};
use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/search")]
    SearchResults {},
    #[route("/post-property?:..query")]
    PostProperty { query: PostPropertyQuery },
    #[route("/login")]
    Login {},
    #[route("/verify-email/:slug")]
    EmailVerify { slug: String },
    #[route("/verify-email")]
    EmailVerifyWithoutToken {},
}

impl From<Navigation> for Route {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::PostProperty(query) => Route::PostProperty { query },
            Navigation::SearchResults => Route::SearchResults {},
            Navigation::Login => Route::Login {},
        }
    }
}

impl FromQuery for PostPropertyQuery {
    fn from_query(query: &str) -> Self {
        PostPropertyQuery::parse(query)
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("realty")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
