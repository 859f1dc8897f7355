pub mod app;
pub mod email_verify;
pub mod home;
pub mod login;
pub mod navbar;
pub mod post_property;
pub mod property_card;
pub mod search_interface;
pub mod search_results;

pub use app::App;
pub use email_verify::{EmailVerify, EmailVerifyWithoutToken};
pub use home::Home;
pub use login::Login;
pub use navbar::Navbar;
pub use post_property::PostProperty;
pub use property_card::PropertyCard;
pub use search_interface::SearchInterface;
pub use search_results::SearchResults;
