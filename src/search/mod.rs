pub mod form;
pub mod query;
pub mod store;
pub mod submit;
pub mod tabs;

pub use form::{FormError, SearchForm, Submission};
pub use query::{SearchParams, SearchParamsUpdate, SearchQuery};
pub use store::{ListingState, SearchStore};
pub use submit::Submitter;
pub use tabs::{DropdownOption, SearchTab, TabProfile, POPULAR_SEARCHES};
