use super::query::SearchQuery;
use super::tabs::{SearchTab, TabProfile};
use crate::navigation::{Navigation, PostPropertyQuery};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("'{value}' is not an option on the {tab} tab")]
    UnknownOption { tab: SearchTab, value: String },
}

/// What pressing the submit button (or Enter) should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Go straight to the post-property flow, no request
    Navigate(Navigation),
    /// Query the search endpoint, then show results
    Search(SearchQuery),
}

/// Input state of the search widget.
///
/// The dropdown value is always one of the active tab's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    tab: SearchTab,
    query: String,
    dropdown: &'static str,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(SearchTab::Buy)
    }
}

impl SearchForm {
    pub fn new(tab: SearchTab) -> Self {
        Self {
            tab,
            query: String::new(),
            dropdown: tab.profile().default_value(),
        }
    }

    pub fn tab(&self) -> SearchTab {
        self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dropdown(&self) -> &'static str {
        self.dropdown
    }

    pub fn profile(&self) -> &'static TabProfile {
        self.tab.profile()
    }

    pub fn placeholder(&self) -> &'static str {
        self.profile().placeholder
    }

    /// Switch tabs; any manual dropdown choice is discarded
    pub fn select_tab(&mut self, tab: SearchTab) {
        self.tab = tab;
        self.dropdown = tab.profile().default_value();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_dropdown(&mut self, value: &str) -> Result<(), FormError> {
        let option = self
            .profile()
            .options
            .iter()
            .find(|option| option.value == value)
            .ok_or_else(|| FormError::UnknownOption {
                tab: self.tab,
                value: value.to_string(),
            })?;
        self.dropdown = option.value;
        Ok(())
    }

    pub fn submission(&self) -> Submission {
        if self.tab.is_post_property() {
            Submission::Navigate(Navigation::PostProperty(PostPropertyQuery::new(
                &self.query,
                self.dropdown,
            )))
        } else {
            Submission::Search(SearchQuery::from_form(self.tab, &self.query, self.dropdown))
        }
    }

    /// Fill the text field with a popular location and search for it.
    ///
    /// Always a search, even on the Post Property tab.
    pub fn popular_search(&mut self, location: &str) -> Submission {
        self.query = location.to_string();
        let mut query = SearchQuery::from_form(self.tab, location, self.dropdown);
        query.location = Some(location.to_string());
        Submission::Search(query)
    }
}
