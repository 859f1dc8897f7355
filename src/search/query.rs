use super::tabs::SearchTab;

/// Dropdown defaults that mean "no filter"; never sent as `property_type`
pub const ALL_SENTINELS: [&str; 4] = [
    "all-residential",
    "all-projects",
    "all-commercial",
    "all-plots",
];

pub fn is_all_sentinel(value: &str) -> bool {
    ALL_SENTINELS.contains(&value)
}

/// Query for `GET /api/properties/search/`, built by the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub category: String,
    pub location: Option<String>,
    pub property_type: Option<String>,
}

impl SearchQuery {
    /// Build the query from form values. Empty text and "all" dropdown
    /// values are left out rather than sent empty.
    pub fn from_form(tab: SearchTab, location: &str, dropdown: &str) -> Self {
        Self {
            category: tab.category(),
            location: Some(location)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            property_type: Some(dropdown)
                .filter(|d| !d.is_empty() && !is_all_sentinel(d))
                .map(str::to_string),
        }
    }

    /// Key/value pairs in wire order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("category", self.category.as_str())];
        if let Some(location) = &self.location {
            pairs.push(("location", location.as_str()));
        }
        if let Some(property_type) = &self.property_type {
            pairs.push(("property_type", property_type.as_str()));
        }
        pairs
    }

    /// Percent-encoded form used in logs and tests. Spaces become `%20`
    /// here, while the HTTP client sends them as `+`.
    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.pairs())
    }
}

/// Canonical search parameters held by the search store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub location: String,
    pub property_type: String,
}

/// Partial update for [`SearchParams`]; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParamsUpdate {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub property_type: Option<String>,
}

impl SearchParamsUpdate {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }
}

impl SearchParams {
    pub fn merge(&mut self, update: SearchParamsUpdate) {
        if let Some(keyword) = update.keyword {
            self.keyword = keyword;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(property_type) = update.property_type {
            self.property_type = property_type;
        }
    }

    /// Pairs for `GET /api/properties/`. All keys are sent, empty or not.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("keyword", self.keyword.as_str()),
            ("location", self.location.as_str()),
            ("propertyType", self.property_type.as_str()),
        ]
    }
}

pub(crate) fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_villas_mumbai() {
        let query = SearchQuery::from_form(SearchTab::Rent, "Mumbai", "villas");
        assert_eq!(
            query.to_query_string(),
            "category=rent&location=Mumbai&property_type=villas"
        );
    }

    #[test]
    fn test_buy_defaults_send_category_only() {
        let query = SearchQuery::from_form(SearchTab::Buy, "", "all-residential");
        assert_eq!(query.location, None);
        assert_eq!(query.property_type, None);
        assert_eq!(query.to_query_string(), "category=buy");
    }

    #[test]
    fn test_every_sentinel_is_omitted() {
        for sentinel in ALL_SENTINELS {
            let query = SearchQuery::from_form(SearchTab::Projects, "Pune", sentinel);
            assert_eq!(query.property_type, None, "{sentinel} leaked into query");
        }
    }

    #[test]
    fn test_non_sentinel_default_is_sent() {
        // Post Property's default is not an "all" value
        let query = SearchQuery::from_form(SearchTab::Commercial, "", "property-type");
        assert_eq!(query.property_type.as_deref(), Some("property-type"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = SearchQuery::from_form(SearchTab::PlotsLand, "Delhi NCR", "agricultural");
        assert_eq!(
            query.to_query_string(),
            "category=plots%2Fland&location=Delhi%20NCR&property_type=agricultural"
        );
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let mut params = SearchParams {
            keyword: "sea view".to_string(),
            location: "Goa".to_string(),
            property_type: "villas".to_string(),
        };
        params.merge(SearchParamsUpdate::default().location("X"));

        assert_eq!(params.location, "X");
        assert_eq!(params.keyword, "sea view");
        assert_eq!(params.property_type, "villas");
    }

    #[test]
    fn test_listing_pairs_keep_empty_values() {
        let params = SearchParams::default();
        assert_eq!(
            params.pairs(),
            [("keyword", ""), ("location", ""), ("propertyType", "")]
        );
    }
}
