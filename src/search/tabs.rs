use std::fmt;

/// Search category tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTab {
    Buy,
    Rent,
    NewLaunch,
    Commercial,
    PlotsLand,
    Projects,
    PostProperty,
}

impl SearchTab {
    pub const ALL: [SearchTab; 7] = [
        SearchTab::Buy,
        SearchTab::Rent,
        SearchTab::NewLaunch,
        SearchTab::Commercial,
        SearchTab::PlotsLand,
        SearchTab::Projects,
        SearchTab::PostProperty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchTab::Buy => "Buy",
            SearchTab::Rent => "Rent",
            SearchTab::NewLaunch => "New Launch",
            SearchTab::Commercial => "Commercial",
            SearchTab::PlotsLand => "Plots/Land",
            SearchTab::Projects => "Projects",
            SearchTab::PostProperty => "Post Property",
        }
    }

    /// Parse a tab from its display label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.label() == label)
    }

    /// Value sent as `category` to the search endpoint
    pub fn category(self) -> String {
        self.label().to_lowercase()
    }

    pub fn profile(self) -> &'static TabProfile {
        match self {
            SearchTab::Buy => &BUY,
            SearchTab::Rent => &RENT,
            SearchTab::NewLaunch => &NEW_LAUNCH,
            SearchTab::Commercial => &COMMERCIAL,
            SearchTab::PlotsLand => &PLOTS_LAND,
            SearchTab::Projects => &PROJECTS,
            SearchTab::PostProperty => &POST_PROPERTY,
        }
    }

    pub fn is_post_property(self) -> bool {
        self == SearchTab::PostProperty
    }

    pub fn submit_label(self) -> &'static str {
        if self.is_post_property() {
            "Post Free Ad"
        } else {
            "Search"
        }
    }
}

impl fmt::Display for SearchTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the property-type dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> DropdownOption {
    DropdownOption { value, label }
}

/// Everything a tab contributes to the form.
///
/// The default dropdown value is the first option, so a tab can never
/// reset to a value it does not offer.
#[derive(Debug, PartialEq, Eq)]
pub struct TabProfile {
    pub placeholder: &'static str,
    pub options: &'static [DropdownOption],
}

impl TabProfile {
    pub fn default_value(&self) -> &'static str {
        self.options[0].value
    }

    pub fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    /// Profile for a tab label, falling back for labels we don't know
    pub fn for_label(label: &str) -> &'static TabProfile {
        SearchTab::from_label(label)
            .map(SearchTab::profile)
            .unwrap_or(&FALLBACK)
    }
}

const RESIDENTIAL_OPTIONS: &[DropdownOption] = &[
    opt("all-residential", "All Residential"),
    opt("apartments", "Apartments"),
    opt("villas", "Villas"),
    opt("plots", "Plots"),
];

static BUY: TabProfile = TabProfile {
    placeholder: "Search \"Hyderabad\"",
    options: RESIDENTIAL_OPTIONS,
};

static RENT: TabProfile = TabProfile {
    placeholder: "Search for rental properties \"Mumbai\"",
    options: RESIDENTIAL_OPTIONS,
};

static NEW_LAUNCH: TabProfile = TabProfile {
    placeholder: "Search new projects \"Bangalore\"",
    options: &[
        opt("all-projects", "All Projects"),
        opt("apartments", "Apartment Projects"),
        opt("villas", "Villa Projects"),
    ],
};

static COMMERCIAL: TabProfile = TabProfile {
    placeholder: "Search commercial spaces \"Delhi\"",
    options: &[
        opt("all-commercial", "All Commercial"),
        opt("office", "Office Space"),
        opt("retail", "Retail Space"),
        opt("warehouse", "Warehouse"),
    ],
};

static PLOTS_LAND: TabProfile = TabProfile {
    placeholder: "Search plots/land \"Chennai\"",
    options: &[
        opt("all-plots", "All Plots/Land"),
        opt("residential-plots", "Residential Plots"),
        opt("commercial-plots", "Commercial Plots"),
        opt("agricultural", "Agricultural Land"),
    ],
};

static PROJECTS: TabProfile = TabProfile {
    placeholder: "Search projects \"Pune\"",
    options: &[
        opt("all-projects", "All Projects"),
        opt("ongoing", "Ongoing Projects"),
        opt("completed", "Completed Projects"),
    ],
};

static POST_PROPERTY: TabProfile = TabProfile {
    placeholder: "Enter property details",
    options: &[
        opt("property-type", "Select Property Type"),
        opt("residential", "Residential"),
        opt("commercial", "Commercial"),
    ],
};

static FALLBACK: TabProfile = TabProfile {
    placeholder: "Search location",
    options: &[opt("all-residential", "All Residential")],
};

/// Shortcut locations shown under the form
pub const POPULAR_SEARCHES: [&str; 8] = [
    "Jaipur",
    "Bangalore",
    "Chennai",
    "Mumbai",
    "Hyderabad",
    "Pune",
    "Delhi NCR",
    "Ahmedabad",
];
