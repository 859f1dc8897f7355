use crate::search::query::encode_pairs;
use std::fmt;

/// Where the app should go after a user action completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    PostProperty(PostPropertyQuery),
    SearchResults,
    Login,
}

/// Prefill carried to the post-property form as `?title=..&type=..`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPropertyQuery {
    pub title: Option<String>,
    pub kind: Option<String>,
}

impl PostPropertyQuery {
    pub fn new(title: &str, kind: &str) -> Self {
        let non_empty = |s: &str| Some(s).filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            title: non_empty(title),
            kind: non_empty(kind),
        }
    }

    /// Parse a raw query string; unknown keys are ignored
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match key {
                "title" => parsed.title = Some(value).filter(|v| !v.is_empty()),
                "type" => parsed.kind = Some(value).filter(|v| !v.is_empty()),
                _ => {}
            }
        }
        parsed
    }
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(value)
}

impl fmt::Display for PostPropertyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::new();
        if let Some(title) = &self.title {
            pairs.push(("title", title.as_str()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.as_str()));
        }
        f.write_str(&encode_pairs(&pairs))
    }
}
