/*
 * Filtering of dropdown options by the user's transient search text.
 * Plain text matches case-insensitively anywhere in the label. Text that
 * contains `*` or `?` is treated as a wildcard pattern matched against the
 * whole label, still case-insensitively.
 */
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
pub enum SearchFilter {
    All,
    Substring(String),
    Wildcard(Pattern),
}

impl SearchFilter {
    pub fn new(search_text: &str) -> Self {
        let trimmed = search_text.trim();
        if trimmed.is_empty() {
            return SearchFilter::All;
        }
        if trimmed.contains(['*', '?']) {
            match Pattern::new(trimmed) {
                Ok(pattern) => return SearchFilter::Wildcard(pattern),
                Err(e) => {
                    log::debug!(
                        "SearchFilter: '{trimmed}' is not a valid pattern ({e}); matching literally."
                    );
                }
            }
        }
        SearchFilter::Substring(trimmed.to_lowercase())
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            SearchFilter::All => true,
            SearchFilter::Substring(needle) => label.to_lowercase().contains(needle.as_str()),
            SearchFilter::Wildcard(pattern) => pattern.matches_with(label, MATCH_OPTIONS),
        }
    }
}

// Indexes of the labels that pass the filter, in their original order.
pub fn filter_indexes<'a, I>(labels: I, search_text: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let filter = SearchFilter::new(search_text);
    labels
        .into_iter()
        .enumerate()
        .filter(|(_, label)| filter.matches(label))
        .map(|(index, _)| index)
        .collect()
}
