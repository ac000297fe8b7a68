use serde::{Deserialize, Serialize};

/// Where a result set is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    SearchResults,
    Popular,
    TopRated,
    Upcoming,
    Favorites,
    Recommendations,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::SearchResults => "search_results",
            Container::Popular => "popular",
            Container::TopRated => "top_rated",
            Container::Upcoming => "upcoming",
            Container::Favorites => "favorites",
            Container::Recommendations => "recommendations",
        }
    }
}

/// Whether rendered results replace or extend the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Replace,
    Append,
}

/// Top-level view: curated lists, or search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Browse,
    Search,
}

/// Sections whose visibility depends on their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Favorites,
    Recommendations,
}

/// State of the "load more" control under the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMoreState {
    /// Neither the button nor the end marker is shown.
    #[default]
    Hidden,
    /// More pages exist.
    Available,
    /// Last page reached; the end-of-results marker is shown.
    EndOfResults,
}

/// Everything shown around the search result list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStatus {
    pub query: String,
    pub displayed_count: usize,
    pub total_results: u32,
    pub load_more: LoadMoreState,
    /// The query matched nothing.
    pub no_results: bool,
}

impl SearchStatus {
    /// Status line, e.g. `Showing 20 of 55 results for "batman"`.
    pub fn summary(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }

        let plural = if self.total_results == 1 { "" } else { "s" };
        format!(
            "Showing {} of {} result{} for \"{}\"",
            self.displayed_count, self.total_results, plural, self.query
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(query: &str, displayed_count: usize, total_results: u32) -> SearchStatus {
        SearchStatus {
            query: query.to_string(),
            displayed_count,
            total_results,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_plural() {
        assert_eq!(
            status("batman", 20, 55).summary(),
            "Showing 20 of 55 results for \"batman\""
        );
        assert_eq!(
            status("batman", 0, 0).summary(),
            "Showing 0 of 0 results for \"batman\""
        );
    }

    #[test]
    fn test_summary_singular() {
        assert_eq!(
            status("obscure", 1, 1).summary(),
            "Showing 1 of 1 result for \"obscure\""
        );
    }

    #[test]
    fn test_summary_empty_query() {
        assert_eq!(status("", 3, 3).summary(), "");
    }
}
