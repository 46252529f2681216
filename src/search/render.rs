//! Results panel markup and submit handling

use super::rank::SearchResult;

/// Markup shown when a query matched nothing
pub const NO_RESULTS_HTML: &str = r#"<div class="search-result-item">No results found</div>"#;

/// What a form submit should do with its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Exactly one match: go straight to it
    Navigate(String),
    /// Zero or several matches: show the panel
    Display(String),
}

impl SearchOutcome {
    pub fn for_submit(results: &[SearchResult<'_>]) -> Self {
        match results {
            [only] => SearchOutcome::Navigate(only.page.url.clone()),
            _ => SearchOutcome::Display(render_results(results)),
        }
    }
}

/// Render results as anchor items for the results panel
pub fn render_results(results: &[SearchResult<'_>]) -> String {
    if results.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }

    results
        .iter()
        .map(|result| {
            format!(
                r#"<a href="{}" class="search-result-item"><strong>{}</strong><br><small>{}</small></a>"#,
                escape_html(&result.page.url),
                escape_html(&result.page.title),
                escape_html(&result.page.description),
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
