//! Relevance scoring

use super::index::PageDescriptor;
use crate::consts::*;

/// A page that matched a query, with its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub page: &'a PageDescriptor,
    pub score: u32,
}

/// Lowercase and trim a raw query.
///
/// Returns `None` when fewer than [`MIN_QUERY_LEN`] characters remain.
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    (query.chars().count() >= MIN_QUERY_LEN).then(|| query.to_lowercase())
}

/// Score a page against an already normalized query.
///
/// - title contains query: +10
/// - each keyword containing query: +5, and +10 more when equal
/// - description contains query: +3
pub fn score_page(page: &PageDescriptor, query: &str) -> u32 {
    let mut score = 0;

    if page.title.to_lowercase().contains(query) {
        score += TITLE_SCORE;
    }

    for keyword in &page.keywords {
        let keyword = keyword.to_lowercase();
        if keyword.contains(query) {
            score += KEYWORD_PARTIAL_SCORE;
        }
        if keyword == query {
            score += KEYWORD_EXACT_SCORE;
        }
    }

    if page.description.to_lowercase().contains(query) {
        score += DESCRIPTION_SCORE;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(title: &str, keywords: &[&str], description: &str) -> PageDescriptor {
        PageDescriptor {
            title: title.to_string(),
            url: "page.html".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let p = page("Pixel Art Gallery", &[], "");
        assert_eq!(score_page(&p, "gallery"), TITLE_SCORE);
    }

    #[test]
    fn test_keyword_exact_and_partial_stack() {
        let p = page("", &["retro"], "");
        assert_eq!(
            score_page(&p, "retro"),
            KEYWORD_PARTIAL_SCORE + KEYWORD_EXACT_SCORE
        );
        assert_eq!(score_page(&p, "ret"), KEYWORD_PARTIAL_SCORE);
    }

    #[test]
    fn test_every_keyword_counts() {
        let p = page("", &["web games", "browser games", "games"], "");
        // Three partial hits plus one exact
        assert_eq!(
            score_page(&p, "games"),
            3 * KEYWORD_PARTIAL_SCORE + KEYWORD_EXACT_SCORE
        );
    }

    #[test]
    fn test_description_only_is_lower_than_title() {
        let by_title = page("Resume", &[], "");
        let by_description = page("Other", &[], "my resume");
        let d = score_page(&by_description, "resume");
        assert!(d > 0);
        assert!(score_page(&by_title, "resume") > d);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let p = page("Life", &["dogs"], "Personal life");
        assert_eq!(score_page(&p, "cats"), 0);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Pixel "), Some("pixel".to_string()));
        assert_eq!(normalize_query("x"), None);
        assert_eq!(normalize_query("   "), None);
        // Counted in characters, not bytes
        assert_eq!(normalize_query("é"), None);
        assert_eq!(normalize_query("c#"), Some("c#".to_string()));
    }

    proptest! {
        #[test]
        fn prop_short_queries_never_match(q in "\\PC{0,1}", pad in " {0,3}") {
            let index = crate::search::SiteIndex::builtin().unwrap();
            let query = format!("{pad}{q}{pad}");
            prop_assert!(index.search(&query).is_empty());
        }

        #[test]
        fn prop_exact_keyword_outranks_partial(word in "[a-z]{2,8}", suffix in "[a-z]{1,4}") {
            let exact = page("", &[&word], "");
            let partial = page("", &[&format!("{word}{suffix}")], "");
            prop_assert!(score_page(&exact, &word) >= score_page(&partial, &word) + KEYWORD_EXACT_SCORE);
        }
    }
}
