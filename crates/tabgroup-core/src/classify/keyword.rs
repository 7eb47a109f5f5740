//! Keyword classifier: URL and title text to any number of categories.
//!
//! Matching is plain substring containment on the lowercased text, with no
//! word boundaries ("roast" matches "pyroast").

use crate::rules::CategoryRule;

/// Lowercased `url + " " + title`.
pub fn search_text(url: &str, title: &str) -> String {
    format!("{url} {title}").to_lowercase()
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier<'r> {
    rules: &'r [CategoryRule],
}

impl<'r> KeywordClassifier<'r> {
    pub fn new(rules: &'r [CategoryRule]) -> Self {
        Self { rules }
    }

    /// All categories with at least one keyword in the URL or title, in
    /// table order.
    pub fn classify(&self, url: &str, title: &str) -> Vec<&'r str> {
        self.classify_text(&search_text(url, title))
    }

    /// Like [`Self::classify`] for a precomputed, lowercased search string.
    pub fn classify_text(&self, text: &str) -> Vec<&'r str> {
        self.rules
            .iter()
            .filter(|rule| rule.patterns.iter().any(|kw| text.contains(kw.as_str())))
            .map(|rule| rule.label.as_str())
            .collect()
    }

    /// Distinct keywords of `rule` present in `text`.
    pub fn hits<'k>(rule: &'k CategoryRule, text: &str) -> Vec<&'k str> {
        rule.patterns
            .iter()
            .filter(|kw| text.contains(kw.as_str()))
            .map(String::as_str)
            .collect()
    }
}
