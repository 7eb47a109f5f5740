//! Domain classifier: hostname to at most one category.

use crate::rules::CategoryRule;
use crate::tab::{hostname, strip_www};

/// Whether `host` is `domain` or a subdomain of it, ignoring a leading `www.`
/// on either side.
///
/// Matching is on label boundaries: `gist.github.com` matches `github.com`,
/// `notgithub.com` does not.
pub fn host_matches(host: &str, domain: &str) -> bool {
    let host = strip_www(host);
    let domain = strip_www(domain);
    if domain.is_empty() {
        return false;
    }
    if host.eq_ignore_ascii_case(domain) {
        return true;
    }
    let Some(prefix_len) = host.len().checked_sub(domain.len() + 1) else {
        return false;
    };
    host.as_bytes()[prefix_len] == b'.'
        && host
            .get(prefix_len + 1..)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(domain))
}

/// Maps a URL to the first domain-table category that lists its host.
#[derive(Debug, Clone, Copy)]
pub struct DomainClassifier<'r> {
    rules: &'r [CategoryRule],
}

impl<'r> DomainClassifier<'r> {
    pub fn new(rules: &'r [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Category for `url`, or `None` when the URL does not parse or no
    /// category lists its host.
    pub fn classify(&self, url: &str) -> Option<&'r str> {
        let host = hostname(url)?;
        self.classify_host(&host)
    }

    /// Category for an already extracted hostname.
    pub fn classify_host(&self, host: &str) -> Option<&'r str> {
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|domain| host_matches(host, domain)))
            .map(|rule| rule.label.as_str())
    }

    /// Whether any category covers `host`.
    pub fn covers(&self, host: &str) -> bool {
        self.classify_host(host).is_some()
    }
}
