//! Category rule tables.
//!
//! Two parallel tables drive classification: domain rules (category label to
//! hostname suffixes) and keyword rules (category label to substrings). A
//! [`RuleSet`] is built once, handed to the engine, and never mutated.
//! Declaration order is significant: it is the order classifiers and
//! generators walk the categories in.

mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// One category and the patterns that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub patterns: Vec<String>,
}

impl CategoryRule {
    fn from_static(label: &str, patterns: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Immutable domain and keyword tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    domain: Vec<CategoryRule>,
    keyword: Vec<CategoryRule>,
}

impl RuleSet {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            domain: builtin::DOMAIN_RULES
                .iter()
                .map(|(label, domains)| CategoryRule::from_static(label, domains))
                .collect(),
            keyword: builtin::KEYWORD_RULES
                .iter()
                .map(|(label, keywords)| CategoryRule::from_static(label, keywords))
                .collect(),
        }
    }

    /// Build a rule set from explicit tables.
    ///
    /// Patterns are trimmed and lowercased; blank patterns are dropped.
    pub fn new(
        domain: Vec<CategoryRule>,
        keyword: Vec<CategoryRule>,
    ) -> std::result::Result<Self, RulesError> {
        let domain = normalize_table("domain", domain)?;
        let keyword = normalize_table("keyword", keyword)?;
        Ok(Self { domain, keyword })
    }

    pub fn domain_rules(&self) -> &[CategoryRule] {
        &self.domain
    }

    pub fn keyword_rules(&self) -> &[CategoryRule] {
        &self.keyword
    }

    /// Extend with user rules.
    ///
    /// Entries whose label already exists add patterns to that category;
    /// new labels are appended after the existing ones.
    pub fn extended(self, extra: RuleFile) -> std::result::Result<Self, RulesError> {
        let domain = merge(
            self.domain,
            extra
                .domain
                .into_iter()
                .map(|entry| CategoryRule {
                    label: entry.label,
                    patterns: entry.domains,
                })
                .collect(),
        );
        let keyword = merge(
            self.keyword,
            extra
                .keyword
                .into_iter()
                .map(|entry| CategoryRule {
                    label: entry.label,
                    patterns: entry.keywords,
                })
                .collect(),
        );
        Self::new(domain, keyword)
    }

    /// Builtin tables extended with the rules file at `path`.
    pub fn builtin_with_file(path: &Path) -> Result<Self> {
        let extra = RuleFile::load(path)?;
        Ok(Self::builtin().extended(extra)?)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// On-disk user rules.
///
/// ```toml
/// [[domain]]
/// label = "Development"
/// domains = ["git.internal.corp"]
///
/// [[keyword]]
/// label = "Cooking"
/// keywords = ["recipe", "sourdough"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub domain: Vec<DomainEntry>,
    #[serde(default)]
    pub keyword: Vec<KeywordEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub label: String,
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub label: String,
    pub keywords: Vec<String>,
}

impl RuleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn merge(mut base: Vec<CategoryRule>, extra: Vec<CategoryRule>) -> Vec<CategoryRule> {
    for rule in extra {
        match base.iter_mut().find(|r| r.label == rule.label.trim()) {
            Some(existing) => existing.patterns.extend(rule.patterns),
            None => base.push(rule),
        }
    }
    base
}

fn normalize_table(
    table: &'static str,
    rules: Vec<CategoryRule>,
) -> std::result::Result<Vec<CategoryRule>, RulesError> {
    let mut out: Vec<CategoryRule> = Vec::with_capacity(rules.len());
    for rule in rules {
        let label = rule.label.trim().to_string();
        if label.is_empty() {
            return Err(RulesError::EmptyLabel { table });
        }
        if out.iter().any(|r| r.label == label) {
            return Err(RulesError::DuplicateLabel { table, label });
        }

        let mut patterns: Vec<String> = Vec::with_capacity(rule.patterns.len());
        for pattern in rule.patterns {
            let pattern = pattern.trim().to_lowercase();
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        if patterns.is_empty() {
            return Err(RulesError::EmptyPatterns { table, label });
        }

        out.push(CategoryRule { label, patterns });
    }
    Ok(out)
}
