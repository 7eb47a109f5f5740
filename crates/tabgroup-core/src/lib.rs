//! # Tabgroup Core Library
//!
//! Deterministic auto-grouping for open browser tabs. Given a snapshot of
//! tabs, the engine proposes at most one named workspace ("Development",
//! "internal-tool.corp", "Leisure", ...) together with a 0-100 confidence
//! and a human-readable reason.
//!
//! ## Architecture
//!
//! - **Rules**: immutable domain and keyword category tables, builtin or
//!   extended from a TOML file
//! - **Classifiers**: URL → one domain category; URL + title → keyword
//!   categories
//! - **Scoring**: additive confidence terms (coverage, size, recency, focus,
//!   density) with an explainable breakdown
//! - **Generators**: domain-pattern, keyword-pattern, time-context and
//!   unlisted-domain heuristics
//! - **Aggregator**: name-keyed dedup, threshold filter, ranking
//! - **Engine**: the entry point; short-circuits and fail-open handling
//!
//! Every pass is pure: the current time is an explicit argument and nothing
//! is read from or written to disk. Only configuration loading touches the
//! filesystem.
//!
//! ## Key Components
//!
//! - [`GroupingEngine`]: Orchestrator and sole entry point
//! - [`WorkspaceSuggestion`]: The value handed to storage and notifications
//! - [`RuleSet`]: Category tables
//! - [`Config`]: Application configuration management

pub mod aggregator;
pub mod classify;
pub mod engine;
pub mod error;
pub mod generators;
pub mod rules;
pub mod scoring;
pub mod storage;
pub mod suggestion;
pub mod tab;

pub use aggregator::{merge_candidates, Aggregator, DEFAULT_CONFIDENCE_THRESHOLD};
pub use classify::{DomainClassifier, KeywordClassifier};
pub use engine::{GroupingEngine, MIN_VALID_TABS};
pub use error::{ConfigError, CoreError, RulesError, ValidationError};
pub use generators::{SuggestionGenerator, TimeContext};
pub use rules::{CategoryRule, RuleFile, RuleSet};
pub use scoring::{ScoreBreakdown, ScoreTerm};
pub use storage::{Config, GroupingSettings};
pub use suggestion::{SuggestionSource, WorkspaceSuggestion};
pub use tab::{OpenTab, Snapshot, TabId};
