//! URL and title classifiers.
//!
//! Both classifiers borrow their table from a [`crate::RuleSet`] and walk it
//! in declaration order.

pub mod domain;
pub mod keyword;

pub use domain::DomainClassifier;
pub use keyword::KeywordClassifier;
