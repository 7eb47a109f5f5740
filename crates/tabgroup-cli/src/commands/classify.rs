use std::path::Path;

use clap::Args;
use serde_json::json;
use tabgroup_core::tab::hostname;
use tabgroup_core::{DomainClassifier, KeywordClassifier};

use super::{load_config, load_engine};

#[derive(Args)]
pub struct ClassifyArgs {
    /// URL to classify
    pub url: String,
    /// Page title, searched for keywords together with the URL
    #[arg(long, default_value = "")]
    pub title: String,
}

pub fn run(args: ClassifyArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let engine = load_engine(&config)?;
    let rules = engine.rules();

    let domain = DomainClassifier::new(rules.domain_rules()).classify(&args.url);
    let keywords = KeywordClassifier::new(rules.keyword_rules()).classify(&args.url, &args.title);

    let out = json!({
        "url": args.url,
        "host": hostname(&args.url),
        "domainCategory": domain,
        "keywordCategories": keywords,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
