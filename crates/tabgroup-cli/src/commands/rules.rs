use std::path::Path;

use clap::Subcommand;
use tabgroup_core::CategoryRule;

use super::{load_config, load_engine};

#[derive(Subcommand)]
pub enum RulesAction {
    /// List the active domain and keyword categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_table(heading: &str, rules: &[CategoryRule]) {
    println!("{heading}:");
    for rule in rules {
        println!("  {:<14} {}", rule.label, rule.patterns.join(", "));
    }
}

pub fn run(action: RulesAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let engine = load_engine(&config)?;
    let rules = engine.rules();

    match action {
        RulesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(rules)?);
            } else {
                print_table("Domain categories", rules.domain_rules());
                println!();
                print_table("Keyword categories", rules.keyword_rules());
            }
        }
    }
    Ok(())
}
