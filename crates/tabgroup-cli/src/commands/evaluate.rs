use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local};
use clap::Args;
use tabgroup_core::OpenTab;

use super::{load_config, load_engine};

#[derive(Args)]
pub struct EvaluateArgs {
    /// JSON array of open tabs ("-" reads stdin)
    pub snapshot: PathBuf,
    /// Evaluate at this instant instead of now (RFC 3339, e.g. 2024-03-06T11:00:00+01:00)
    #[arg(long)]
    pub now: Option<String>,
    /// Print every suggestion above the threshold instead of the best one
    #[arg(long)]
    pub all: bool,
}

fn read_snapshot(path: &Path) -> Result<Vec<OpenTab>, Box<dyn std::error::Error>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };
    Ok(serde_json::from_str(&content)?)
}

fn parse_now(now: Option<&str>) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid --now '{s}': {e}").into()),
        None => Ok(Local::now().fixed_offset()),
    }
}

pub fn run(args: EvaluateArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let engine = load_engine(&config)?;
    let settings = config.settings();
    let tabs = read_snapshot(&args.snapshot)?;
    let now = parse_now(args.now.as_deref())?;
    tracing::debug!(tabs = tabs.len(), %now, "evaluating snapshot");

    if args.all {
        let all = engine.aggregate(&tabs, &settings, now)?;
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        let best = engine.try_evaluate(&tabs, &settings, now)?;
        println!("{}", serde_json::to_string_pretty(&best)?);
    }
    Ok(())
}
