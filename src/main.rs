use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use demeter_core::config::{Config, DEFAULT_METHOD_NAME_EXCEPTIONS};
use demeter_core::tree::SyntaxTree;
use demeter_core::{reporting, RuleEngine};

#[derive(Parser)]
#[command(name = "demeter", version)]
#[command(about = "Law of Demeter analysis over resolved tree models")]
struct Cli {
    /// JSON tree-model files produced by a host parser, one unit per file
    #[arg(required = true, value_name = "MODEL")]
    models: Vec<PathBuf>,

    /// Exempt selector names matching the configured patterns
    #[arg(long)]
    enable_exceptions: bool,

    /// Comma/space-separated regex list of exempt selector names
    #[arg(long, value_name = "LIST", default_value = DEFAULT_METHOD_NAME_EXCEPTIONS)]
    method_name_exceptions: String,

    /// Output format: terminal or json
    #[arg(long, default_value = "terminal")]
    format: String,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config = Config::with_patterns(cli.enable_exceptions, &cli.method_name_exceptions)?;

    let units = cli
        .models
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SyntaxTree::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let engine = RuleEngine::new(config);
    let report = engine.scan(&units);

    if cli.format == "json" {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    Ok(i32::from(report.has_issues() || report.has_failures()))
}
