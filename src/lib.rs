pub mod analysis;
pub mod config;
pub mod error;
pub mod reporting;
pub mod tree;
pub mod types;

pub use analysis::RuleEngine;
pub use config::Config;
pub use error::{DemeterError, Result};
pub use types::{Issue, ScanReport, UnitReport, RULE_KEY};
