// src/analysis/mod.rs
//! Core analysis logic (the rule engine).

pub mod classifier;
pub mod exemptions;
pub mod navigator;
pub mod permitted;
pub mod resolver;

use rayon::prelude::*;

use crate::config::Config;
use crate::tree::{NodeKind, SyntaxTree};
use crate::types::{ScanReport, UnitReport};

pub use classifier::{check_call, classify, Verdict};
pub use navigator::{find_enclosing, Enclosing};
pub use permitted::PermittedTypes;
pub use resolver::{resolve_target, Declaration};

pub struct RuleEngine {
    config: Config,
}

impl RuleEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans compilation units in parallel. Classification is pure and the
    /// trees are shared immutably, so units need no coordination; each
    /// worker accumulates its own issue list.
    #[must_use]
    pub fn scan(&self, units: &[SyntaxTree]) -> ScanReport {
        let start = std::time::Instant::now();

        let results: Vec<UnitReport> = units
            .par_iter()
            .map(|unit| self.analyze_unit(unit))
            .collect();

        let total_issues: usize = results.iter().map(UnitReport::issue_count).sum();

        ScanReport {
            units: results,
            total_issues,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    /// Visits every invocation of one unit in document order. A contract
    /// failure aborts only this unit: partial issues are discarded and the
    /// error is recorded on its report.
    #[must_use]
    pub fn analyze_unit(&self, tree: &SyntaxTree) -> UnitReport {
        let mut report = UnitReport {
            unit: tree.name.clone(),
            issues: Vec::new(),
            error: None,
        };

        for id in tree.ids() {
            if !matches!(tree.node(id).kind, NodeKind::Invocation { .. }) {
                continue;
            }
            match classifier::check_call(tree, id, &self.config) {
                Ok(Some(issue)) => report.issues.push(issue),
                Ok(None) => {}
                Err(e) => {
                    report.issues.clear();
                    report.error = Some(e.to_string());
                    break;
                }
            }
        }

        report
    }
}
