// src/types.rs
use serde::Serialize;

use crate::tree::Span;

/// Fixed rule key reported on every issue.
pub const RULE_KEY: &str = "LawOfDemeterViolation";

/// A single Law of Demeter violation, located at the selector identifier of
/// the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub rule_key: &'static str,
    pub span: Span,
}

impl Issue {
    #[must_use]
    pub fn at(span: Span) -> Self {
        Self {
            rule_key: RULE_KEY,
            span,
        }
    }
}

/// Analysis results for a single compilation unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub unit: String,
    pub issues: Vec<Issue>,
    /// Set when a structural-contract failure aborted this unit. Partial
    /// issues are discarded in that case.
    pub error: Option<String>,
}

impl UnitReport {
    /// Returns true if no issues were found and no error occurred.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.error.is_none()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Aggregated results from scanning multiple units.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub units: Vec<UnitReport>,
    pub total_issues: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any violations were found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.total_issues > 0
    }

    /// Returns true if any unit was aborted by a contract failure.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.units.iter().any(|u| u.error.is_some())
    }

    /// Returns the number of clean units.
    #[must_use]
    pub fn clean_unit_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_clean()).count()
    }
}
