// src/error.rs
use crate::tree::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemeterError {
    /// The tree handed to us breaks the rule's structural contract, e.g. an
    /// invocation whose callee is not a member-select. Aborts the current
    /// compilation unit only.
    #[error("node {node:?}: expected a member-select callee, found {found}")]
    UnexpectedShape { node: NodeId, found: &'static str },

    #[error("invalid exception pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("malformed tree model: {0}")]
    Model(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DemeterError>;
