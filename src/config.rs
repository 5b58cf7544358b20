// src/config.rs
use crate::error::{DemeterError, Result};
use regex::Regex;

/// Default exemption patterns: accessor names associated with common checked
/// exceptions. Only consulted when `enable_exceptions` is on.
pub const DEFAULT_METHOD_NAME_EXCEPTIONS: &str = "java.lang.InterruptedException, \
    java.lang.NumberFormatException, \
    java.lang.NoSuchMethodException, \
    java.text.ParseException, \
    java.net.MalformedURLException, \
    java.time.format.DateTimeParseException";

#[derive(Debug, Clone)]
pub struct Config {
    /// Turns on pattern-based exemption of selector names.
    pub enable_exceptions: bool,
    /// Compiled, anchored patterns; a selector whose name fully matches any
    /// of these is exempt when exceptions are enabled.
    pub method_name_exceptions: Vec<Regex>,
}

impl Config {
    /// Creates a config with exceptions disabled and the default pattern list.
    ///
    /// # Errors
    /// Returns an error if a default pattern fails to compile, which would
    /// indicate a broken build rather than user input.
    pub fn new() -> Result<Self> {
        Self::with_patterns(false, DEFAULT_METHOD_NAME_EXCEPTIONS)
    }

    /// Creates a config from a comma/space-separated pattern list.
    ///
    /// # Errors
    /// Returns `DemeterError::Pattern` for the first pattern that is not a
    /// valid regular expression.
    pub fn with_patterns(enable_exceptions: bool, spec: &str) -> Result<Self> {
        Ok(Self {
            enable_exceptions,
            method_name_exceptions: parse_patterns(spec)?,
        })
    }
}

/// Splits a comma/space-separated pattern list and compiles each entry as a
/// full-match regex (anchored), matching the whole selector name rather than
/// a substring.
///
/// # Errors
/// Returns `DemeterError::Pattern` carrying the offending pattern text.
pub fn parse_patterns(spec: &str) -> Result<Vec<Regex>> {
    spec.split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pattern| {
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| DemeterError::Pattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_compiles() {
        let config = Config::new().unwrap();
        assert!(!config.enable_exceptions);
        assert_eq!(config.method_name_exceptions.len(), 6);
    }

    #[test]
    fn patterns_split_on_commas_and_spaces() {
        let patterns = parse_patterns("getMessage,getCause parse.*").unwrap();
        assert_eq!(patterns.len(), 3);
    }

    #[test]
    fn patterns_are_anchored() {
        let patterns = parse_patterns("getMessage").unwrap();
        assert!(patterns[0].is_match("getMessage"));
        assert!(!patterns[0].is_match("getMessageDetail"));
        assert!(!patterns[0].is_match("xgetMessage"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = parse_patterns("get(Message").unwrap_err();
        assert!(err.to_string().contains("get(Message"));
    }
}
