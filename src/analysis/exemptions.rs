// src/analysis/exemptions.rs
//! Configured exemptions: static calls and allow-listed selector names.

use crate::config::Config;

use super::resolver::Selector;

/// Returns true when the call site is exempt from classification: static
/// calls never traverse an object graph, and, when enabled, selector names
/// matching a configured pattern are allowed through. The pattern escape
/// hatch exists for idiomatic accessor calls on caught exceptions.
#[must_use]
pub fn is_exempt(config: &Config, selector: &Selector<'_>) -> bool {
    if selector.is_static {
        return true;
    }
    config.enable_exceptions
        && config
            .method_name_exceptions
            .iter()
            .any(|pattern| pattern.is_match(&selector.identifier.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Identifier, Span, SymbolRef};

    fn selector_named(name: &str, is_static: bool) -> (Identifier, bool) {
        (
            Identifier {
                name: name.to_string(),
                span: Span::new(1, 1),
            },
            is_static,
        )
    }

    #[test]
    fn static_calls_are_always_exempt() {
        let config = Config::new().unwrap();
        let (identifier, is_static) = selector_named("parseInt", true);
        let selector = Selector {
            identifier: &identifier,
            is_static,
            declaration: SymbolRef::Unresolved,
        };
        assert!(is_exempt(&config, &selector));
    }

    #[test]
    fn patterns_apply_only_when_enabled() {
        let (identifier, is_static) = selector_named("getMessage", false);
        let selector = Selector {
            identifier: &identifier,
            is_static,
            declaration: SymbolRef::Unresolved,
        };

        let disabled = Config::with_patterns(false, "getMessage").unwrap();
        assert!(!is_exempt(&disabled, &selector));

        let enabled = Config::with_patterns(true, "getMessage").unwrap();
        assert!(is_exempt(&enabled, &selector));
    }
}
