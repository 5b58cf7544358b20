// src/analysis/permitted.rs
//! Permitted-type collection for a method scope.
//!
//! A method may call through its parameters, its class's fields, and the
//! locals it constructs itself. Each declared type is flattened: nested
//! generic arguments become independent entries, so unwrapping a
//! list-of-optional-of-X and invoking on X is not a traversal the rule
//! punishes.

use std::collections::HashSet;

use crate::tree::{InitializerKind, NodeId, NodeKind, SyntaxTree, TypeRef};

use super::navigator::{self, Enclosing};

/// The sets of types a method scope is allowed to invoke through, one per
/// source, each already expanded through nested generic arguments.
#[derive(Debug, Clone, Default)]
pub struct PermittedTypes {
    pub params: HashSet<TypeRef>,
    pub fields: HashSet<TypeRef>,
    pub locals: HashSet<TypeRef>,
}

impl PermittedTypes {
    /// Collects the permitted types for `method`.
    #[must_use]
    pub fn collect(tree: &SyntaxTree, method: NodeId) -> Self {
        let mut permitted = Self::default();

        if let NodeKind::Method { params, .. } = &tree.node(method).kind {
            for param in params {
                expand_into(&mut permitted.params, &param.type_ref);
            }
        }

        let class = navigator::find_enclosing(tree, method, Enclosing::Class);

        for id in tree.ids() {
            let NodeKind::Variable {
                type_ref,
                initializer,
                ..
            } = &tree.node(id).kind
            else {
                continue;
            };

            let enclosing_method = navigator::find_enclosing(tree, id, Enclosing::Method);
            if enclosing_method == Some(method) {
                // A locally fetched object is itself transitively obtained,
                // so only constructed (or otherwise non-call) initializers
                // earn trust. Uninitialized locals earn none.
                if matches!(
                    initializer,
                    Some(InitializerKind::DirectConstruction | InitializerKind::Other)
                ) {
                    expand_into(&mut permitted.locals, type_ref);
                }
            } else if enclosing_method.is_none()
                && class.is_some()
                && navigator::find_enclosing(tree, id, Enclosing::Class) == class
            {
                expand_into(&mut permitted.fields, type_ref);
            }
        }

        permitted
    }

    #[must_use]
    pub fn contains(&self, type_ref: &TypeRef) -> bool {
        self.params.contains(type_ref)
            || self.fields.contains(type_ref)
            || self.locals.contains(type_ref)
    }
}

/// Inserts `type_ref` and, recursively, every nested type argument as its
/// own entry. The set deduplicates.
pub fn expand_into(set: &mut HashSet<TypeRef>, type_ref: &TypeRef) {
    set.insert(type_ref.clone());
    for arg in &type_ref.args {
        expand_into(set, arg);
    }
}
