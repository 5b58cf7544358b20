// src/analysis/navigator.rs
//! Upward parent-chain navigation.

use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// Declaration kinds an upward search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enclosing {
    Method,
    Class,
}

/// Finds the nearest ancestor of `node` with the requested kind, walking
/// parent links. The start node itself never matches. Returns `None` when
/// the root is reached first, e.g. a call in a static initializer outside
/// any method.
#[must_use]
pub fn find_enclosing(tree: &SyntaxTree, node: NodeId, target: Enclosing) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(id) = current {
        let hit = matches!(
            (&tree.node(id).kind, target),
            (NodeKind::Method { .. }, Enclosing::Method)
                | (NodeKind::Class { .. }, Enclosing::Class)
        );
        if hit {
            return Some(id);
        }
        current = tree.parent(id);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Span, SymbolRef, TreeBuilder, TypeRef};

    #[test]
    fn finds_method_through_intermediate_nodes() {
        let mut b = TreeBuilder::new("t");
        let class = b.class("A", TypeRef::named("A"));
        let m = b.method(class, "run", vec![]);
        let block = b.other(m);
        let inv = b.call(block, "go", Span::new(1, 1), false, SymbolRef::Unresolved);
        let tree = b.build();

        assert_eq!(find_enclosing(&tree, inv, Enclosing::Method), Some(m));
        assert_eq!(find_enclosing(&tree, inv, Enclosing::Class), Some(class));
    }

    #[test]
    fn start_node_does_not_match_itself() {
        let mut b = TreeBuilder::new("t");
        let class = b.class("A", TypeRef::named("A"));
        let m = b.method(class, "run", vec![]);
        let tree = b.build();

        assert_eq!(find_enclosing(&tree, m, Enclosing::Method), None);
        assert_eq!(find_enclosing(&tree, m, Enclosing::Class), Some(class));
    }

    #[test]
    fn missing_scope_returns_none() {
        let mut b = TreeBuilder::new("t");
        let root = b.root();
        let inv = b.call(root, "go", Span::new(1, 1), false, SymbolRef::Unresolved);
        let tree = b.build();

        assert_eq!(find_enclosing(&tree, inv, Enclosing::Method), None);
    }
}
