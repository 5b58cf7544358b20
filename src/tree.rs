// src/tree.rs
//! Arena-backed view of one resolved compilation unit.
//!
//! The parser and semantic resolver live outside this crate; they hand over
//! a flat arena of nodes, each storing its parent index, plus the symbol
//! facts the rule consumes (selector names, static-ness, declaration links,
//! declared types). Upward walks are plain index lookups.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source position of a token, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Canonical type identity: qualified name plus ordered type arguments.
/// Equality and hashing are structural, so membership tests compare the
/// whole shape rather than any parser's object identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn generic(name: &str, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.to_string(),
            args,
        }
    }
}

/// How a local variable got its initial value. Drives whether the variable's
/// type counts as locally owned: a constructed object is trusted, a fetched
/// one is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitializerKind {
    DirectConstruction,
    MethodResult,
    Other,
}

/// Outcome of the external symbol model's declaration lookup. Unresolved is
/// an expected state (binary-only dependencies, dynamic dispatch the model
/// declines to follow), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolRef {
    Resolved(NodeId),
    Unresolved,
}

/// A named token with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub type_ref: TypeRef,
}

/// Exhaustive node taxonomy. Fields and locals share `Variable` and are told
/// apart by their enclosing scope, the same way the source model tags both
/// as variable declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    CompilationUnit,
    Class {
        name: String,
        type_ref: TypeRef,
    },
    Method {
        name: String,
        params: Vec<Param>,
    },
    Variable {
        name: String,
        type_ref: TypeRef,
        initializer: Option<InitializerKind>,
    },
    Invocation {
        callee: NodeId,
    },
    MemberSelect {
        identifier: Identifier,
        is_static: bool,
        declaration: SymbolRef,
    },
    /// Any construct this rule does not model (blocks, literals, operators).
    Other,
}

impl NodeKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "compilation-unit",
            NodeKind::Class { .. } => "class",
            NodeKind::Method { .. } => "method",
            NodeKind::Variable { .. } => "variable",
            NodeKind::Invocation { .. } => "invocation",
            NodeKind::MemberSelect { .. } => "member-select",
            NodeKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// One compilation unit in arena form. Node order is document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub name: String,
    nodes: Vec<Node>,
}

impl SyntaxTree {
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// Parses a unit previously serialized as JSON by a host parser.
    ///
    /// # Errors
    /// Returns an error if the document is not a valid tree model.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Incremental construction of a [`SyntaxTree`], used by hosts and tests.
/// The root compilation-unit node is created up front.
pub struct TreeBuilder {
    name: String,
    nodes: Vec<Node>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: vec![Node {
                parent: None,
                kind: NodeKind::CompilationUnit,
            }],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            kind,
        });
        id
    }

    pub fn class(&mut self, name: &str, type_ref: TypeRef) -> NodeId {
        let root = self.root();
        self.push(
            root,
            NodeKind::Class {
                name: name.to_string(),
                type_ref,
            },
        )
    }

    pub fn method(&mut self, class: NodeId, name: &str, params: Vec<Param>) -> NodeId {
        self.push(
            class,
            NodeKind::Method {
                name: name.to_string(),
                params,
            },
        )
    }

    /// A local variable declaration inside a method body.
    pub fn variable(
        &mut self,
        parent: NodeId,
        name: &str,
        type_ref: TypeRef,
        initializer: Option<InitializerKind>,
    ) -> NodeId {
        self.push(
            parent,
            NodeKind::Variable {
                name: name.to_string(),
                type_ref,
                initializer,
            },
        )
    }

    /// A field declaration directly under a class.
    pub fn field(&mut self, class: NodeId, name: &str, type_ref: TypeRef) -> NodeId {
        self.variable(class, name, type_ref, None)
    }

    /// An invocation plus its member-select callee, wired together.
    /// Returns the invocation id.
    pub fn call(
        &mut self,
        parent: NodeId,
        selector: &str,
        span: Span,
        is_static: bool,
        declaration: SymbolRef,
    ) -> NodeId {
        let inv = self.push(
            parent,
            NodeKind::Invocation {
                // Patched below once the callee exists.
                callee: NodeId(0),
            },
        );
        let callee = self.push(
            inv,
            NodeKind::MemberSelect {
                identifier: Identifier {
                    name: selector.to_string(),
                    span,
                },
                is_static,
                declaration,
            },
        );
        if let NodeKind::Invocation { callee: slot } = &mut self.nodes[inv.index()].kind {
            *slot = callee;
        }
        inv
    }

    /// An unmodeled node, useful for interposing blocks and expressions.
    pub fn other(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, NodeKind::Other)
    }

    #[must_use]
    pub fn build(self) -> SyntaxTree {
        SyntaxTree {
            name: self.name,
            nodes: self.nodes,
        }
    }
}

/// Shorthand for a parameter entry.
#[must_use]
pub fn param(name: &str, type_ref: TypeRef) -> Param {
    Param {
        name: name.to_string(),
        type_ref,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_wires_call_callee() {
        let mut b = TreeBuilder::new("t");
        let class = b.class("A", TypeRef::named("A"));
        let m = b.method(class, "run", vec![]);
        let inv = b.call(m, "go", Span::new(1, 1), false, SymbolRef::Unresolved);
        let tree = b.build();

        let NodeKind::Invocation { callee } = tree.node(inv).kind else {
            panic!("expected invocation");
        };
        assert!(matches!(
            tree.node(callee).kind,
            NodeKind::MemberSelect { .. }
        ));
        assert_eq!(tree.parent(callee), Some(inv));
        assert_eq!(tree.parent(inv), Some(m));
    }

    #[test]
    fn type_ref_equality_is_structural() {
        let a = TypeRef::generic("List", vec![TypeRef::named("T")]);
        let b = TypeRef::generic("List", vec![TypeRef::named("T")]);
        let c = TypeRef::generic("List", vec![TypeRef::named("U")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
