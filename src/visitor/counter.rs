//! Node counting

use super::{preorder_traversal, BaseVisitor};
use crate::core::{Expr, TypeCode};

use rustc_hash::FxHashMap;

/// A simple visitor that counts nodes, in total and per kind
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
    pub by_kind: FxHashMap<TypeCode, usize>,
}

impl NodeCounter {
    /// Count every node of `e`, shared subtrees once per occurrence
    #[must_use]
    pub fn count_nodes(e: &Expr) -> Self {
        let mut counter = Self::default();
        preorder_traversal(e, &mut counter);
        counter
    }

    /// How many nodes of `code` were seen
    #[must_use]
    pub fn of_kind(&self, code: TypeCode) -> usize {
        self.by_kind.get(&code).copied().unwrap_or(0)
    }
}

impl BaseVisitor for NodeCounter {
    fn bvisit_basic(&mut self, node: &Expr) {
        self.count += 1;
        *self.by_kind.entry(node.type_code()).or_insert(0) += 1;
    }
}
