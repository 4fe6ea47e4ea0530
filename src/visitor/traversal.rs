//! Tree walkers driving a visitor over every node
//!
//! Children come from [`Expr::args`], so every driver sees sums and products
//! through their summands and factors. Shared subtrees are visited once per
//! occurrence; there is no deduplication.

use super::{StopVisitor, Visitor};
use crate::core::Expr;

/// Visit `node`, then each child subtree in order (parent before children)
pub fn preorder_traversal<V: Visitor + ?Sized>(node: &Expr, v: &mut V) {
    node.accept(v);
    for child in node.args() {
        preorder_traversal(&child, v);
    }
}

/// Visit each child subtree in order, then `node` (children before parent)
pub fn postorder_traversal<V: Visitor + ?Sized>(node: &Expr, v: &mut V) {
    for child in node.args() {
        postorder_traversal(&child, v);
    }
    node.accept(v);
}

/// Preorder traversal that aborts once the visitor reports [`StopVisitor::stop`].
///
/// The flag is checked right after `node` is visited and again after each child
/// subtree returns, so the visited nodes always form a prefix of the full
/// preorder sequence.
pub fn preorder_traversal_stop<V: StopVisitor + ?Sized>(node: &Expr, v: &mut V) {
    node.accept(v);
    if v.stop() {
        tracing::trace!(type_code = %node.type_code(), "traversal stopped early");
        return;
    }
    for child in node.args() {
        preorder_traversal_stop(&child, v);
        if v.stop() {
            return;
        }
    }
}
