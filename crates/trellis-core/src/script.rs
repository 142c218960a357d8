use crate::{NodeId, NodeTree};

/// Lifecycle hooks attached to a node.
///
/// The script is taken out of its node while a hook runs, so hooks get the
/// whole tree mutably. A node destroyed by its own hook simply drops the
/// script afterwards.
///
/// Ordering per attachment: `enter_tree` (parents before children), then
/// `ready` once (children before parents). `exit_tree` runs children
/// before parents, and never twice without an `enter_tree` in between.
pub trait NodeScript<P, R = ()> {
    fn enter_tree(&mut self, _tree: &mut NodeTree<P, R>, _node: NodeId) {}
    fn ready(&mut self, _tree: &mut NodeTree<P, R>, _node: NodeId) {}
    fn process(&mut self, _tree: &mut NodeTree<P, R>, _node: NodeId, _dt: f32) {}
    fn exit_tree(&mut self, _tree: &mut NodeTree<P, R>, _node: NodeId) {}
}
