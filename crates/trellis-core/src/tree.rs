//! Arena-backed node tree with single-owner parent/child links.

use crate::collections::map::HashSet;
use crate::{NodeError, NodeScript};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt::Write as _;

new_key_type! {
    /// Generation-checked handle to a node.
    ///
    /// A handle to a destroyed node never resolves to a node created later
    /// in the same slot, so holders of non-owning references (focus, hover)
    /// can detect staleness instead of dangling.
    pub struct NodeId;
}

struct NodeData<P, R> {
    name: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    groups: HashSet<String>,
    visible: bool,
    process_enabled: bool,
    in_tree: bool,
    ready: bool,
    script: Option<Box<dyn NodeScript<P, R>>>,
    payload: P,
}

impl<P, R> NodeData<P, R> {
    fn new(name: String, payload: P) -> Self {
        Self {
            name,
            parent: None,
            children: SmallVec::new(),
            groups: HashSet::default(),
            visible: true,
            process_enabled: true,
            in_tree: false,
            ready: false,
            script: None,
            payload,
        }
    }
}

/// A forest of nodes rooted at one live `Root` node.
///
/// Parents exclusively own their children; children keep a non-owning
/// back-reference. Nodes are created detached and only become part of the
/// live tree once attached below the root (directly or indirectly).
///
/// `P` is the per-node payload, `R` tree-wide resources that hooks and
/// extension traits can reach through [`NodeTree::resources`].
pub struct NodeTree<P, R = ()> {
    nodes: SlotMap<NodeId, NodeData<P, R>>,
    root: NodeId,
    resources: R,
    structure_changes: HashSet<NodeId>,
}

impl<P, R: Default> NodeTree<P, R> {
    pub fn new(root_payload: P) -> Self {
        Self::with_resources(root_payload, R::default())
    }
}

impl<P, R> NodeTree<P, R> {
    pub fn with_resources(root_payload: P, resources: R) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut root_data = NodeData::new("Root".to_owned(), root_payload);
        root_data.in_tree = true;
        root_data.ready = true;
        let root = nodes.insert(root_data);
        Self {
            nodes,
            root,
            resources,
            structure_changes: HashSet::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut R {
        &mut self.resources
    }

    /// Creates a detached node.
    pub fn create(&mut self, name: impl Into<String>, payload: P) -> NodeId {
        self.nodes.insert(NodeData::new(name.into(), payload))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> Result<&NodeData<P, R>, NodeError> {
        self.nodes.get(id).ok_or(NodeError::Missing { id })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData<P, R>, NodeError> {
        self.nodes.get_mut(id).ok_or(NodeError::Missing { id })
    }

    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.nodes.get(id).map(|node| &node.payload)
    }

    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.nodes.get_mut(id).map(|node| &mut node.payload)
    }

    /// Mutable payload alongside shared tree resources.
    pub fn payload_with_resources(&mut self, id: NodeId) -> Option<(&mut P, &R)> {
        let resources = &self.resources;
        self.nodes
            .get_mut(id)
            .map(|node| (&mut node.payload, resources))
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = name.into();
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children in insertion (paint) order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&id| id == child)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.visible)
    }

    /// Visible itself and through every ancestor.
    pub fn is_visible_in_tree(&self, id: NodeId) -> bool {
        self.is_visible(id) && self.ancestors(id).all(|ancestor| self.is_visible(ancestor))
    }

    /// Returns whether the flag actually changed.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            log::warn!("set_visible on missing node {id:?}");
            return false;
        };
        if node.visible == visible {
            return false;
        }
        node.visible = visible;
        if let Some(parent) = node.parent {
            self.structure_changes.insert(parent);
        }
        true
    }

    pub fn is_process_enabled(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.process_enabled)
    }

    pub fn set_process_enabled(&mut self, id: NodeId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.process_enabled = enabled;
        }
    }

    pub fn is_inside_tree(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.in_tree)
    }

    pub fn is_ready(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.ready)
    }

    pub fn set_script(
        &mut self,
        id: NodeId,
        script: impl NodeScript<P, R> + 'static,
    ) -> Result<(), NodeError> {
        self.node_mut(id)?.script = Some(Box::new(script));
        Ok(())
    }

    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, P, R> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }

    /// `id` followed by all of its descendants, depth-first, parents before
    /// children, siblings in insertion order.
    pub fn preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if !self.contains(id) {
            return order;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        order
    }

    /// Appends `child` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Inserts `child` at `index` (clamped) among `parent`'s children.
    ///
    /// A child that already has a parent is detached first; if it leaves
    /// the live tree it receives `exit_tree` before entering again.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), NodeError> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root {
            return Err(NodeError::RootImmutable);
        }
        if child == parent || self.is_ancestor_of(child, parent) {
            return Err(NodeError::Cycle { parent, child });
        }
        if self.parent(child) == Some(parent) {
            return self.move_child(parent, child, index);
        }

        self.detach(child)?;

        let parent_live = {
            let parent_node = self.node_mut(parent)?;
            let index = index.min(parent_node.children.len());
            parent_node.children.insert(index, child);
            parent_node.in_tree
        };
        self.node_mut(child)?.parent = Some(parent);
        self.structure_changes.insert(parent);
        log::debug!("attached {child:?} under {parent:?}");

        if parent_live {
            self.propagate_enter(child);
        }
        Ok(())
    }

    /// Moves `child` to `index` (clamped) within its parent's children.
    pub fn move_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<(), NodeError> {
        let parent_node = self.node_mut(parent)?;
        let from = parent_node
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(NodeError::Missing { id: child })?;
        parent_node.children.remove(from);
        let to = index.min(parent_node.children.len());
        parent_node.children.insert(to, child);
        self.structure_changes.insert(parent);
        Ok(())
    }

    /// Detaches `child` from its parent, running `exit_tree` if it was live.
    /// Detaching an orphan is a no-op.
    pub fn detach(&mut self, child: NodeId) -> Result<(), NodeError> {
        if child == self.root {
            return Err(NodeError::RootImmutable);
        }
        let Some(parent) = self.node(child)?.parent else {
            return Ok(());
        };

        if self.is_inside_tree(child) {
            self.propagate_exit(child);
        }

        // Exit hooks may have moved or destroyed the node already.
        if self.parent(child) == Some(parent) {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|id| *id != child);
            }
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = None;
            }
            self.structure_changes.insert(parent);
            log::debug!("detached {child:?} from {parent:?}");
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        if self.parent(child) != Some(parent) {
            return Err(NodeError::Missing { id: child });
        }
        self.detach(child)
    }

    /// Detaches and frees `id` with its whole subtree. Returns the freed ids.
    pub fn destroy(&mut self, id: NodeId) -> Result<Vec<NodeId>, NodeError> {
        if id == self.root {
            return Err(NodeError::RootImmutable);
        }
        self.node(id)?;
        self.detach(id)?;
        let freed = self.preorder(id);
        for node in &freed {
            self.nodes.remove(*node);
            self.structure_changes.remove(node);
        }
        log::debug!("destroyed {} node(s) rooted at {id:?}", freed.len());
        Ok(freed)
    }

    /// First child named `name`. With `recursive`, searches all
    /// descendants depth-first.
    pub fn find_child(&self, parent: NodeId, name: &str, recursive: bool) -> Option<NodeId> {
        if recursive {
            self.preorder(parent)
                .into_iter()
                .skip(1)
                .find(|&id| self.name(id) == Some(name))
        } else {
            self.children(parent)
                .iter()
                .copied()
                .find(|&id| self.name(id) == Some(name))
        }
    }

    pub fn add_to_group(&mut self, id: NodeId, group: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.groups.insert(group.into());
        }
    }

    pub fn remove_from_group(&mut self, id: NodeId, group: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.groups.remove(group);
        }
    }

    pub fn is_in_group(&self, id: NodeId, group: &str) -> bool {
        self.nodes.get(id).is_some_and(|node| node.groups.contains(group))
    }

    /// All live nodes tagged with `group`, in depth-first order. Scans the
    /// whole tree; no index is maintained.
    pub fn nodes_in_group(&self, group: &str) -> Vec<NodeId> {
        self.preorder(self.root)
            .into_iter()
            .filter(|&id| self.is_in_group(id, group))
            .collect()
    }

    /// Runs `process` hooks depth-first, parents before children. Hidden
    /// subtrees and nodes with processing disabled are skipped.
    pub fn process(&mut self, dt: f32) {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            if !self.is_visible(current) {
                continue;
            }
            order.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }

        for id in order {
            if self.is_inside_tree(id) && self.is_process_enabled(id) {
                self.run_script(id, |script, tree| script.process(tree, id, dt));
            }
        }
    }

    /// Parents whose child list or child visibility changed since the last
    /// call. Destroyed parents are dropped.
    pub fn take_structure_changes(&mut self) -> Vec<NodeId> {
        let changed: Vec<NodeId> = self.structure_changes.drain().collect();
        changed
            .into_iter()
            .filter(|id| self.nodes.contains_key(*id))
            .collect()
    }

    pub fn dump_tree(&self) -> String {
        let mut output = String::new();
        self.dump_node(&mut output, self.root, 0);
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.nodes.get(id) {
            Some(node) => {
                let _ = writeln!(
                    output,
                    "{indent}{} {id:?}{}",
                    node.name,
                    if node.visible { "" } else { " (hidden)" }
                );
                for &child in &node.children {
                    self.dump_node(output, child, depth + 1);
                }
            }
            None => {
                let _ = writeln!(output, "{indent}{id:?} (missing)");
            }
        }
    }

    fn propagate_enter(&mut self, id: NodeId) {
        let order = self.preorder(id);
        for &node in &order {
            match self.nodes.get_mut(node) {
                Some(data) if !data.in_tree => data.in_tree = true,
                _ => continue,
            }
            self.run_script(node, |script, tree| script.enter_tree(tree, node));
        }
        for &node in order.iter().rev() {
            match self.nodes.get_mut(node) {
                Some(data) if data.in_tree && !data.ready => data.ready = true,
                _ => continue,
            }
            self.run_script(node, |script, tree| script.ready(tree, node));
        }
    }

    fn propagate_exit(&mut self, id: NodeId) {
        let order = self.preorder(id);
        for &node in order.iter().rev() {
            match self.nodes.get_mut(node) {
                Some(data) if data.in_tree => {
                    data.in_tree = false;
                    data.ready = false;
                }
                _ => continue,
            }
            self.run_script(node, |script, tree| script.exit_tree(tree, node));
        }
    }

    fn run_script(&mut self, id: NodeId, f: impl FnOnce(&mut dyn NodeScript<P, R>, &mut Self)) {
        let Some(mut script) = self.nodes.get_mut(id).and_then(|node| node.script.take()) else {
            return;
        };
        f(script.as_mut(), self);
        if let Some(node) = self.nodes.get_mut(id) {
            if node.script.is_none() {
                node.script = Some(script);
            }
        }
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a, P, R> {
    tree: &'a NodeTree<P, R>,
    next: Option<NodeId>,
}

impl<P, R> Iterator for Ancestors<'_, P, R> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
