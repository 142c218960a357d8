use super::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Recorder {
    label: &'static str,
    log: Log,
}

impl NodeScript<()> for Recorder {
    fn enter_tree(&mut self, _tree: &mut NodeTree<()>, _node: NodeId) {
        self.log.borrow_mut().push(format!("enter {}", self.label));
    }

    fn ready(&mut self, _tree: &mut NodeTree<()>, _node: NodeId) {
        self.log.borrow_mut().push(format!("ready {}", self.label));
    }

    fn process(&mut self, _tree: &mut NodeTree<()>, _node: NodeId, _dt: f32) {
        self.log.borrow_mut().push(format!("process {}", self.label));
    }

    fn exit_tree(&mut self, _tree: &mut NodeTree<()>, _node: NodeId) {
        self.log.borrow_mut().push(format!("exit {}", self.label));
    }
}

fn recorded(tree: &mut NodeTree<()>, label: &'static str, log: &Log) -> NodeId {
    let id = tree.create(label, ());
    tree.set_script(
        id,
        Recorder {
            label,
            log: Rc::clone(log),
        },
    )
    .expect("fresh node");
    id
}

fn drain(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

#[test]
fn root_is_live_and_immutable() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    assert!(tree.is_inside_tree(root));
    assert!(tree.is_ready(root));
    assert_eq!(tree.name(root), Some("Root"));
    assert_eq!(tree.destroy(root), Err(NodeError::RootImmutable));
    let other = tree.create("other", ());
    assert_eq!(tree.add_child(other, root), Err(NodeError::RootImmutable));
}

#[test]
fn lifecycle_runs_enter_top_down_and_ready_bottom_up() {
    let log = Log::default();
    let mut tree: NodeTree<()> = NodeTree::new(());
    let a = recorded(&mut tree, "a", &log);
    let b = recorded(&mut tree, "b", &log);
    let c = recorded(&mut tree, "c", &log);
    tree.add_child(a, b).unwrap();
    tree.add_child(b, c).unwrap();
    assert!(drain(&log).is_empty(), "detached subtrees stay dormant");

    tree.add_child(tree.root(), a).unwrap();
    assert_eq!(
        drain(&log),
        vec!["enter a", "enter b", "enter c", "ready c", "ready b", "ready a"]
    );
    assert!(tree.is_ready(a) && tree.is_ready(c));

    tree.detach(a).unwrap();
    assert_eq!(drain(&log), vec!["exit c", "exit b", "exit a"]);
    assert!(!tree.is_inside_tree(b));
    assert!(!tree.is_ready(b));
}

#[test]
fn ready_fires_once_per_attachment() {
    let log = Log::default();
    let mut tree: NodeTree<()> = NodeTree::new(());
    let a = recorded(&mut tree, "a", &log);
    let root = tree.root();
    tree.add_child(root, a).unwrap();
    tree.detach(a).unwrap();
    tree.add_child(root, a).unwrap();
    assert_eq!(
        drain(&log),
        vec!["enter a", "ready a", "exit a", "enter a", "ready a"]
    );
}

#[test]
fn reparenting_live_node_exits_then_enters() {
    let log = Log::default();
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let first = tree.create("first", ());
    let second = tree.create("second", ());
    tree.add_child(root, first).unwrap();
    tree.add_child(root, second).unwrap();
    let child = recorded(&mut tree, "child", &log);
    tree.add_child(first, child).unwrap();
    drain(&log);

    tree.add_child(second, child).unwrap();
    assert_eq!(tree.parent(child), Some(second));
    assert!(tree.children(first).is_empty());
    assert_eq!(tree.children(second), &[child]);
    assert_eq!(drain(&log), vec!["exit child", "enter child", "ready child"]);
}

#[test]
fn cycles_are_rejected() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let a = tree.create("a", ());
    let b = tree.create("b", ());
    tree.add_child(a, b).unwrap();
    assert_eq!(
        tree.add_child(b, a),
        Err(NodeError::Cycle {
            parent: b,
            child: a
        })
    );
    assert_eq!(
        tree.add_child(a, a),
        Err(NodeError::Cycle {
            parent: a,
            child: a
        })
    );
    assert_eq!(tree.parent(b), Some(a));
    assert_eq!(tree.parent(a), None);
}

#[test]
fn insert_and_move_keep_order() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = tree.create("a", ());
    let b = tree.create("b", ());
    let c = tree.create("c", ());
    tree.add_child(root, a).unwrap();
    tree.add_child(root, b).unwrap();
    tree.insert_child(root, 0, c).unwrap();
    assert_eq!(tree.children(root), &[c, a, b]);

    tree.move_child(root, c, 10).unwrap();
    assert_eq!(tree.children(root), &[a, b, c]);
    assert_eq!(tree.child_index(root, b), Some(1));

    tree.insert_child(root, 0, b).unwrap();
    assert_eq!(tree.children(root), &[b, a, c]);
}

#[test]
fn remove_child_requires_the_right_parent() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = tree.create("a", ());
    let b = tree.create("b", ());
    tree.add_child(root, a).unwrap();
    assert_eq!(tree.remove_child(b, a), Err(NodeError::Missing { id: a }));
    tree.remove_child(root, a).unwrap();
    assert_eq!(tree.parent(a), None);
    assert!(tree.contains(a), "removal keeps the node alive");
}

#[test]
fn destroy_frees_subtree_and_invalidates_ids() {
    let log = Log::default();
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = recorded(&mut tree, "a", &log);
    let b = recorded(&mut tree, "b", &log);
    tree.add_child(root, a).unwrap();
    tree.add_child(a, b).unwrap();
    drain(&log);

    let freed = tree.destroy(a).unwrap();
    assert_eq!(freed, vec![a, b]);
    assert_eq!(drain(&log), vec!["exit b", "exit a"]);
    assert!(!tree.contains(a));
    assert!(!tree.contains(b));
    assert!(tree.children(root).is_empty());

    let fresh = tree.create("fresh", ());
    assert_ne!(fresh, a);
    assert!(tree.payload(a).is_none());
    assert_eq!(tree.add_child(root, b), Err(NodeError::Missing { id: b }));
}

#[test]
fn find_child_direct_and_recursive() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let panel = tree.create("Panel", ());
    let button = tree.create("Button", ());
    tree.add_child(root, panel).unwrap();
    tree.add_child(panel, button).unwrap();

    assert_eq!(tree.find_child(root, "Panel", false), Some(panel));
    assert_eq!(tree.find_child(root, "Button", false), None);
    assert_eq!(tree.find_child(root, "Button", true), Some(button));
    assert_eq!(tree.find_child(root, "Root", true), None);
}

#[test]
fn groups_are_collected_in_tree_order() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = tree.create("a", ());
    let b = tree.create("b", ());
    let orphan = tree.create("orphan", ());
    tree.add_child(root, a).unwrap();
    tree.add_child(a, b).unwrap();
    for id in [b, a, orphan] {
        tree.add_to_group(id, "enemies");
    }
    assert_eq!(tree.nodes_in_group("enemies"), vec![a, b]);

    tree.remove_from_group(a, "enemies");
    assert!(!tree.is_in_group(a, "enemies"));
    assert_eq!(tree.nodes_in_group("enemies"), vec![b]);
}

#[test]
fn process_skips_hidden_subtrees_and_disabled_nodes() {
    let log = Log::default();
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = recorded(&mut tree, "a", &log);
    let b = recorded(&mut tree, "b", &log);
    let c = recorded(&mut tree, "c", &log);
    tree.add_child(root, a).unwrap();
    tree.add_child(a, b).unwrap();
    tree.add_child(root, c).unwrap();
    drain(&log);

    tree.process(0.016);
    assert_eq!(drain(&log), vec!["process a", "process b", "process c"]);

    tree.set_visible(a, false);
    tree.set_process_enabled(c, false);
    tree.process(0.016);
    assert!(drain(&log).is_empty());
    assert!(!tree.is_visible_in_tree(b));
    assert!(tree.is_visible(b));
}

#[test]
fn structure_changes_report_touched_parents() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = tree.create("a", ());
    let b = tree.create("b", ());
    tree.add_child(root, a).unwrap();
    tree.add_child(a, b).unwrap();
    let mut changed = tree.take_structure_changes();
    changed.sort();
    let mut expected = vec![root, a];
    expected.sort();
    assert_eq!(changed, expected);
    assert!(tree.take_structure_changes().is_empty());

    assert!(tree.set_visible(b, false));
    assert!(!tree.set_visible(b, false));
    assert_eq!(tree.take_structure_changes(), vec![a]);
}

struct SelfDestruct;

impl NodeScript<()> for SelfDestruct {
    fn process(&mut self, tree: &mut NodeTree<()>, node: NodeId, _dt: f32) {
        tree.destroy(node).expect("node exists during its own hook");
    }
}

#[test]
fn hook_may_destroy_its_own_node() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let doomed = tree.create("doomed", ());
    tree.set_script(doomed, SelfDestruct).unwrap();
    tree.add_child(root, doomed).unwrap();
    tree.process(0.1);
    assert!(!tree.contains(doomed));
    assert!(tree.children(root).is_empty());
}

#[test]
fn dump_tree_indents_children() {
    let mut tree: NodeTree<()> = NodeTree::new(());
    let root = tree.root();
    let a = tree.create("Menu", ());
    tree.add_child(root, a).unwrap();
    tree.set_visible(a, false);
    let dump = tree.dump_tree();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Root"));
    assert!(lines[1].starts_with("  Menu"));
    assert!(lines[1].ends_with("(hidden)"));
}
