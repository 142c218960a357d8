use super::*;
use crate::containers::{BoxContainer, ScrollContainer};
use crate::widgets::Label;
use std::cell::RefCell;

fn tree_on_screen(width: f32, height: f32) -> UiTree {
    let mut tree = ui_tree(UiResources::default());
    tree.resources_mut()
        .set_screen_size(Size::new(width, height));
    tree
}

fn attach(tree: &mut UiTree, parent: NodeId, name: &str, control: Control) -> NodeId {
    let id = tree.create_control(name, control);
    tree.add_child(parent, id).unwrap();
    id
}

fn spacer(height: f32) -> Control {
    Control::bare().with_custom_minimum_size(Size::new(0.0, height))
}

#[test]
fn full_rect_control_tracks_screen() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let panel = attach(
        &mut tree,
        root,
        "panel",
        Control::panel().with_preset(LayoutPreset::FullRect),
    );

    tree.layout_pass();
    assert_eq!(tree.global_rect(panel), Some(Rect::new(0.0, 0.0, 800.0, 600.0)));

    tree.resources_mut()
        .set_screen_size(Size::new(1024.0, 768.0));
    tree.layout_pass();
    assert_eq!(tree.control(panel).unwrap().size(), Size::new(1024.0, 768.0));
}

#[test]
fn centered_child_resolves_against_parent_control() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let parent = attach(
        &mut tree,
        root,
        "parent",
        Control::panel().with_rect(Rect::new(20.0, 10.0, 400.0, 200.0)),
    );
    let child = attach(
        &mut tree,
        parent,
        "child",
        Control::bare()
            .with_size(Size::new(100.0, 50.0))
            .with_preset(LayoutPreset::Center),
    );

    tree.layout_pass();
    assert_eq!(tree.control(child).unwrap().position(), Point::new(150.0, 75.0));
    assert_eq!(tree.global_position(child), Point::new(170.0, 85.0));
}

#[test]
fn set_position_survives_anchor_resolution() {
    let mut tree = tree_on_screen(640.0, 480.0);
    let root = tree.root();
    let id = attach(
        &mut tree,
        root,
        "box",
        Control::bare()
            .with_size(Size::new(50.0, 50.0))
            .with_preset(LayoutPreset::BottomRight),
    );
    tree.layout_pass();
    assert_eq!(tree.control(id).unwrap().position(), Point::new(590.0, 430.0));

    tree.set_position(id, Point::new(100.0, 120.0));
    tree.layout_pass();
    assert_eq!(tree.control(id).unwrap().position(), Point::new(100.0, 120.0));

    tree.set_anchors_preset(id, LayoutPreset::FullRect, true);
    tree.layout_pass();
    assert_eq!(
        tree.control(id).unwrap().rect(),
        Rect::new(100.0, 120.0, 50.0, 50.0)
    );
}

#[test]
fn mixed_anchors_size_both_axes_from_the_parent() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let parent = attach(
        &mut tree,
        root,
        "parent",
        Control::panel().with_rect(Rect::new(0.0, 0.0, 200.0, 100.0)),
    );
    let child = attach(
        &mut tree,
        parent,
        "child",
        Control::bare().with_size(Size::new(50.0, 30.0)),
    );

    tree.set_anchors(child, Anchors::new(0.0, 0.0, 1.0, 0.0), EdgeInsets::ZERO);
    tree.layout_pass();
    assert_eq!(
        tree.control(child).unwrap().rect(),
        Rect::new(0.0, 0.0, 200.0, 0.0)
    );

    tree.set_size(child, Size::new(200.0, 30.0));
    tree.set_anchors_preset(child, LayoutPreset::BottomWide, false);
    tree.layout_pass();
    assert_eq!(
        tree.control(child).unwrap().rect(),
        Rect::new(0.0, 70.0, 200.0, 30.0)
    );

    tree.set_size(parent, Size::new(300.0, 150.0));
    tree.layout_pass();
    assert_eq!(
        tree.control(child).unwrap().rect(),
        Rect::new(0.0, 120.0, 300.0, 30.0)
    );
}

#[test]
fn vertical_box_stacks_children_with_separation() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let column = attach(
        &mut tree,
        root,
        "column",
        Control::container(BoxContainer::vertical().with_separation(10.0))
            .with_size(Size::new(200.0, 300.0)),
    );
    let children: Vec<NodeId> = [50.0, 80.0, 40.0]
        .into_iter()
        .enumerate()
        .map(|(index, height)| attach(&mut tree, column, &format!("item{index}"), spacer(height)))
        .collect();

    assert_eq!(tree.layout_pass(), 1);
    let rects: Vec<Rect> = children
        .iter()
        .map(|&id| tree.control(id).unwrap().rect())
        .collect();
    assert_eq!(rects[0], Rect::new(0.0, 0.0, 200.0, 50.0));
    assert_eq!(rects[1], Rect::new(0.0, 60.0, 200.0, 80.0));
    assert_eq!(rects[2], Rect::new(0.0, 150.0, 200.0, 40.0));
    assert_eq!(tree.minimum_size(column), Size::new(0.0, 190.0));
}

#[test]
fn queued_sorts_run_once_per_pass() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let column = attach(
        &mut tree,
        root,
        "column",
        Control::container(BoxContainer::vertical()).with_size(Size::new(100.0, 100.0)),
    );
    attach(&mut tree, column, "a", spacer(10.0));
    let sorts = Rc::new(RefCell::new(0));
    let counter = sorts.clone();
    tree.connect(column, SignalKind::SortChildren, move |_, _, _| {
        *counter.borrow_mut() += 1;
    });

    tree.layout_pass();
    assert_eq!(*sorts.borrow(), 1);
    assert_eq!(tree.layout_pass(), 0);

    tree.queue_sort(column);
    tree.queue_sort(column);
    tree.queue_sort(column);
    assert!(tree.is_sort_pending(column));
    assert_eq!(tree.layout_pass(), 1);
    assert_eq!(*sorts.borrow(), 2);
}

#[test]
fn open_frame_defers_a_second_sort_of_the_same_container() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let column = attach(
        &mut tree,
        root,
        "column",
        Control::container(BoxContainer::vertical()).with_size(Size::new(100.0, 100.0)),
    );
    attach(&mut tree, column, "a", spacer(10.0));

    tree.begin_layout_frame();
    assert_eq!(tree.layout_pass(), 1);
    tree.queue_sort(column);
    assert_eq!(tree.layout_pass(), 0);
    assert!(tree.is_sort_pending(column));
    tree.end_layout_frame();

    tree.begin_layout_frame();
    assert_eq!(tree.layout_pass(), 1);
    assert!(!tree.is_sort_pending(column));
    tree.end_layout_frame();
}

#[test]
fn nested_containers_sort_parent_first_in_one_pass() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let outer = attach(
        &mut tree,
        root,
        "outer",
        Control::container(BoxContainer::vertical().with_separation(0.0))
            .with_size(Size::new(300.0, 200.0)),
    );
    let inner = attach(
        &mut tree,
        outer,
        "inner",
        Control::container(BoxContainer::horizontal().with_separation(0.0))
            .with_size_flags(SizeFlags::FILL, SizeFlags::EXPAND_FILL),
    );
    let cell = attach(
        &mut tree,
        inner,
        "cell",
        Control::bare().with_size_flags(SizeFlags::EXPAND_FILL, SizeFlags::FILL),
    );

    assert_eq!(tree.layout_pass(), 2);
    assert_eq!(tree.control(inner).unwrap().size(), Size::new(300.0, 200.0));
    assert_eq!(tree.control(cell).unwrap().size(), Size::new(300.0, 200.0));
}

#[test]
fn widget_edits_queue_enclosing_sorts() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let column = attach(
        &mut tree,
        root,
        "column",
        Control::container(BoxContainer::vertical()).with_size(Size::new(200.0, 100.0)),
    );
    let label = attach(&mut tree, column, "label", Control::label("ab"));
    tree.layout_pass();
    assert_eq!(tree.control(label).unwrap().size().height, 16.0);

    tree.with_widget::<Label, _>(label, |label| label.text = "abcdef".into())
        .unwrap();
    assert!(tree.is_sort_pending(column));
    assert_eq!(tree.minimum_size(label), Size::new(48.0, 16.0));

    let mismatch = tree.with_layout::<BoxContainer, _>(label, |_| ());
    assert_eq!(
        mismatch,
        Err(NodeError::TypeMismatch {
            id: label,
            expected: "BoxContainer"
        })
    );
}

#[test]
fn custom_minimum_wins_over_content() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let label = attach(&mut tree, root, "label", Control::label("abc"));
    assert_eq!(tree.minimum_size(label), Size::new(24.0, 16.0));
    tree.set_custom_minimum_size(label, Size::new(10.0, 40.0));
    assert_eq!(tree.minimum_size(label), Size::new(24.0, 40.0));
}

#[test]
fn hidden_children_leave_box_layout() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let column = attach(
        &mut tree,
        root,
        "column",
        Control::container(BoxContainer::vertical().with_separation(0.0))
            .with_size(Size::new(100.0, 100.0)),
    );
    let first = attach(&mut tree, column, "first", spacer(30.0));
    let second = attach(&mut tree, column, "second", spacer(30.0));
    tree.layout_pass();
    assert_eq!(tree.control(second).unwrap().position().y, 30.0);

    tree.set_visible(first, false);
    assert_eq!(tree.layout_pass(), 1);
    assert_eq!(tree.control(second).unwrap().position().y, 0.0);
}

#[test]
fn hit_test_prefers_topmost_child() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let panel = attach(
        &mut tree,
        root,
        "panel",
        Control::panel().with_rect(Rect::new(100.0, 100.0, 100.0, 100.0)),
    );
    let button = attach(
        &mut tree,
        panel,
        "button",
        Control::button("Go").with_rect(Rect::new(10.0, 10.0, 40.0, 20.0)),
    );
    tree.layout_pass();

    assert_eq!(tree.control_at(Point::new(105.0, 105.0)), Some(panel));
    assert_eq!(tree.control_at(Point::new(111.0, 111.0)), Some(button));
    assert_eq!(tree.control_at(Point::new(50.0, 50.0)), None);

    tree.control_mut(panel).unwrap().mouse_filter = false;
    assert_eq!(tree.control_at(Point::new(105.0, 105.0)), None);

    tree.set_visible(panel, false);
    assert_eq!(tree.control_at(Point::new(111.0, 111.0)), None);
}

#[test]
fn clipped_children_are_not_hit_outside_the_clip() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let scroll = attach(
        &mut tree,
        root,
        "scroll",
        Control::container(ScrollContainer::new()).with_size(Size::new(100.0, 100.0)),
    );
    let content = attach(
        &mut tree,
        scroll,
        "content",
        Control::panel().with_custom_minimum_size(Size::new(80.0, 400.0)),
    );
    tree.layout_pass();

    assert_eq!(tree.control_at(Point::new(10.0, 50.0)), Some(content));
    assert_eq!(tree.control_at(Point::new(10.0, 150.0)), None);
}

#[test]
fn resized_signal_fires_on_size_change_only() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let id = attach(&mut tree, root, "panel", Control::panel());
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let seen = sizes.clone();
    tree.connect(id, SignalKind::Resized, move |_, _, signal| {
        if let Signal::Resized(size) = signal {
            seen.borrow_mut().push(*size);
        }
    });

    tree.set_size(id, Size::new(30.0, 40.0));
    tree.set_size(id, Size::new(30.0, 40.0));
    tree.set_position(id, Point::new(5.0, 5.0));
    assert_eq!(*sizes.borrow(), vec![Size::new(30.0, 40.0)]);
}

#[test]
fn handlers_may_mutate_the_tree() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let button = attach(&mut tree, root, "button", Control::button("Hide"));
    let target = attach(&mut tree, root, "target", Control::panel());
    tree.connect(button, SignalKind::Pressed, move |tree, _, _| {
        tree.set_visible(target, false);
        tree.request_focus(target);
    });

    tree.emit(button, Signal::Pressed);
    assert!(!tree.is_visible(target));
    assert_eq!(tree.resources().focus_requests, vec![target]);
}

#[test]
fn focus_chain_skips_hidden_and_click_only_controls() {
    let mut tree = tree_on_screen(800.0, 600.0);
    let root = tree.root();
    let first = attach(&mut tree, root, "first", Control::button("1"));
    let group = tree.create_node("group");
    tree.add_child(root, group).unwrap();
    let nested = attach(&mut tree, group, "nested", Control::button("2"));
    attach(
        &mut tree,
        root,
        "click",
        Control::button("3").with_focus_mode(FocusMode::Click),
    );
    let hidden = attach(&mut tree, root, "hidden", Control::button("4"));
    tree.set_visible(hidden, false);

    assert_eq!(tree.focus_chain(), vec![first, nested]);
}
