use super::*;
use crate::event::{Key, Modifiers, MouseButton};
use crate::resources::UiResources;
use crate::signal::Signal;
use trellis_core::NodeTree;
use trellis_ui_graphics::{EdgeInsets, Point};
use trellis_ui_layout::{BoxAlignment, StretchMode};

fn node_ids(count: usize) -> Vec<NodeId> {
    let mut tree: NodeTree<()> = NodeTree::new(());
    (0..count)
        .map(|index| tree.create(format!("node{index}"), ()))
        .collect()
}

fn child(id: NodeId, name: &str, width: f32, height: f32) -> ChildInfo {
    ChildInfo {
        id,
        name: name.to_owned(),
        minimum: Size::new(width, height),
        visible: true,
        horizontal: SizeFlags::FILL,
        vertical: SizeFlags::FILL,
    }
}

fn input_context<'a>(resources: &'a UiResources, rect: Rect, pointer: Point) -> InputContext<'a> {
    InputContext {
        measure: resources.measure_context(),
        rect,
        pointer,
        hovered: true,
        focused: false,
        pressed: false,
        already_handled: false,
    }
}

fn rects(placements: &[Placement]) -> Vec<Rect> {
    placements.iter().map(|placement| placement.rect).collect()
}

#[test]
fn box_shares_leftover_by_stretch_ratio() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(3);
    let mut children = vec![
        child(ids[0], "a", 50.0, 10.0),
        child(ids[1], "b", 50.0, 10.0),
        child(ids[2], "c", 50.0, 10.0),
    ];
    children[0].horizontal = SizeFlags::EXPAND_FILL;
    children[1].horizontal = SizeFlags::EXPAND_FILL.with_stretch_ratio(2.0);

    let mut row = BoxContainer::horizontal().with_separation(0.0);
    let placed = row.sort_children(Size::new(300.0, 40.0), &children, &cx);
    assert_eq!(
        rects(&placed),
        vec![
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(100.0, 0.0, 150.0, 40.0),
            Rect::new(250.0, 0.0, 50.0, 40.0),
        ]
    );
    assert_eq!(row.minimum_size(&children, &cx), Size::new(150.0, 10.0));
}

#[test]
fn box_aligns_group_and_shrunk_children() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(2);
    let mut children = vec![child(ids[0], "a", 40.0, 50.0), child(ids[1], "b", 40.0, 50.0)];
    children[1].horizontal = SizeFlags::shrink(BoxAlignment::Center);

    let mut column = BoxContainer::vertical()
        .with_separation(0.0)
        .with_alignment(BoxAlignment::End);
    let placed = column.sort_children(Size::new(100.0, 300.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(0.0, 200.0, 100.0, 50.0));
    assert_eq!(placed[1].rect, Rect::new(30.0, 250.0, 40.0, 50.0));
}

#[test]
fn box_skips_hidden_children() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(3);
    let mut children = vec![
        child(ids[0], "a", 10.0, 20.0),
        child(ids[1], "b", 10.0, 20.0),
        child(ids[2], "c", 10.0, 20.0),
    ];
    children[1].visible = false;

    let mut column = BoxContainer::vertical().with_separation(5.0);
    let placed = column.sort_children(Size::new(10.0, 100.0), &children, &cx);
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[1].id, ids[2]);
    assert_eq!(placed[1].rect.y, 25.0);
    assert_eq!(column.minimum_size(&children, &cx).height, 45.0);
}

#[test]
fn grid_places_cells_row_major() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(6);
    let children: Vec<ChildInfo> = ids
        .iter()
        .map(|&id| child(id, "cell", 50.0, 50.0))
        .collect();

    let mut grid = GridContainer::new(4).with_spacing(4.0);
    let placed = grid.sort_children(Size::new(400.0, 400.0), &children, &cx);
    assert_eq!(placed[5].rect, Rect::new(54.0, 54.0, 50.0, 50.0));
    assert_eq!(placed[3].rect.origin(), Point::new(162.0, 0.0));
    assert_eq!(grid.minimum_size(&children, &cx), Size::new(212.0, 104.0));
}

#[test]
fn split_clamps_offset_and_collapses_first_pane() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(2);
    let children = vec![child(ids[0], "left", 0.0, 0.0), child(ids[1], "right", 0.0, 0.0)];

    let mut split = SplitContainer::horizontal().with_split_offset(1000.0);
    split.minimum_split_offset = 20.0;
    let placed = split.sort_children(Size::new(300.0, 100.0), &children, &cx);
    assert_eq!(split.applied_offset(), 272.0);
    assert_eq!(placed[0].rect, Rect::new(0.0, 0.0, 272.0, 100.0));
    assert_eq!(placed[1].rect, Rect::new(280.0, 0.0, 20.0, 100.0));
    assert_eq!(placed[0].visible, Some(true));

    split.collapsed = true;
    let placed = split.sort_children(Size::new(300.0, 100.0), &children, &cx);
    assert_eq!(placed[0].visible, Some(false));
    assert_eq!(placed[1].rect, Rect::new(0.0, 0.0, 300.0, 100.0));
}

#[test]
fn split_drag_moves_divider() {
    let resources = UiResources::default();
    let ids = node_ids(2);
    let children = vec![child(ids[0], "left", 0.0, 0.0), child(ids[1], "right", 0.0, 0.0)];
    let rect = Rect::new(0.0, 0.0, 300.0, 100.0);

    let mut split = SplitContainer::horizontal().with_split_offset(100.0);
    split.sort_children(rect.size(), &children, &resources.measure_context());

    let press = EventKind::MouseButtonPressed {
        button: MouseButton::Left,
    };
    let response = split.gui_input(&press, &input_context(&resources, rect, Point::new(102.0, 50.0)));
    assert!(response.handled);
    assert!(split.is_dragging());

    let moved = EventKind::MouseMoved {
        position: Point::new(152.0, 50.0),
    };
    let response = split.gui_input(&moved, &input_context(&resources, rect, Point::new(152.0, 50.0)));
    assert!(response.queue_sort);
    assert_eq!(response.signals.as_slice(), &[Signal::Dragged(150.0)]);
    assert_eq!(split.split_offset(), 150.0);

    let release = EventKind::MouseButtonReleased {
        button: MouseButton::Left,
    };
    split.gui_input(&release, &input_context(&resources, rect, Point::new(152.0, 50.0)));
    assert!(!split.is_dragging());
}

#[test]
fn split_ignores_presses_off_the_dragger() {
    let resources = UiResources::default();
    let ids = node_ids(2);
    let children = vec![child(ids[0], "left", 0.0, 0.0), child(ids[1], "right", 0.0, 0.0)];
    let rect = Rect::new(0.0, 0.0, 300.0, 100.0);
    let mut split = SplitContainer::horizontal().with_split_offset(100.0);
    split.sort_children(rect.size(), &children, &resources.measure_context());

    let press = EventKind::MouseButtonPressed {
        button: MouseButton::Left,
    };
    let response = split.gui_input(&press, &input_context(&resources, rect, Point::new(40.0, 50.0)));
    assert!(!response.handled);
    assert!(!split.is_dragging());
}

#[test]
fn scroll_clamps_into_overflow() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(1);
    let children = vec![child(ids[0], "content", 80.0, 400.0)];

    let mut scroll = ScrollContainer::new();
    let placed = scroll.sort_children(Size::new(100.0, 100.0), &children, &cx);
    assert_eq!(scroll.scrollbars_visible(), (false, true));
    assert_eq!(scroll.viewport(), Size::new(88.0, 100.0));
    assert_eq!(placed[0].rect, Rect::new(0.0, 0.0, 88.0, 400.0));
    assert_eq!(scroll.max_scroll(), Size::new(0.0, 300.0));

    scroll.set_v_scroll(1000.0);
    assert_eq!(scroll.scroll().y, 300.0);
    scroll.set_v_scroll(-5.0);
    assert_eq!(scroll.scroll().y, 0.0);

    scroll.set_v_scroll(40.0);
    let placed = scroll.sort_children(Size::new(100.0, 100.0), &children, &cx);
    assert_eq!(placed[0].rect.origin(), Point::new(0.0, -40.0));
}

#[test]
fn scroll_wheel_steps_and_stops_at_limits() {
    let resources = UiResources::default();
    let ids = node_ids(1);
    let children = vec![child(ids[0], "content", 80.0, 130.0)];
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut scroll = ScrollContainer::new();
    scroll.sort_children(rect.size(), &children, &resources.measure_context());

    let wheel = |dy: f32| EventKind::MouseScrolled {
        delta: Point::new(0.0, dy),
        modifiers: Modifiers::NONE,
    };
    let inside = Point::new(50.0, 50.0);

    let response = scroll.gui_input(&wheel(1.0), &input_context(&resources, rect, inside));
    assert!(!response.handled);

    let response = scroll.gui_input(&wheel(-1.0), &input_context(&resources, rect, inside));
    assert!(response.handled);
    assert_eq!(response.signals.as_slice(), &[Signal::Scrolled(Point::new(0.0, 20.0))]);

    scroll.gui_input(&wheel(-1.0), &input_context(&resources, rect, inside));
    assert_eq!(scroll.scroll().y, 30.0);
    let response = scroll.gui_input(&wheel(-1.0), &input_context(&resources, rect, inside));
    assert!(!response.handled);

    let outside = Point::new(150.0, 50.0);
    let response = scroll.gui_input(&wheel(1.0), &input_context(&resources, rect, outside));
    assert!(!response.handled);
}

#[test]
fn center_places_children_in_the_middle_or_corner() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(1);
    let children = vec![child(ids[0], "child", 50.0, 20.0)];

    let placed = CenterContainer::new().sort_children(Size::new(200.0, 100.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(75.0, 40.0, 50.0, 20.0));

    let placed = CenterContainer::top_left().sort_children(Size::new(200.0, 100.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(0.0, 0.0, 50.0, 20.0));
}

#[test]
fn aspect_ratio_fits_and_centers() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(1);
    let children = vec![child(ids[0], "child", 0.0, 0.0)];

    let mut aspect = AspectRatioContainer::new(2.0);
    let placed = aspect.sort_children(Size::new(200.0, 200.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(0.0, 50.0, 200.0, 100.0));

    aspect.stretch_mode = StretchMode::HeightControlsWidth;
    aspect.alignment_horizontal = BoxAlignment::Begin;
    let placed = aspect.sort_children(Size::new(500.0, 100.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(0.0, 0.0, 200.0, 100.0));
}

#[test]
fn margin_container_insets_children() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(1);
    let children = vec![child(ids[0], "child", 20.0, 20.0)];

    let mut margin = MarginContainer::new(EdgeInsets::uniform(10.0));
    let placed = margin.sort_children(Size::new(100.0, 50.0), &children, &cx);
    assert_eq!(placed[0].rect, Rect::new(10.0, 10.0, 80.0, 30.0));
    assert_eq!(margin.minimum_size(&children, &cx), Size::new(40.0, 40.0));
}

#[test]
fn tab_shows_only_current_child_below_strip() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(3);
    let children = vec![
        child(ids[0], "General", 40.0, 60.0),
        child(ids[1], "Audio", 80.0, 30.0),
        child(ids[2], "Video", 10.0, 10.0),
    ];

    let mut tabs = TabContainer::new();
    let placed = tabs.sort_children(Size::new(300.0, 200.0), &children, &cx);
    assert_eq!(tabs.tab_count(), 3);
    assert_eq!(tabs.tab_title(1), Some("Audio"));
    for (index, placement) in placed.iter().enumerate() {
        assert_eq!(placement.rect, Rect::new(0.0, 28.0, 300.0, 172.0));
        assert_eq!(placement.visible, Some(index == 0));
    }
    assert_eq!(tabs.minimum_size(&children, &cx), Size::new(80.0, 88.0));
}

#[test]
fn tab_clicks_select_enabled_tabs() {
    let resources = UiResources::default();
    let ids = node_ids(3);
    let children = vec![
        child(ids[0], "One", 0.0, 0.0),
        child(ids[1], "Two", 0.0, 0.0),
        child(ids[2], "Three", 0.0, 0.0),
    ];
    let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
    let mut tabs = TabContainer::new();
    tabs.sort_children(rect.size(), &children, &resources.measure_context());
    tabs.set_tab_disabled(1, true);

    let press = EventKind::MouseButtonPressed {
        button: MouseButton::Left,
    };
    let response = tabs.gui_input(&press, &input_context(&resources, rect, Point::new(250.0, 10.0)));
    assert_eq!(response.signals.as_slice(), &[Signal::TabChanged(2)]);
    assert!(response.queue_sort);
    assert_eq!(tabs.current_tab(), 2);

    let response = tabs.gui_input(&press, &input_context(&resources, rect, Point::new(150.0, 10.0)));
    assert!(response.handled);
    assert!(response.signals.is_empty());
    assert_eq!(tabs.current_tab(), 2);

    let response = tabs.gui_input(&press, &input_context(&resources, rect, Point::new(150.0, 100.0)));
    assert!(!response.handled);
}

#[test]
fn tab_arrow_keys_skip_disabled_tabs() {
    let resources = UiResources::default();
    let ids = node_ids(3);
    let children: Vec<ChildInfo> = ids.iter().map(|&id| child(id, "tab", 0.0, 0.0)).collect();
    let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
    let mut tabs = TabContainer::new();
    tabs.sort_children(rect.size(), &children, &resources.measure_context());
    tabs.set_tab_disabled(1, true);

    let mut cx = input_context(&resources, rect, Point::ZERO);
    cx.focused = true;
    let right = EventKind::KeyPressed {
        key: Key::Right,
        modifiers: Modifiers::NONE,
    };
    tabs.gui_input(&right, &cx);
    assert_eq!(tabs.current_tab(), 2);
    tabs.gui_input(&right, &cx);
    assert_eq!(tabs.current_tab(), 0);
}

#[test]
fn flow_wraps_lines_and_reports_minimum_change() {
    let resources = UiResources::default();
    let cx = resources.measure_context();
    let ids = node_ids(3);
    let children: Vec<ChildInfo> = ids
        .iter()
        .map(|&id| child(id, "chip", 40.0, 10.0))
        .collect();

    let mut flow = FlowContainer::horizontal();
    let placed = flow.sort_children(Size::new(100.0, 100.0), &children, &cx);
    assert_eq!(placed[1].rect.origin(), Point::new(44.0, 0.0));
    assert_eq!(placed[2].rect.origin(), Point::new(0.0, 14.0));
    assert_eq!(flow.cross_extent(), 24.0);
    assert!(flow.take_minimum_changed());
    assert!(!flow.take_minimum_changed());
    assert_eq!(flow.minimum_size(&children, &cx), Size::new(40.0, 24.0));

    flow.sort_children(Size::new(100.0, 100.0), &children, &cx);
    assert!(!flow.take_minimum_changed());
}

#[test]
fn queue_sort_is_idempotent() {
    let mut container = Container::new(BoxContainer::vertical());
    container.finish_sort(None);
    assert!(!container.is_sort_pending());
    container.queue_sort();
    container.queue_sort();
    assert!(container.is_sort_pending());
    container.finish_sort(None);
    assert!(!container.is_sort_pending());
}
