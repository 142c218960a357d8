//! The UI node tree: payload type, tree alias and the control-aware
//! operations layered on top of [`NodeTree`].

use crate::containers::{ChildInfo, LayoutKind};
use crate::control::{Control, FocusMode, SizeFlags};
use crate::resources::UiResources;
use crate::signal::{Signal, SignalKind};
use crate::widgets::{CustomWidget, WidgetKind};
use std::rc::Rc;
use trellis_core::{NodeError, NodeId, NodeTree};
use trellis_ui_graphics::{EdgeInsets, Point, Rect, Size};
use trellis_ui_layout::{margins_for_rect, resolve_anchors, Anchors, LayoutPreset};

/// Payload of every node in a [`UiTree`].
#[derive(Debug, Default)]
pub enum UiNode {
    /// Plain grouping node without geometry. Children of a plain node
    /// anchor against the screen.
    #[default]
    Node,
    Control(Control),
}

impl UiNode {
    pub fn as_control(&self) -> Option<&Control> {
        match self {
            UiNode::Control(control) => Some(control),
            UiNode::Node => None,
        }
    }

    pub fn as_control_mut(&mut self) -> Option<&mut Control> {
        match self {
            UiNode::Control(control) => Some(control),
            UiNode::Node => None,
        }
    }
}

impl From<Control> for UiNode {
    fn from(control: Control) -> Self {
        UiNode::Control(control)
    }
}

pub type UiTree = NodeTree<UiNode, UiResources>;

/// Creates an empty UI tree with a plain root node.
pub fn ui_tree(resources: UiResources) -> UiTree {
    NodeTree::with_resources(UiNode::Node, resources)
}

/// Control-aware operations on a [`UiTree`].
///
/// Geometry setters keep anchors and margins consistent with the new rect,
/// so the next anchor resolution reproduces it. Setters that change what a
/// container's layout depends on queue the affected sorts.
pub trait UiTreeExt {
    fn create_control(&mut self, name: impl Into<String>, control: Control) -> NodeId;
    fn create_node(&mut self, name: impl Into<String>) -> NodeId;

    fn control(&self, id: NodeId) -> Option<&Control>;
    fn control_mut(&mut self, id: NodeId) -> Option<&mut Control>;

    fn widget<T: WidgetKind>(&self, id: NodeId) -> Result<&T, NodeError>;
    /// Mutates the widget and notifies the enclosing containers that its
    /// minimum size may have changed.
    fn with_widget<T: WidgetKind, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError>;
    fn layout<T: LayoutKind>(&self, id: NodeId) -> Result<&T, NodeError>;
    /// Mutates a container's policy and queues its sort.
    fn with_layout<T: LayoutKind, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError>;
    fn with_custom<T: CustomWidget, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError>;

    fn queue_sort(&mut self, id: NodeId);
    fn is_sort_pending(&self, id: NodeId) -> bool;
    fn notify_minimum_size_changed(&mut self, id: NodeId);

    fn minimum_size(&self, id: NodeId) -> Size;
    fn combined_minimum_size(&self, id: NodeId) -> Size;
    fn child_infos(&self, id: NodeId, include_hidden: bool) -> Vec<ChildInfo>;

    /// Size the control's anchors resolve against.
    fn parent_size(&self, id: NodeId) -> Size;
    fn global_position(&self, id: NodeId) -> Point;
    fn global_rect(&self, id: NodeId) -> Option<Rect>;

    fn set_position(&mut self, id: NodeId, position: Point);
    fn set_size(&mut self, id: NodeId, size: Size);
    fn set_rect(&mut self, id: NodeId, rect: Rect);
    fn set_anchors(&mut self, id: NodeId, anchors: Anchors, margins: EdgeInsets);
    fn set_anchors_preset(&mut self, id: NodeId, preset: LayoutPreset, keep_offsets: bool);
    fn set_custom_minimum_size(&mut self, id: NodeId, size: Size);
    fn set_size_flags(&mut self, id: NodeId, horizontal: SizeFlags, vertical: SizeFlags);

    fn connect(
        &mut self,
        id: NodeId,
        kind: SignalKind,
        handler: impl Fn(&mut UiTree, NodeId, &Signal) + 'static,
    );
    fn emit(&mut self, id: NodeId, signal: Signal);
    /// Asks the dispatcher to focus `id` once the current callback returns.
    fn request_focus(&mut self, id: NodeId);

    /// Re-resolves anchors of every control not owned by a container,
    /// parents before children.
    fn resolve_layout_anchors(&mut self);
    /// Runs one container's policy now and applies the placements.
    fn sort_children(&mut self, id: NodeId) -> bool;
    /// Runs every pending sort once, parents before children, and returns
    /// how many ran. Hidden subtrees are left pending, and so are
    /// containers that already sorted during the open frame.
    fn flush_sorts(&mut self) -> usize;
    /// Opens a dispatcher frame; until [`UiTreeExt::end_layout_frame`]
    /// each container sorts at most once.
    fn begin_layout_frame(&mut self);
    fn end_layout_frame(&mut self);
    /// Anchors then sorts; what the dispatcher runs before input and
    /// drawing.
    fn layout_pass(&mut self) -> usize;

    /// Topmost visible control accepting the mouse under `point`.
    fn control_at(&self, point: Point) -> Option<NodeId>;
    /// Visible controls reachable by keyboard traversal, in tree order.
    fn focus_chain(&self) -> Vec<NodeId>;
}

impl UiTreeExt for UiTree {
    fn create_control(&mut self, name: impl Into<String>, control: Control) -> NodeId {
        self.create(name, UiNode::Control(control))
    }

    fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        self.create(name, UiNode::Node)
    }

    fn control(&self, id: NodeId) -> Option<&Control> {
        self.payload(id).and_then(UiNode::as_control)
    }

    fn control_mut(&mut self, id: NodeId) -> Option<&mut Control> {
        self.payload_mut(id).and_then(UiNode::as_control_mut)
    }

    fn widget<T: WidgetKind>(&self, id: NodeId) -> Result<&T, NodeError> {
        let control = self.control(id).ok_or(NodeError::Missing { id })?;
        T::from_widget(&control.widget).ok_or(NodeError::TypeMismatch {
            id,
            expected: T::NAME,
        })
    }

    fn with_widget<T: WidgetKind, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError> {
        let control = self.control_mut(id).ok_or(NodeError::Missing { id })?;
        let widget = T::from_widget_mut(&mut control.widget).ok_or(NodeError::TypeMismatch {
            id,
            expected: T::NAME,
        })?;
        let result = f(widget);
        self.queue_sort(id);
        self.notify_minimum_size_changed(id);
        Ok(result)
    }

    fn layout<T: LayoutKind>(&self, id: NodeId) -> Result<&T, NodeError> {
        let control = self.control(id).ok_or(NodeError::Missing { id })?;
        control
            .widget
            .as_container()
            .and_then(|container| T::from_layout(container.layout()))
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: T::NAME,
            })
    }

    fn with_layout<T: LayoutKind, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError> {
        let control = self.control_mut(id).ok_or(NodeError::Missing { id })?;
        let layout = control
            .widget
            .as_container_mut()
            .and_then(|container| T::from_layout_mut(container.layout_mut()))
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: T::NAME,
            })?;
        let result = f(layout);
        self.queue_sort(id);
        self.notify_minimum_size_changed(id);
        Ok(result)
    }

    fn with_custom<T: CustomWidget, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, NodeError> {
        let control = self.control_mut(id).ok_or(NodeError::Missing { id })?;
        let custom = match &mut control.widget {
            crate::widgets::Widget::Custom(custom) => (**custom).as_any_mut().downcast_mut::<T>(),
            _ => None,
        };
        let custom = custom.ok_or(NodeError::TypeMismatch {
            id,
            expected: std::any::type_name::<T>(),
        })?;
        let result = f(custom);
        self.notify_minimum_size_changed(id);
        Ok(result)
    }

    fn queue_sort(&mut self, id: NodeId) {
        if let Some(container) = self
            .control_mut(id)
            .and_then(|control| control.widget.as_container_mut())
        {
            container.queue_sort();
        }
    }

    fn is_sort_pending(&self, id: NodeId) -> bool {
        self.control(id)
            .and_then(|control| control.widget.as_container())
            .is_some_and(|container| container.is_sort_pending())
    }

    fn notify_minimum_size_changed(&mut self, id: NodeId) {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            let Some(container) = self
                .control_mut(parent)
                .and_then(|control| control.widget.as_container_mut())
            else {
                break;
            };
            container.queue_sort();
            current = parent;
        }
    }

    fn minimum_size(&self, id: NodeId) -> Size {
        let Some(control) = self.control(id) else {
            return Size::ZERO;
        };
        let cx = self.resources().measure_context();
        let content = match control.widget.as_container() {
            Some(container) => {
                let policy = container.layout().policy();
                let children = self.child_infos(id, policy.includes_hidden_children());
                policy.minimum_size(&children, &cx)
            }
            None => control.widget.behavior().minimum_size(&cx),
        };
        content.max(control.custom_minimum_size)
    }

    fn combined_minimum_size(&self, id: NodeId) -> Size {
        match self.control(id) {
            Some(control) => {
                trellis_ui_layout::combined_minimum_size(self.minimum_size(id), control.margins)
            }
            None => Size::ZERO,
        }
    }

    fn child_infos(&self, id: NodeId, include_hidden: bool) -> Vec<ChildInfo> {
        self.children(id)
            .iter()
            .filter_map(|&child| {
                let control = self.control(child)?;
                let visible = self.is_visible(child);
                if !visible && !include_hidden {
                    return None;
                }
                Some(ChildInfo {
                    id: child,
                    name: self.name(child).unwrap_or_default().to_owned(),
                    minimum: self.combined_minimum_size(child),
                    visible,
                    horizontal: control.horizontal,
                    vertical: control.vertical,
                })
            })
            .collect()
    }

    fn parent_size(&self, id: NodeId) -> Size {
        match self.parent(id).and_then(|parent| self.control(parent)) {
            Some(parent) => parent.size,
            None => self.resources().screen_size(),
        }
    }

    fn global_position(&self, id: NodeId) -> Point {
        let mut position = Point::ZERO;
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(control) = self.control(node) {
                position += control.position;
            }
            current = self.parent(node);
        }
        position
    }

    fn global_rect(&self, id: NodeId) -> Option<Rect> {
        let size = self.control(id)?.size;
        Some(Rect::from_origin_size(self.global_position(id), size))
    }

    fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(size) = self.control(id).map(|control| control.size) {
            self.set_rect(id, Rect::from_origin_size(position, size));
        }
    }

    fn set_size(&mut self, id: NodeId, size: Size) {
        debug_assert!(
            size.width >= 0.0 && size.height >= 0.0,
            "negative size {size:?}"
        );
        if let Some(position) = self.control(id).map(|control| control.position) {
            self.set_rect(id, Rect::from_origin_size(position, size.non_negative()));
        }
    }

    fn set_rect(&mut self, id: NodeId, rect: Rect) {
        let parent = self.parent_size(id);
        let size = rect.size().non_negative();
        let Some(control) = self.control_mut(id) else {
            log::warn!("set_rect on non-control node {id:?}");
            return;
        };
        control.margins = margins_for_rect(control.anchors, parent, rect.origin(), size);
        apply_rect(self, id, rect.origin(), size);
    }

    fn set_anchors(&mut self, id: NodeId, anchors: Anchors, margins: EdgeInsets) {
        if let Some(control) = self.control_mut(id) {
            control.anchors = anchors;
            control.margins = margins;
        }
        self.notify_minimum_size_changed(id);
    }

    fn set_anchors_preset(&mut self, id: NodeId, preset: LayoutPreset, keep_offsets: bool) {
        let parent = self.parent_size(id);
        let Some(control) = self.control(id) else {
            return;
        };
        let anchors = preset.anchors();
        let margins = if keep_offsets {
            margins_for_rect(anchors, parent, control.position, control.size)
        } else {
            preset.margins_for(control.size)
        };
        self.set_anchors(id, anchors, margins);
    }

    fn set_custom_minimum_size(&mut self, id: NodeId, size: Size) {
        let Some(control) = self.control_mut(id) else {
            return;
        };
        let size = size.non_negative();
        if control.custom_minimum_size == size {
            return;
        }
        control.custom_minimum_size = size;
        self.notify_minimum_size_changed(id);
    }

    fn set_size_flags(&mut self, id: NodeId, horizontal: SizeFlags, vertical: SizeFlags) {
        let Some(control) = self.control_mut(id) else {
            return;
        };
        control.horizontal = horizontal;
        control.vertical = vertical;
        self.notify_minimum_size_changed(id);
    }

    fn connect(
        &mut self,
        id: NodeId,
        kind: SignalKind,
        handler: impl Fn(&mut UiTree, NodeId, &Signal) + 'static,
    ) {
        match self.control_mut(id) {
            Some(control) => control.signals.connect(kind, Rc::new(handler)),
            None => log::warn!("connect {kind:?} on non-control node {id:?}"),
        }
    }

    fn emit(&mut self, id: NodeId, signal: Signal) {
        let Some(handlers) = self
            .control(id)
            .map(|control| control.signals.handlers(signal.kind()))
        else {
            return;
        };
        for handler in handlers {
            handler(self, id, &signal);
        }
    }

    fn request_focus(&mut self, id: NodeId) {
        self.resources_mut().focus_requests.push(id);
    }

    fn resolve_layout_anchors(&mut self) {
        for id in self.preorder(self.root()) {
            let owned_by_container = self
                .parent(id)
                .and_then(|parent| self.control(parent))
                .is_some_and(Control::is_container);
            if owned_by_container {
                continue;
            }
            let parent = self.parent_size(id);
            let Some(control) = self.control(id) else {
                continue;
            };
            let resolved = resolve_anchors(control.anchors, control.margins, parent, control.size);
            if resolved.position != control.position || resolved.size != control.size {
                apply_rect(self, id, resolved.position, resolved.size);
            }
        }
    }

    fn sort_children(&mut self, id: NodeId) -> bool {
        let Some((size, include_hidden)) = self.control(id).and_then(|control| {
            let container = control.widget.as_container()?;
            Some((control.size, container.layout().policy().includes_hidden_children()))
        }) else {
            return false;
        };
        let children = self.child_infos(id, include_hidden);
        let Some((payload, resources)) = self.payload_with_resources(id) else {
            return false;
        };
        let Some(container) = payload
            .as_control_mut()
            .and_then(|control| control.widget.as_container_mut())
        else {
            return false;
        };
        let cx = resources.measure_context();
        let frame = resources.layout_frame;
        let policy = container.layout_mut().policy_mut();
        let placements = policy.sort_children(size, &children, &cx);
        let minimum_changed = policy.take_minimum_changed();
        container.finish_sort(frame);
        log::trace!("sorted {} children of {id:?}", placements.len());

        for placement in placements {
            if let Some(visible) = placement.visible {
                self.set_visible(placement.id, visible);
            }
            apply_rect(self, placement.id, placement.rect.origin(), placement.rect.size());
        }
        if minimum_changed {
            self.notify_minimum_size_changed(id);
        }
        self.emit(id, Signal::SortChildren);
        true
    }

    fn flush_sorts(&mut self) -> usize {
        for parent in self.take_structure_changes() {
            self.queue_sort(parent);
        }
        let frame = self.resources().layout_frame;
        let mut sorted = 0;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if !self.is_visible(id) {
                continue;
            }
            if self.is_sort_pending(id) {
                let done_this_frame = frame.is_some_and(|frame| {
                    self.control(id)
                        .and_then(|control| control.widget.as_container())
                        .is_some_and(|container| container.sorted_in(frame))
                });
                if done_this_frame {
                    log::trace!("sort of {id:?} deferred to the next frame");
                } else if self.sort_children(id) {
                    sorted += 1;
                }
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        sorted
    }

    fn begin_layout_frame(&mut self) {
        let resources = self.resources_mut();
        resources.frames_started += 1;
        resources.layout_frame = Some(resources.frames_started);
    }

    fn end_layout_frame(&mut self) {
        self.resources_mut().layout_frame = None;
    }

    fn layout_pass(&mut self) -> usize {
        self.resolve_layout_anchors();
        self.flush_sorts()
    }

    fn control_at(&self, point: Point) -> Option<NodeId> {
        hit_test(self, self.root(), Point::ZERO, None, point)
    }

    fn focus_chain(&self) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if !self.is_visible(id) {
                continue;
            }
            if self
                .control(id)
                .is_some_and(|control| control.focus_mode == FocusMode::All)
            {
                chain.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        chain
    }
}

/// Writes a rect computed by layout, leaving anchors and margins alone.
fn apply_rect(tree: &mut UiTree, id: NodeId, position: Point, size: Size) {
    let Some(control) = tree.control_mut(id) else {
        return;
    };
    let size = size.non_negative();
    let resized = control.size != size;
    control.position = position;
    control.size = size;
    if resized {
        if let Some(container) = control.widget.as_container_mut() {
            container.queue_sort();
        }
        tree.emit(id, Signal::Resized(size));
    }
}

fn hit_test(
    tree: &UiTree,
    id: NodeId,
    origin: Point,
    clip: Option<Rect>,
    point: Point,
) -> Option<NodeId> {
    if !tree.is_visible(id) {
        return None;
    }
    let Some(control) = tree.control(id) else {
        return tree
            .children(id)
            .iter()
            .rev()
            .find_map(|&child| hit_test(tree, child, origin, clip, point));
    };
    let rect = Rect::from_origin_size(origin + control.position, control.size);
    let child_clip = if control.clip_contents {
        Some(clip.map_or(rect, |clip| clip.intersect(&rect)))
    } else {
        clip
    };
    let hit = tree
        .children(id)
        .iter()
        .rev()
        .find_map(|&child| hit_test(tree, child, rect.origin(), child_clip, point));
    if hit.is_some() {
        return hit;
    }
    let inside_clip = clip.map_or(true, |clip| clip.contains(point));
    (control.mouse_filter && inside_clip && rect.contains(point)).then_some(id)
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
