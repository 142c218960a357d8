//! Per-frame dispatcher: layout, hover, focus, input routing and drawing
//! for one shared [`UiTree`].

use crate::camera::Camera;
use crate::control::FocusMode;
use crate::event::{Event, EventKind, Key, MouseButton};
use crate::input::InputState;
use crate::signal::Signal;
use crate::tree::{UiTree, UiTreeExt};
use crate::widgets::{DrawContext, InputContext, InputResponse};
use smallvec::SmallVec;
use trellis_core::{NodeError, NodeId, Shared};
use trellis_ui_graphics::{Mat4, Point, Rect, Renderer2D, Size, IDENTITY};

/// Tooltip of the hovered control and how long it has been hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Pointer position when the hover started.
    pub position: Point,
    pub elapsed: f32,
}

/// Offset of the tooltip box from the pointer.
const TOOLTIP_OFFSET: Point = Point::new(0.0, 20.0);

/// The UI dispatcher.
///
/// One per window. The host calls, in order, `begin_frame`, `update`,
/// `handle_event` for each pending event, `render` and `end_frame`.
/// Node ids held here are generation-checked against the tree and dropped
/// once their node is gone.
#[derive(Default)]
pub struct UiServer {
    tree: Option<Shared<UiTree>>,
    camera: Option<Shared<dyn Camera>>,
    screen_size: Size,
    pointer: Point,
    focused: Option<NodeId>,
    hovered: Option<NodeId>,
    pressed: Option<NodeId>,
    clip_stack: Vec<Rect>,
    tooltip: Option<Tooltip>,
}

impl UiServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, tree: Shared<UiTree>, screen_size: Size) {
        if self.tree.is_some() {
            self.shutdown();
        }
        log::debug!("ui server init at {screen_size:?}");
        self.tree = Some(tree);
        self.set_screen_size(screen_size);
    }

    /// Releases the tree and camera and forgets every interaction state.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.tree.take() {
            let mut tree = handle.borrow_mut();
            tree.end_layout_frame();
            for id in [self.focused, self.hovered, self.pressed].into_iter().flatten() {
                if let Some(control) = tree.control_mut(id) {
                    control.focused = false;
                    control.hovered = false;
                    control.pressed = false;
                }
            }
        }
        log::debug!("ui server shutdown");
        *self = Self::default();
    }

    pub fn is_initialized(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Option<&Shared<UiTree>> {
        self.tree.as_ref()
    }

    pub fn set_camera(&mut self, camera: Option<Shared<dyn Camera>>) {
        if let Some(camera) = &camera {
            camera.update(|camera| camera.on_resize(self.screen_size));
        }
        self.camera = camera;
    }

    pub fn camera(&self) -> Option<&Shared<dyn Camera>> {
        self.camera.as_ref()
    }

    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn set_screen_size(&mut self, size: Size) {
        let size = size.non_negative();
        self.screen_size = size;
        if let Some(camera) = &self.camera {
            camera.update(|camera| camera.on_resize(size));
        }
        if let Some(handle) = &self.tree {
            handle.borrow_mut().resources_mut().set_screen_size(size);
        }
    }

    /// Pointer in UI space as of the last snapshot or move event.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn pressed(&self) -> Option<NodeId> {
        self.pressed
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Whether the tooltip has been hovered long enough to be drawn.
    pub fn is_tooltip_shown(&self) -> bool {
        let Some(tooltip) = &self.tooltip else {
            return false;
        };
        self.tree.as_ref().is_some_and(|handle| {
            tooltip.elapsed >= handle.borrow().resources().config.tooltip_delay
        })
    }

    /// Depth of the clip stack; zero outside of `render`.
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    pub fn begin_frame(&mut self, input: &dyn InputState) {
        let Some(handle) = self.tree.clone() else {
            return;
        };
        let mut tree = handle.borrow_mut();
        self.prune(&tree);
        self.pointer = self.to_ui(input.pointer_position());
        tree.begin_layout_frame();
        tree.layout_pass();
        self.refresh_hover(&mut tree);
    }

    pub fn update(&mut self, dt: f32) {
        let Some(handle) = self.tree.clone() else {
            return;
        };
        let mut tree = handle.borrow_mut();
        tree.process(dt);
        self.prune(&tree);
        tree.layout_pass();
        self.drain_focus_requests(&mut tree);

        let delay = tree.resources().config.tooltip_delay;
        if let Some(tooltip) = &mut self.tooltip {
            let was_shown = tooltip.elapsed >= delay;
            tooltip.elapsed += dt.max(0.0);
            if !was_shown && tooltip.elapsed >= delay {
                log::debug!("tooltip shown: {}", tooltip.text);
            }
        }
    }

    pub fn handle_event(&mut self, event: &mut Event) {
        let Some(handle) = self.tree.clone() else {
            return;
        };
        let mut tree = handle.borrow_mut();
        self.prune(&tree);

        match event.kind {
            EventKind::WindowResized { size } => {
                drop(tree);
                self.set_screen_size(size);
                tree = handle.borrow_mut();
                tree.layout_pass();
                self.refresh_hover(&mut tree);
            }
            EventKind::MouseMoved { position } => {
                self.pointer = self.to_ui(position);
                tree.layout_pass();
                self.refresh_hover(&mut tree);
            }
            EventKind::MouseButtonPressed {
                button: MouseButton::Left,
            } => {
                self.set_pressed(&mut tree, self.hovered);
                if let Some(id) = self.hovered {
                    let accepts = tree
                        .control(id)
                        .is_some_and(|control| control.focus_mode.accepts_click());
                    if accepts {
                        self.set_focus(&mut tree, Some(id));
                    }
                }
            }
            _ => {}
        }

        let root = tree.root();
        let mut handled = event.is_handled();
        self.dispatch(&mut tree, root, Point::ZERO, None, &event.kind, &mut handled);
        if handled {
            event.mark_handled();
        }

        if let EventKind::MouseButtonReleased {
            button: MouseButton::Left,
        } = event.kind
        {
            self.set_pressed(&mut tree, None);
        }

        if !event.is_handled() {
            if let EventKind::KeyPressed {
                key: Key::Tab,
                modifiers,
            } = event.kind
            {
                self.cycle_focus(&mut tree, modifiers.shift);
                event.mark_handled();
            }
        }

        self.drain_focus_requests(&mut tree);
    }

    /// Moves focus to `id`. Controls with [`FocusMode::None`] are ignored.
    pub fn grab_focus(&mut self, id: NodeId) {
        if let Some(handle) = self.tree.clone() {
            self.set_focus(&mut handle.borrow_mut(), Some(id));
        }
    }

    pub fn release_focus(&mut self) {
        if let Some(handle) = self.tree.clone() {
            self.set_focus(&mut handle.borrow_mut(), None);
        }
    }

    /// Destroys a subtree, first dropping hover, focus and press state held
    /// on any of its nodes.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<Vec<NodeId>, NodeError> {
        let Some(handle) = self.tree.clone() else {
            return Err(NodeError::Missing { id });
        };
        let mut tree = handle.borrow_mut();
        let [focused, hovered, pressed] = [self.focused, self.hovered, self.pressed]
            .map(|node| node.is_some_and(|node| node == id || tree.is_ancestor_of(id, node)));
        if focused {
            self.set_focus(&mut tree, None);
        }
        if hovered {
            self.hovered = None;
            self.tooltip = None;
        }
        if pressed {
            self.pressed = None;
        }
        tree.destroy(id)
    }

    pub fn control_at(&self, point: Point) -> Option<NodeId> {
        self.tree
            .as_ref()
            .and_then(|handle| handle.borrow().control_at(point))
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer2D) {
        let Some(handle) = self.tree.clone() else {
            return;
        };
        let mut tree = handle.borrow_mut();
        self.prune(&tree);
        tree.layout_pass();

        renderer.begin_scene(&self.view_projection());
        self.clip_stack.clear();
        let root = tree.root();
        self.draw_node(&tree, root, Point::ZERO, renderer);
        debug_assert!(self.clip_stack.is_empty(), "unbalanced clip stack");
        renderer.end_scene();
    }

    /// Draws the tooltip once it has been hovered for the configured delay
    /// and closes the frame; sorts queued from here on run next frame.
    pub fn end_frame(&mut self, renderer: &mut dyn Renderer2D) {
        if let Some(handle) = &self.tree {
            handle.borrow_mut().end_layout_frame();
        }
        if !self.is_tooltip_shown() {
            return;
        }
        let (Some(handle), Some(tooltip)) = (self.tree.as_ref(), self.tooltip.as_ref()) else {
            return;
        };
        let tree = handle.borrow();
        let resources = tree.resources();
        let measure = resources.measure_context();
        let padding = resources.theme.tooltip_padding;
        let text = measure.measure_text(&tooltip.text, None);

        let size = text + padding.extent();
        let mut origin = tooltip.position + TOOLTIP_OFFSET;
        origin.x = origin.x.min(self.screen_size.width - size.width).max(0.0);
        origin.y = origin.y.min(self.screen_size.height - size.height).max(0.0);
        let rect = Rect::from_origin_size(origin, size);

        renderer.begin_scene(&self.view_projection());
        renderer.draw_rect(rect, resources.theme.tooltip_background);
        renderer.draw_text(
            &tooltip.text,
            Point::new(rect.x + padding.left, rect.y + padding.top),
            measure.font_size(None),
            resources.theme.text,
        );
        renderer.end_scene();
    }

    fn view_projection(&self) -> Mat4 {
        self.camera
            .as_ref()
            .map_or(IDENTITY, |camera| camera.with(|camera| camera.view_projection()))
    }

    fn to_ui(&self, screen: Point) -> Point {
        match &self.camera {
            Some(camera) => camera.with(|camera| camera.screen_to_ui(screen)),
            None => screen,
        }
    }

    /// Forgets ids whose nodes no longer exist.
    fn prune(&mut self, tree: &UiTree) {
        for slot in [&mut self.focused, &mut self.hovered, &mut self.pressed] {
            if slot.is_some_and(|id| !tree.contains(id)) {
                log::debug!("dropping stale node {slot:?}");
                *slot = None;
            }
        }
        if self.hovered.is_none() {
            self.tooltip = None;
        }
    }

    fn refresh_hover(&mut self, tree: &mut UiTree) {
        let hit = tree.control_at(self.pointer);
        if hit == self.hovered {
            return;
        }
        log::trace!("hover {:?} -> {hit:?}", self.hovered);
        if let Some(old) = self.hovered.take() {
            if let Some(control) = tree.control_mut(old) {
                control.hovered = false;
            }
            tree.emit(old, Signal::MouseExited);
        }
        self.hovered = hit;
        self.tooltip = None;
        if let Some(id) = hit {
            if let Some(control) = tree.control_mut(id) {
                control.hovered = true;
            }
            tree.emit(id, Signal::MouseEntered);
            self.tooltip = tree
                .control(id)
                .and_then(|control| control.tooltip.clone())
                .map(|text| Tooltip {
                    text,
                    position: self.pointer,
                    elapsed: 0.0,
                });
        }
    }

    fn set_pressed(&mut self, tree: &mut UiTree, pressed: Option<NodeId>) {
        if let Some(control) = self.pressed.and_then(|id| tree.control_mut(id)) {
            control.pressed = false;
        }
        self.pressed = pressed;
        if let Some(control) = pressed.and_then(|id| tree.control_mut(id)) {
            control.pressed = true;
        }
    }

    fn set_focus(&mut self, tree: &mut UiTree, target: Option<NodeId>) {
        if let Some(id) = target {
            match tree.control(id) {
                None => {
                    log::warn!("focus requested for non-control node {id:?}");
                    return;
                }
                Some(control) if control.focus_mode == FocusMode::None => return,
                Some(_) => {}
            }
        }
        if target == self.focused {
            return;
        }
        log::debug!("focus {:?} -> {target:?}", self.focused);
        if let Some(old) = self.focused.take() {
            tree.emit(old, Signal::FocusExited);
            if let Some(control) = tree.control_mut(old) {
                control.focused = false;
            }
        }
        let Some(id) = target.filter(|&id| tree.contains(id)) else {
            return;
        };
        self.focused = Some(id);
        if let Some(control) = tree.control_mut(id) {
            control.focused = true;
        }
        tree.emit(id, Signal::FocusEntered);
    }

    fn drain_focus_requests(&mut self, tree: &mut UiTree) {
        let requests = std::mem::take(&mut tree.resources_mut().focus_requests);
        for id in requests {
            self.set_focus(tree, Some(id));
        }
    }

    fn cycle_focus(&mut self, tree: &mut UiTree, backwards: bool) {
        let chain = tree.focus_chain();
        if chain.is_empty() {
            return;
        }
        let len = chain.len();
        let current = self
            .focused
            .and_then(|focused| chain.iter().position(|&id| id == focused));
        let next = match (current, backwards) {
            (Some(index), false) => (index + 1) % len,
            (Some(index), true) => (index + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        self.set_focus(tree, Some(chain[next]));
    }

    /// Offers `event` to every visible control below `id`, children in
    /// reverse order before their parent. Once anything in a subtree has
    /// handled the event, that subtree's ancestors no longer see it;
    /// siblings still do, with `already_handled` set.
    fn dispatch(
        &mut self,
        tree: &mut UiTree,
        id: NodeId,
        origin: Point,
        clip: Option<Rect>,
        event: &EventKind,
        handled: &mut bool,
    ) -> bool {
        if !tree.is_visible(id) {
            return false;
        }
        let (rect, child_clip) = match tree.control(id) {
            Some(control) => {
                let rect = Rect::from_origin_size(origin + control.position, control.size);
                let child_clip = if control.clip_contents {
                    Some(clip.map_or(rect, |clip| clip.intersect(&rect)))
                } else {
                    clip
                };
                (Some(rect), child_clip)
            }
            None => (None, clip),
        };
        let child_origin = rect.map_or(origin, |rect| rect.origin());

        let children: SmallVec<[NodeId; 8]> = tree.children(id).iter().copied().collect();
        let mut subtree_handled = false;
        for child in children.into_iter().rev() {
            if tree.parent(child) == Some(id) {
                subtree_handled |=
                    self.dispatch(tree, child, child_origin, child_clip, event, handled);
            }
        }
        if subtree_handled {
            return true;
        }
        let Some(rect) = rect else {
            return false;
        };
        if is_pointer_event(event) && clip.is_some_and(|clip| !clip.contains(self.pointer)) {
            return false;
        }
        let response = self.deliver(tree, id, rect, event, *handled);
        *handled |= response;
        response
    }

    fn deliver(
        &mut self,
        tree: &mut UiTree,
        id: NodeId,
        rect: Rect,
        event: &EventKind,
        already_handled: bool,
    ) -> bool {
        let pointer = self.pointer;
        let Some((payload, resources)) = tree.payload_with_resources(id) else {
            return false;
        };
        let Some(control) = payload.as_control_mut() else {
            return false;
        };
        if is_pointer_event(event) && !control.mouse_filter {
            return false;
        }
        let cx = InputContext {
            measure: resources.measure_context(),
            rect,
            pointer,
            hovered: control.hovered,
            focused: control.focused,
            pressed: control.pressed,
            already_handled,
        };
        let response = match control.widget.behavior_mut() {
            Some(behavior) => behavior.gui_input(event, &cx),
            None => InputResponse::ignored(),
        };
        self.apply_response(tree, id, response)
    }

    fn apply_response(&mut self, tree: &mut UiTree, id: NodeId, response: InputResponse) -> bool {
        if response.queue_sort {
            tree.queue_sort(id);
        }
        if response.minimum_size_changed {
            tree.notify_minimum_size_changed(id);
        }
        if response.request_focus {
            self.set_focus(tree, Some(id));
        }
        for signal in response.signals {
            tree.emit(id, signal);
        }
        response.handled
    }

    fn draw_node(
        &mut self,
        tree: &UiTree,
        id: NodeId,
        origin: Point,
        renderer: &mut dyn Renderer2D,
    ) {
        if !tree.is_visible(id) {
            return;
        }
        let Some(control) = tree.control(id) else {
            for &child in tree.children(id) {
                self.draw_node(tree, child, origin, renderer);
            }
            return;
        };
        let rect = Rect::from_origin_size(origin + control.position, control.size);
        if control.clip_contents {
            let clip = self
                .clip_stack
                .last()
                .map_or(rect, |outer| outer.intersect(&rect));
            self.clip_stack.push(clip);
            renderer.set_clip(Some(clip));
        }

        let measure = tree.resources().measure_context();
        let behavior = control.widget.behavior();
        behavior.draw(&mut DrawContext {
            renderer: &mut *renderer,
            measure,
            rect,
            hovered: control.hovered,
            focused: control.focused,
            pressed: control.pressed,
        });
        for &child in tree.children(id) {
            self.draw_node(tree, child, rect.origin(), renderer);
        }
        behavior.draw_overlay(&mut DrawContext {
            renderer: &mut *renderer,
            measure,
            rect,
            hovered: control.hovered,
            focused: control.focused,
            pressed: control.pressed,
        });

        if control.clip_contents {
            self.clip_stack.pop();
            renderer.set_clip(self.clip_stack.last().copied());
        }
    }
}

fn is_pointer_event(event: &EventKind) -> bool {
    matches!(
        event,
        EventKind::MouseButtonPressed { .. }
            | EventKind::MouseButtonReleased { .. }
            | EventKind::MouseMoved { .. }
            | EventKind::MouseScrolled { .. }
    )
}

#[cfg(test)]
#[path = "tests/server_tests.rs"]
mod tests;
