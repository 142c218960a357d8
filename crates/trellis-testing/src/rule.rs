//! Headless frame driver for UI tests.
//!
//! # Example
//!
//! ```
//! use trellis_testing::UiTestRule;
//! use trellis_ui::Control;
//! use trellis_ui_graphics::Rect;
//!
//! let mut rule = UiTestRule::new(800.0, 600.0);
//! let button = rule.add_control(
//!     None,
//!     "ok",
//!     Control::button("Ok").with_rect(Rect::new(10.0, 10.0, 80.0, 30.0)),
//! );
//! rule.frame();
//! rule.click_at(20.0, 20.0);
//! assert_eq!(rule.hovered(), Some(button));
//! ```

use trellis_core::{NodeId, Shared};
use trellis_ui::{
    ui_tree, Event, EventKind, InputState, Key, Modifiers, MouseButton, PolledInput, UiResources,
    UiServer, UiTree, UiTreeExt,
};
use trellis_ui_graphics::{Point, Rect, RecordingRenderer, Size};

/// Frame time used by [`UiTestRule::frame`].
pub const DEFAULT_FRAME_TIME: f32 = 1.0 / 60.0;

/// Owns a tree, a dispatcher, polled input and a recording renderer, and
/// drives them through the per-frame protocol the way a host would.
///
/// Every synthetic event is applied to the polled input first and then
/// handed to the dispatcher, so hover and pointer state stay consistent.
pub struct UiTestRule {
    tree: Shared<UiTree>,
    server: UiServer,
    input: PolledInput,
    renderer: RecordingRenderer,
}

impl UiTestRule {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_resources(width, height, UiResources::default())
    }

    pub fn with_resources(width: f32, height: f32, resources: UiResources) -> Self {
        let tree = Shared::new(ui_tree(resources));
        let mut server = UiServer::new();
        server.init(tree.clone(), Size::new(width, height));
        Self {
            tree,
            server,
            input: PolledInput::new(),
            renderer: RecordingRenderer::new(),
        }
    }

    pub fn tree(&self) -> &Shared<UiTree> {
        &self.tree
    }

    /// Runs `f` with the tree mutably borrowed.
    pub fn with_tree<R>(&self, f: impl FnOnce(&mut UiTree) -> R) -> R {
        self.tree.update(f)
    }

    /// Creates a control under `parent`, or under the root when `None`.
    pub fn add_control(
        &self,
        parent: Option<NodeId>,
        name: &str,
        control: trellis_ui::Control,
    ) -> NodeId {
        self.with_tree(|tree| {
            let parent = parent.unwrap_or_else(|| tree.root());
            let id = tree.create_control(name, control);
            if let Err(err) = tree.add_child(parent, id) {
                panic!("cannot attach {name}: {err}");
            }
            id
        })
    }

    pub fn server(&self) -> &UiServer {
        &self.server
    }

    pub fn server_mut(&mut self) -> &mut UiServer {
        &mut self.server
    }

    pub fn input(&self) -> &PolledInput {
        &self.input
    }

    /// Primitives recorded by the most recent frame.
    pub fn renderer(&self) -> &RecordingRenderer {
        &self.renderer
    }

    pub fn frame(&mut self) {
        self.advance(DEFAULT_FRAME_TIME);
    }

    /// Runs one full frame with `dt` seconds of elapsed time.
    pub fn advance(&mut self, dt: f32) {
        self.server.begin_frame(&self.input);
        self.server.update(dt);
        self.renderer.clear();
        self.server.render(&mut self.renderer);
        self.server.end_frame(&mut self.renderer);
    }

    /// Sends one event and reports whether anything handled it.
    pub fn send(&mut self, kind: EventKind) -> bool {
        self.input.apply(&kind);
        let mut event = Event::new(kind);
        self.server.handle_event(&mut event);
        event.is_handled()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.send(EventKind::MouseMoved {
            position: Point::new(x, y),
        })
    }

    pub fn press(&mut self, button: MouseButton) -> bool {
        self.send(EventKind::MouseButtonPressed { button })
    }

    pub fn release(&mut self, button: MouseButton) -> bool {
        self.send(EventKind::MouseButtonReleased { button })
    }

    /// Moves, presses and releases the left button at `(x, y)`, then runs
    /// a frame. Returns whether the press or release was handled.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        self.move_to(x, y);
        let pressed = self.press(MouseButton::Left);
        let released = self.release(MouseButton::Left);
        self.frame();
        pressed || released
    }

    /// Presses at `from`, moves to `to` in `steps` increments with a frame
    /// after each, and releases.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) {
        let steps = steps.max(1);
        self.move_to(from.x, from.y);
        self.press(MouseButton::Left);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.frame();
        }
        self.release(MouseButton::Left);
        self.frame();
    }

    /// Wheel notches at `(x, y)`; negative `dy` scrolls content down.
    pub fn scroll_at(&mut self, x: f32, y: f32, dx: f32, dy: f32) -> bool {
        self.move_to(x, y);
        self.send(EventKind::MouseScrolled {
            delta: Point::new(dx, dy),
            modifiers: Modifiers::NONE,
        })
    }

    /// Presses and releases `key`; returns whether the press was handled.
    pub fn key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let handled = self.send(EventKind::KeyPressed { key, modifiers });
        self.send(EventKind::KeyReleased { key, modifiers });
        handled
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.send(EventKind::WindowResized {
            size: Size::new(width, height),
        });
        self.frame();
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.server.hovered()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.server.focused()
    }

    pub fn pointer(&self) -> Point {
        self.input.pointer_position()
    }

    pub fn global_rect(&self, id: NodeId) -> Option<Rect> {
        self.tree.with(|tree| tree.global_rect(id))
    }

    /// Texts drawn by the most recent frame, in draw order.
    pub fn texts(&self) -> Vec<String> {
        self.renderer.texts().into_iter().map(str::to_owned).collect()
    }

    /// First node named `name` anywhere under the root.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.tree
            .with(|tree| tree.find_child(tree.root(), name, true))
    }
}
