mod app;

use app::{build_settings_screen, SettingsScreen};
use trellis_ui::prelude::*;
use trellis_ui::{shared_camera, InputState, OrthographicCamera, PolledInput, UiResources};

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Window-less host: forwards synthetic events and records every frame.
struct HeadlessHost {
    tree: Shared<UiTree>,
    server: UiServer,
    input: PolledInput,
    renderer: RecordingRenderer,
    frames: usize,
}

impl HeadlessHost {
    fn new(size: Size) -> Self {
        let tree = Shared::new(ui_tree(UiResources::default()));
        let mut server = UiServer::new();
        server.init(tree.clone(), size);
        server.set_camera(Some(shared_camera(OrthographicCamera::for_viewport(size))));
        Self {
            tree,
            server,
            input: PolledInput::new(),
            renderer: RecordingRenderer::new(),
            frames: 0,
        }
    }

    fn frame(&mut self, dt: f32) {
        self.server.begin_frame(&self.input);
        self.server.update(dt);
        self.renderer.clear();
        self.server.render(&mut self.renderer);
        self.server.end_frame(&mut self.renderer);
        self.frames += 1;
    }

    fn wait(&mut self, seconds: f32) {
        let mut left = seconds;
        while left > 0.0 {
            let dt = left.min(FRAME_TIME);
            self.frame(dt);
            left -= dt;
        }
    }

    fn send(&mut self, kind: EventKind) -> bool {
        self.input.apply(&kind);
        let mut event = Event::new(kind);
        self.server.handle_event(&mut event);
        event.is_handled()
    }

    fn move_to(&mut self, point: Point) {
        self.send(EventKind::MouseMoved { position: point });
    }

    fn click(&mut self, point: Point) {
        self.move_to(point);
        self.send(EventKind::MouseButtonPressed {
            button: MouseButton::Left,
        });
        self.send(EventKind::MouseButtonReleased {
            button: MouseButton::Left,
        });
        self.frame(FRAME_TIME);
    }

    fn drag(&mut self, from: Point, to: Point) {
        const STEPS: usize = 8;
        self.move_to(from);
        self.send(EventKind::MouseButtonPressed {
            button: MouseButton::Left,
        });
        for step in 1..=STEPS {
            let t = step as f32 / STEPS as f32;
            self.move_to(Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ));
            self.frame(FRAME_TIME);
        }
        self.send(EventKind::MouseButtonReleased {
            button: MouseButton::Left,
        });
        self.frame(FRAME_TIME);
    }

    fn key(&mut self, key: Key, modifiers: Modifiers) {
        self.send(EventKind::KeyPressed { key, modifiers });
        self.send(EventKind::KeyReleased { key, modifiers });
        self.frame(FRAME_TIME);
    }

    fn scroll(&mut self, at: Point, notches: f32) {
        self.move_to(at);
        self.send(EventKind::MouseScrolled {
            delta: Point::new(0.0, -notches),
            modifiers: Modifiers::NONE,
        });
        self.frame(FRAME_TIME);
    }

    fn resize(&mut self, size: Size) {
        self.send(EventKind::WindowResized { size });
        self.frame(FRAME_TIME);
    }

    fn rect_of(&self, id: NodeId) -> Rect {
        self.tree
            .with(|tree| tree.global_rect(id))
            .unwrap_or(Rect::from_size(Size::ZERO))
    }

    /// Point over the header of tab `index` out of `count`.
    fn tab_header(&self, tabs: NodeId, index: usize, count: usize) -> Point {
        let rect = self.rect_of(tabs);
        let slot = rect.width / count as f32;
        Point::new(rect.x + slot * (index as f32 + 0.5), rect.y + 10.0)
    }

    fn status(&self, screen: &SettingsScreen) -> String {
        self.tree.with(|tree| {
            tree.widget::<Label>(screen.status)
                .map(|label| label.text.clone())
                .unwrap_or_default()
        })
    }
}

fn run_session(host: &mut HeadlessHost, screen: SettingsScreen) {
    host.frame(FRAME_TIME);

    let volume = host.rect_of(screen.volume);
    host.move_to(volume.center());
    host.wait(0.8);
    if let Some(tooltip) = host.server.tooltip() {
        log::info!("tooltip after hover: {:?}", tooltip.text);
    }
    host.drag(
        Point::new(volume.x + volume.width * 0.25, volume.center().y),
        Point::new(volume.x + volume.width * 0.8, volume.center().y),
    );
    println!("after volume drag: {}", host.status(&screen));

    host.click(host.rect_of(screen.mute).center());
    println!("after mute click: {}", host.status(&screen));

    host.key(Key::Tab, Modifiers::NONE);
    log::info!("focus after Tab: {:?}", host.server.focused());

    host.click(host.tab_header(screen.tabs, 1, 3));
    let divider = host.tree.with(|tree| {
        tree.layout::<SplitContainer>(screen.split)
            .map(|split| split.applied_offset())
            .unwrap_or_default()
    });
    let split = host.rect_of(screen.split);
    let grab = Point::new(split.x + divider + 2.0, split.center().y);
    host.drag(grab, Point::new(grab.x + 120.0, grab.y));
    host.scroll(Point::new(split.x + 20.0, split.center().y), 3.0);

    host.click(host.tab_header(screen.tabs, 2, 3));
    host.resize(Size::new(640.0, 480.0));
    let wrapped = host.tree.with(|tree| {
        tree.layout::<FlowContainer>(screen.chips)
            .map(|flow| flow.cross_extent())
            .unwrap_or_default()
    });
    println!("chips wrap to {wrapped} px at 640x480");

    host.key(Key::Left, Modifiers::NONE);
    host.wait(2.0);

    let loaded = host.tree.with(|tree| {
        tree.widget::<ProgressBar>(screen.loading)
            .map(ProgressBar::percentage_text)
            .unwrap_or_default()
    });
    println!("loading: {loaded}");
    println!(
        "{} frames, {} primitives in the last one, pointer held: {}",
        host.frames,
        host.renderer.primitives().len(),
        host.input.is_button_pressed(MouseButton::Left)
    );
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Trellis headless layout demo ===");
    let mut host = HeadlessHost::new(Size::new(960.0, 640.0));
    let screen = host.tree.update(build_settings_screen);
    run_session(&mut host, screen);

    log::debug!("final tree:\n{}", host.tree.with(|tree| tree.dump_tree()));
    host.server.shutdown();
}
