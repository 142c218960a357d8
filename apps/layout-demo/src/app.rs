//! The demo scene: a settings window with tabs, a split view and a flow
//! of chips, wired up through signals.

use trellis_core::{NodeId, NodeScript, NodeTree};
use trellis_ui::prelude::*;
use trellis_ui::widgets::Range;
use trellis_ui::{UiNode, UiResources};

/// Nodes the scripted session pokes at.
#[derive(Clone, Copy, Debug)]
pub struct SettingsScreen {
    pub tabs: NodeId,
    pub volume: NodeId,
    pub mute: NodeId,
    pub loading: NodeId,
    pub split: NodeId,
    pub status: NodeId,
    pub chips: NodeId,
}

/// Fills a progress bar over a few seconds, then stops processing.
struct LoadingScript {
    per_second: f64,
}

impl NodeScript<UiNode, UiResources> for LoadingScript {
    fn ready(&mut self, _tree: &mut NodeTree<UiNode, UiResources>, node: NodeId) {
        log::debug!("loading bar {node:?} ready");
    }

    fn process(&mut self, tree: &mut NodeTree<UiNode, UiResources>, node: NodeId, dt: f32) {
        let step = self.per_second * dt as f64;
        let done = tree
            .with_widget::<ProgressBar, _>(node, |bar| {
                bar.range.set_value(bar.range.value() + step);
                bar.range.value() >= bar.range.max()
            })
            .unwrap_or(true);
        if done {
            log::info!("loading finished");
            tree.set_process_enabled(node, false);
        }
    }
}

fn attach(tree: &mut UiTree, parent: NodeId, name: &str, control: Control) -> NodeId {
    let id = tree.create_control(name, control);
    if let Err(err) = tree.add_child(parent, id) {
        log::error!("cannot attach {name}: {err}");
    }
    id
}

fn set_status(tree: &mut UiTree, status: NodeId, text: String) {
    if let Err(err) = tree.with_widget::<Label, _>(status, |label| label.set_text(text)) {
        log::warn!("status label unavailable: {err}");
    }
}

pub fn build_settings_screen(tree: &mut UiTree) -> SettingsScreen {
    let root = tree.root();
    let window = attach(
        tree,
        root,
        "window",
        Control::container(PanelContainer::new()).with_preset(LayoutPreset::FullRect),
    );
    let column = attach(
        tree,
        window,
        "column",
        Control::container(BoxContainer::vertical().with_separation(8.0)),
    );
    attach(
        tree,
        column,
        "title",
        Control::new(Label::new("Settings").with_font_size(24.0)),
    );
    let tabs = attach(
        tree,
        column,
        "tabs",
        Control::container(TabContainer::new())
            .with_size_flags(SizeFlags::FILL, SizeFlags::EXPAND_FILL),
    );

    let general = attach(
        tree,
        tabs,
        "General",
        Control::container(BoxContainer::vertical()),
    );
    attach(tree, general, "volume_label", Control::label("Volume"));
    let volume = attach(
        tree,
        general,
        "volume",
        Control::new(Slider::horizontal(Range::new(0.0, 100.0).with_value(40.0)))
            .with_tooltip("Master volume"),
    );
    let mute = attach(tree, general, "mute", Control::new(Button::toggle("Mute")));
    attach(tree, general, "separator", Control::new(Separator::horizontal()));
    let loading = attach(
        tree,
        general,
        "loading",
        Control::new(ProgressBar::new(Range::new(0.0, 100.0))),
    );
    if let Err(err) = tree.set_script(loading, LoadingScript { per_second: 50.0 }) {
        log::error!("cannot attach loading script: {err}");
    }

    let split = attach(
        tree,
        tabs,
        "Layout",
        Control::container(SplitContainer::horizontal().with_split_offset(240.0)),
    );
    let sidebar = attach(
        tree,
        split,
        "sidebar",
        Control::container(ScrollContainer::new()),
    );
    let entries = attach(
        tree,
        sidebar,
        "entries",
        Control::container(BoxContainer::vertical()),
    );
    for index in 0..24 {
        attach(tree, entries, "entry", Control::button(format!("Entry {index}")));
    }
    let preview = attach(
        tree,
        split,
        "preview",
        Control::container(AspectRatioContainer::new(16.0 / 9.0)),
    );
    attach(
        tree,
        preview,
        "thumbnail",
        Control::new(TextureRect::new(TextureHandle::new(1, 320, 180))),
    );

    let gallery = attach(
        tree,
        tabs,
        "Gallery",
        Control::container(MarginContainer::new(EdgeInsets::uniform(12.0))),
    );
    let chips = attach(
        tree,
        gallery,
        "chips",
        Control::container(FlowContainer::horizontal()),
    );
    for tag in ["rust", "layout", "anchors", "containers", "signals", "focus", "clip"] {
        attach(tree, chips, tag, Control::button(tag));
    }

    let footer = attach(
        tree,
        column,
        "footer",
        Control::container(BoxContainer::horizontal()),
    );
    let status = attach(
        tree,
        footer,
        "status",
        Control::label("Ready").with_size_flags(SizeFlags::EXPAND_FILL, SizeFlags::FILL),
    );
    let grid = attach(
        tree,
        footer,
        "actions",
        Control::container(GridContainer::new(2)),
    );
    let apply = attach(tree, grid, "apply", Control::button("Apply"));
    let cancel = attach(tree, grid, "cancel", Control::button("Cancel"));

    tree.connect(volume, SignalKind::ValueChanged, move |tree, _, signal| {
        if let Signal::ValueChanged(value) = signal {
            set_status(tree, status, format!("Volume {value:.0}"));
        }
    });
    tree.connect(mute, SignalKind::Toggled, move |tree, _, signal| {
        if let Signal::Toggled(muted) = signal {
            let text = if *muted { "Muted" } else { "Unmuted" };
            set_status(tree, status, text.to_owned());
        }
    });
    tree.connect(tabs, SignalKind::TabChanged, move |tree, _, signal| {
        if let Signal::TabChanged(index) = signal {
            log::info!("switched to tab {index}");
        }
        tree.request_focus(tabs);
    });
    tree.connect(split, SignalKind::Dragged, |_, _, signal| {
        log::debug!("split dragged: {signal:?}");
    });
    tree.connect(apply, SignalKind::Pressed, move |tree, _, _| {
        set_status(tree, status, "Applied".to_owned());
    });
    tree.connect(cancel, SignalKind::Pressed, move |tree, _, _| {
        set_status(tree, status, "Cancelled".to_owned());
        tree.set_visible(cancel, false);
    });

    SettingsScreen {
        tabs,
        volume,
        mute,
        loading,
        split,
        status,
        chips,
    }
}
