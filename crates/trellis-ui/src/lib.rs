//! Controls, containers and the per-frame UI dispatcher for Trellis
//!
//! A [`UiTree`] is a [`trellis_core::NodeTree`] whose payloads are either
//! plain grouping nodes or [`Control`]s. The [`UiServer`] owns a shared
//! handle to one tree and drives layout, hover, focus, input dispatch and
//! drawing each frame.

mod camera;
mod config;
pub mod containers;
mod control;
mod event;
mod input;
mod resources;
mod server;
mod signal;
mod text;
mod theme;
mod tree;
pub mod widgets;

pub use camera::{shared_camera, Camera, OrthographicCamera};
pub use config::UiConfig;
pub use control::{Control, FocusMode, SizeFlags};
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use input::{InputState, MouseButtons, PolledInput};
pub use resources::{MeasureContext, UiResources};
pub use server::{Tooltip, UiServer};
pub use signal::{Signal, SignalHandler, SignalKind, Signals};
pub use text::{MonospaceMeasurer, TextMeasurer};
pub use theme::Theme;
pub use tree::{ui_tree, UiNode, UiTree, UiTreeExt};

pub use trellis_core::{NodeError, NodeId, Shared};

pub mod prelude {
    pub use crate::containers::{
        AspectRatioContainer, BoxContainer, CenterContainer, FlowContainer, GridContainer,
        MarginContainer, PanelContainer, ScrollContainer, ScrollMode, SplitContainer,
        TabContainer,
    };
    pub use crate::control::{Control, FocusMode, SizeFlags};
    pub use crate::event::{Event, EventKind, Key, Modifiers, MouseButton};
    pub use crate::server::UiServer;
    pub use crate::signal::{Signal, SignalKind};
    pub use crate::tree::{ui_tree, UiTree, UiTreeExt};
    pub use crate::widgets::{
        Button, Label, Panel, ProgressBar, Separator, Slider, TextureRect, TextureStretch,
    };
    pub use trellis_core::{NodeId, Shared};
    pub use trellis_ui_graphics::prelude::*;
    pub use trellis_ui_layout::prelude::*;
}
