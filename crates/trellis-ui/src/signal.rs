//! Control signals and their connections

use crate::UiTree;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::rc::Rc;
use trellis_core::NodeId;
use trellis_ui_graphics::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Pressed,
    Toggled,
    ValueChanged,
    FocusEntered,
    FocusExited,
    MouseEntered,
    MouseExited,
    TabChanged,
    Dragged,
    Scrolled,
    Resized,
    SortChildren,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    Pressed,
    Toggled(bool),
    ValueChanged(f64),
    FocusEntered,
    FocusExited,
    MouseEntered,
    MouseExited,
    TabChanged(usize),
    /// New split offset after a divider drag.
    Dragged(f32),
    /// Horizontal and vertical scroll after a wheel step.
    Scrolled(Point),
    Resized(Size),
    SortChildren,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Pressed => SignalKind::Pressed,
            Signal::Toggled(_) => SignalKind::Toggled,
            Signal::ValueChanged(_) => SignalKind::ValueChanged,
            Signal::FocusEntered => SignalKind::FocusEntered,
            Signal::FocusExited => SignalKind::FocusExited,
            Signal::MouseEntered => SignalKind::MouseEntered,
            Signal::MouseExited => SignalKind::MouseExited,
            Signal::TabChanged(_) => SignalKind::TabChanged,
            Signal::Dragged(_) => SignalKind::Dragged,
            Signal::Scrolled(_) => SignalKind::Scrolled,
            Signal::Resized(_) => SignalKind::Resized,
            Signal::SortChildren => SignalKind::SortChildren,
        }
    }
}

/// Callback invoked with the whole tree, the emitting control and the signal.
pub type SignalHandler = Rc<dyn Fn(&mut UiTree, NodeId, &Signal)>;

/// Connections of one control, kept in first-connected order.
#[derive(Clone, Default)]
pub struct Signals {
    handlers: IndexMap<SignalKind, SmallVec<[SignalHandler; 1]>>,
}

impl Signals {
    pub fn connect(&mut self, kind: SignalKind, handler: SignalHandler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn disconnect_all(&mut self, kind: SignalKind) {
        self.handlers.shift_remove(&kind);
    }

    pub fn is_connected(&self, kind: SignalKind) -> bool {
        self.handlers.get(&kind).is_some_and(|list| !list.is_empty())
    }

    /// Handlers for `kind`, cloned so they can run while the tree is
    /// mutably borrowed.
    pub fn handlers(&self, kind: SignalKind) -> SmallVec<[SignalHandler; 1]> {
        self.handlers.get(&kind).cloned().unwrap_or_default()
    }
}

impl std::fmt::Debug for Signals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(kind, list)| (kind, list.len())))
            .finish()
    }
}
