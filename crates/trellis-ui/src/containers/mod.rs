//! Containers: a control that arranges its direct children through a
//! pluggable [`LayoutPolicy`].

mod aspect_ratio;
mod box_container;
mod center;
mod flow;
mod grid;
mod margin;
mod scroll;
mod split;
mod tab;

pub use aspect_ratio::AspectRatioContainer;
pub use box_container::BoxContainer;
pub use center::CenterContainer;
pub use flow::FlowContainer;
pub use grid::GridContainer;
pub use margin::{MarginContainer, PanelContainer};
pub use scroll::{ScrollContainer, ScrollMode};
pub use split::SplitContainer;
pub use tab::{TabContainer, TabState};

use crate::control::SizeFlags;
use crate::event::EventKind;
use crate::resources::MeasureContext;
use crate::widgets::{DrawContext, InputContext, InputResponse, WidgetBehavior};
use trellis_core::NodeId;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::Axis;

/// A direct child as seen by a layout policy.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildInfo {
    pub id: NodeId,
    pub name: String,
    /// Combined minimum size (content minimum plus absolute margins).
    pub minimum: Size,
    pub visible: bool,
    pub horizontal: SizeFlags,
    pub vertical: SizeFlags,
}

impl ChildInfo {
    /// Size flags along `axis`.
    pub fn flags(&self, axis: Axis) -> SizeFlags {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Rect assigned to a child, relative to the container's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub id: NodeId,
    pub rect: Rect,
    /// Visibility the policy imposes on the child, if any.
    pub visible: Option<bool>,
}

impl Placement {
    pub fn new(id: NodeId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            visible: None,
        }
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

/// Sizing and arrangement rule of a container.
///
/// `children` holds visible layout participants in insertion order, or
/// every participant when [`includes_hidden_children`] is true.
///
/// [`includes_hidden_children`]: LayoutPolicy::includes_hidden_children
pub trait LayoutPolicy {
    fn minimum_size(&self, children: &[ChildInfo], cx: &MeasureContext<'_>) -> Size;

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        cx: &MeasureContext<'_>,
    ) -> Vec<Placement>;

    fn includes_hidden_children(&self) -> bool {
        false
    }

    /// Whether the last sort changed this policy's own minimum size.
    /// Only policies whose minimum depends on their assigned size report it.
    fn take_minimum_changed(&mut self) -> bool {
        false
    }

    fn gui_input(&mut self, _event: &EventKind, _cx: &InputContext<'_>) -> InputResponse {
        InputResponse::ignored()
    }

    /// Drawn before the children.
    fn draw(&self, _cx: &mut DrawContext<'_>) {}

    /// Drawn after the children.
    fn draw_overlay(&self, _cx: &mut DrawContext<'_>) {}
}

/// Closed set of layout policies.
#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    Box(BoxContainer),
    Grid(GridContainer),
    Split(SplitContainer),
    Scroll(ScrollContainer),
    Margin(MarginContainer),
    Panel(PanelContainer),
    Center(CenterContainer),
    AspectRatio(AspectRatioContainer),
    Tab(TabContainer),
    Flow(FlowContainer),
}

impl Layout {
    pub fn policy(&self) -> &dyn LayoutPolicy {
        match self {
            Layout::Box(layout) => layout,
            Layout::Grid(layout) => layout,
            Layout::Split(layout) => layout,
            Layout::Scroll(layout) => layout,
            Layout::Margin(layout) => layout,
            Layout::Panel(layout) => layout,
            Layout::Center(layout) => layout,
            Layout::AspectRatio(layout) => layout,
            Layout::Tab(layout) => layout,
            Layout::Flow(layout) => layout,
        }
    }

    pub fn policy_mut(&mut self) -> &mut dyn LayoutPolicy {
        match self {
            Layout::Box(layout) => layout,
            Layout::Grid(layout) => layout,
            Layout::Split(layout) => layout,
            Layout::Scroll(layout) => layout,
            Layout::Margin(layout) => layout,
            Layout::Panel(layout) => layout,
            Layout::Center(layout) => layout,
            Layout::AspectRatio(layout) => layout,
            Layout::Tab(layout) => layout,
            Layout::Flow(layout) => layout,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Layout::Box(layout) if layout.axis.is_horizontal() => "HBoxContainer",
            Layout::Box(_) => "VBoxContainer",
            Layout::Grid(_) => "GridContainer",
            Layout::Split(layout) if layout.axis.is_horizontal() => "HSplitContainer",
            Layout::Split(_) => "VSplitContainer",
            Layout::Scroll(_) => "ScrollContainer",
            Layout::Margin(_) => "MarginContainer",
            Layout::Panel(_) => "PanelContainer",
            Layout::Center(_) => "CenterContainer",
            Layout::AspectRatio(_) => "AspectRatioContainer",
            Layout::Tab(_) => "TabContainer",
            Layout::Flow(layout) if layout.axis.is_horizontal() => "HFlowContainer",
            Layout::Flow(_) => "VFlowContainer",
        }
    }

    /// Layouts with their own pointer interaction (or an opaque
    /// background) take part in hit-testing by default.
    pub(crate) fn accepts_mouse(&self) -> bool {
        matches!(
            self,
            Layout::Split(_) | Layout::Scroll(_) | Layout::Panel(_) | Layout::Tab(_)
        )
    }

    pub(crate) fn accepts_focus(&self) -> bool {
        matches!(self, Layout::Tab(_))
    }

    /// Scroll containers clip their content by default.
    pub(crate) fn clips_by_default(&self) -> bool {
        matches!(self, Layout::Scroll(_))
    }
}

/// A control that arranges its children.
///
/// `pending_sort` is set by [`Container::queue_sort`] and cleared once the
/// dispatcher has run the policy for this frame. Queuing while already
/// pending is a no-op. A container sorts at most once per dispatcher
/// frame; a sort queued after that waits for the next frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pending_sort: bool,
    sorted_in_frame: Option<u64>,
    layout: Layout,
}

impl Container {
    pub fn new(layout: impl Into<Layout>) -> Self {
        Self {
            pending_sort: true,
            sorted_in_frame: None,
            layout: layout.into(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Mutable access to the policy. Callers are responsible for queuing
    /// a sort; the tree helpers do this for them.
    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn queue_sort(&mut self) {
        if !self.pending_sort {
            log::trace!("queue sort for {}", self.layout.kind_name());
        }
        self.pending_sort = true;
    }

    pub fn is_sort_pending(&self) -> bool {
        self.pending_sort
    }

    /// Whether the sort for `frame` already ran.
    pub fn sorted_in(&self, frame: u64) -> bool {
        self.sorted_in_frame == Some(frame)
    }

    pub(crate) fn finish_sort(&mut self, frame: Option<u64>) {
        self.pending_sort = false;
        if frame.is_some() {
            self.sorted_in_frame = frame;
        }
    }
}

impl WidgetBehavior for Container {
    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        self.layout.policy_mut().gui_input(event, cx)
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        self.layout.policy().draw(cx)
    }

    fn draw_overlay(&self, cx: &mut DrawContext<'_>) {
        self.layout.policy().draw_overlay(cx)
    }
}

/// Statically typed access into [`Layout`].
pub trait LayoutKind: Sized + 'static {
    const NAME: &'static str;
    fn from_layout(layout: &Layout) -> Option<&Self>;
    fn from_layout_mut(layout: &mut Layout) -> Option<&mut Self>;
}

macro_rules! layout_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl LayoutKind for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_layout(layout: &Layout) -> Option<&Self> {
                    match layout {
                        Layout::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_layout_mut(layout: &mut Layout) -> Option<&mut Self> {
                    match layout {
                        Layout::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Layout {
                fn from(inner: $ty) -> Self {
                    Layout::$variant(inner)
                }
            }
        )*
    };
}

layout_kind! {
    BoxContainer => Box,
    GridContainer => Grid,
    SplitContainer => Split,
    ScrollContainer => Scroll,
    MarginContainer => Margin,
    PanelContainer => Panel,
    CenterContainer => Center,
    AspectRatioContainer => AspectRatio,
    TabContainer => Tab,
    FlowContainer => Flow,
}

/// Visible children only; used by every policy that ignores hidden ones.
pub(crate) fn visible(children: &[ChildInfo]) -> impl Iterator<Item = &ChildInfo> {
    children.iter().filter(|child| child.visible)
}

/// Largest combined minimum among `children`.
pub(crate) fn max_minimum<'a>(children: impl IntoIterator<Item = &'a ChildInfo>) -> Size {
    children
        .into_iter()
        .fold(Size::ZERO, |acc, child| acc.max(child.minimum))
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
