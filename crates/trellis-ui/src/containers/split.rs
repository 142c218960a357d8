use super::{ChildInfo, LayoutPolicy, Placement};
use crate::event::{EventKind, MouseButton};
use crate::resources::MeasureContext;
use crate::signal::Signal;
use crate::widgets::{DrawContext, InputContext, InputResponse};
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::{clamp_split_offset, split_panes, Axis};

/// Two panes separated by a draggable divider.
///
/// Only the first two children take part. The container owns the first
/// pane's visibility: collapsing hides it and gives the second pane the
/// full extent.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitContainer {
    pub axis: Axis,
    split_offset: f32,
    pub minimum_split_offset: f32,
    /// `None` uses the configured dragger size.
    pub dragger_size: Option<f32>,
    pub collapsed: bool,
    pub dragger_visible: bool,
    applied_offset: f32,
    drag_grab: Option<f32>,
}

impl SplitContainer {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            split_offset: 0.0,
            minimum_split_offset: 0.0,
            dragger_size: None,
            collapsed: false,
            dragger_visible: true,
            applied_offset: 0.0,
            drag_grab: None,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_split_offset(mut self, offset: f32) -> Self {
        self.split_offset = offset;
        self
    }

    /// Requested offset; negative values count back from the far end.
    pub fn split_offset(&self) -> f32 {
        self.split_offset
    }

    pub fn set_split_offset(&mut self, offset: f32) {
        self.split_offset = offset;
    }

    /// Offset used by the last sort, after clamping.
    pub fn applied_offset(&self) -> f32 {
        self.applied_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_grab.is_some()
    }

    fn dragger(&self, cx: &MeasureContext<'_>) -> f32 {
        self.dragger_size.unwrap_or(cx.config.dragger_size)
    }

    /// Divider rect relative to the container.
    pub fn dragger_rect(&self, size: Size, cx: &MeasureContext<'_>) -> Rect {
        Rect::from_origin_size(
            self.axis.point(self.applied_offset, 0.0),
            self.axis.size(self.dragger(cx), self.axis.cross(size)),
        )
    }
}

impl LayoutPolicy for SplitContainer {
    fn minimum_size(&self, children: &[ChildInfo], cx: &MeasureContext<'_>) -> Size {
        let panes: Vec<&ChildInfo> = children.iter().take(2).collect();
        match panes.as_slice() {
            [] => Size::ZERO,
            [only] => only.minimum,
            [_, second] if self.collapsed => second.minimum,
            [first, second, ..] => {
                let main = self.axis.main(first.minimum)
                    + self.axis.main(second.minimum)
                    + self.dragger(cx);
                let cross = self
                    .axis
                    .cross(first.minimum)
                    .max(self.axis.cross(second.minimum));
                self.axis.size(main, cross)
            }
        }
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        let extent = self.axis.main(size);
        let cross = self.axis.cross(size);
        match children {
            [] => Vec::new(),
            [only] => vec![Placement::new(only.id, Rect::from_size(size))],
            [first, second, ..] => {
                let dragger = self.dragger(cx);
                let offset =
                    clamp_split_offset(self.split_offset, extent, dragger, self.minimum_split_offset);
                self.applied_offset = offset;
                let panes = split_panes(extent, offset, dragger, self.collapsed);
                let first_rect = Rect::from_origin_size(
                    self.axis.point(panes.first_offset, 0.0),
                    self.axis.size(panes.first_extent, cross),
                );
                let second_rect = Rect::from_origin_size(
                    self.axis.point(panes.second_offset, 0.0),
                    self.axis.size(panes.second_extent, cross),
                );
                vec![
                    Placement::new(first.id, first_rect).with_visibility(!self.collapsed),
                    Placement::new(second.id, second_rect),
                ]
            }
        }
    }

    fn includes_hidden_children(&self) -> bool {
        true
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        match *event {
            EventKind::MouseButtonPressed {
                button: MouseButton::Left,
            } if !self.collapsed && self.dragger_visible => {
                let local = cx.local_pointer();
                if !self.dragger_rect(cx.rect.size(), &cx.measure).contains(local) {
                    return InputResponse::ignored();
                }
                self.drag_grab = Some(self.axis.main_of_point(local) - self.applied_offset);
                InputResponse::handled()
            }
            EventKind::MouseMoved { .. } => {
                let Some(grab) = self.drag_grab else {
                    return InputResponse::ignored();
                };
                let requested = self.axis.main_of_point(cx.local_pointer()) - grab;
                let offset = clamp_split_offset(
                    requested,
                    self.axis.main(cx.rect.size()),
                    self.dragger(&cx.measure),
                    self.minimum_split_offset,
                );
                if offset == self.applied_offset {
                    return InputResponse::handled();
                }
                self.split_offset = offset;
                self.applied_offset = offset;
                let mut response = InputResponse::handled().with_signal(Signal::Dragged(offset));
                response.queue_sort = true;
                response
            }
            EventKind::MouseButtonReleased {
                button: MouseButton::Left,
            } if self.drag_grab.is_some() => {
                self.drag_grab = None;
                InputResponse::handled()
            }
            _ => InputResponse::ignored(),
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        if self.collapsed || !self.dragger_visible {
            return;
        }
        let local = self.dragger_rect(cx.rect.size(), &cx.measure);
        let rect = local.translate(cx.rect.x, cx.rect.y);
        let color = cx.measure.theme.separator;
        cx.rect(rect, color);
    }
}
