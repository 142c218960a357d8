use super::{ChildInfo, LayoutPolicy, Placement};
use crate::event::EventKind;
use crate::resources::MeasureContext;
use crate::signal::Signal;
use crate::widgets::{DrawContext, InputContext, InputResponse};
use trellis_ui_graphics::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Scrollbar shown only while the content overflows.
    #[default]
    Auto,
    AlwaysShow,
    AlwaysHide,
}

impl ScrollMode {
    fn shows(self, content: f32, available: f32) -> bool {
        match self {
            ScrollMode::Auto => content > available,
            ScrollMode::AlwaysShow => true,
            ScrollMode::AlwaysHide => false,
        }
    }
}

/// Viewport onto a single content child.
///
/// The content is sized to `max(content minimum, viewport)` and placed at
/// `(-h_scroll, -v_scroll)`. Scroll values stay within `[0, overflow]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollContainer {
    pub horizontal_mode: ScrollMode,
    pub vertical_mode: ScrollMode,
    scroll: Point,
    content: Size,
    viewport: Size,
    show_horizontal: bool,
    show_vertical: bool,
}

impl ScrollContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modes(mut self, horizontal: ScrollMode, vertical: ScrollMode) -> Self {
        self.horizontal_mode = horizontal;
        self.vertical_mode = vertical;
        self
    }

    /// Current `(h_scroll, v_scroll)`.
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn set_h_scroll(&mut self, value: f32) {
        self.scroll.x = value.clamp(0.0, self.max_scroll().width);
    }

    pub fn set_v_scroll(&mut self, value: f32) {
        self.scroll.y = value.clamp(0.0, self.max_scroll().height);
    }

    /// Overflow measured by the last sort.
    pub fn max_scroll(&self) -> Size {
        (self.content - self.viewport).non_negative()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn scrollbars_visible(&self) -> (bool, bool) {
        (self.show_horizontal, self.show_vertical)
    }

    fn scrolled_by(&mut self, delta: Point, shift: bool, step: f32) -> bool {
        let before = self.scroll;
        let max = self.max_scroll();
        if shift || (delta.x != 0.0 && delta.y == 0.0) {
            let amount = if delta.x != 0.0 { delta.x } else { -delta.y };
            self.scroll.x = (self.scroll.x + amount * step).clamp(0.0, max.width);
        } else {
            self.scroll.y = (self.scroll.y - delta.y * step).clamp(0.0, max.height);
        }
        self.scroll != before
    }
}

impl LayoutPolicy for ScrollContainer {
    fn minimum_size(&self, children: &[ChildInfo], cx: &MeasureContext<'_>) -> Size {
        let content = children
            .iter()
            .find(|child| child.visible)
            .map_or(Size::ZERO, |child| child.minimum);
        let thickness = cx.config.scrollbar_thickness;
        let mut minimum = Size::ZERO;
        match self.vertical_mode {
            ScrollMode::AlwaysShow => minimum.width += thickness,
            ScrollMode::AlwaysHide => minimum.height = content.height,
            ScrollMode::Auto => {}
        }
        match self.horizontal_mode {
            ScrollMode::AlwaysShow => minimum.height += thickness,
            ScrollMode::AlwaysHide => minimum.width = minimum.width.max(content.width),
            ScrollMode::Auto => {}
        }
        minimum
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        let Some(child) = children.iter().find(|child| child.visible) else {
            self.content = Size::ZERO;
            self.viewport = size;
            self.scroll = Point::ZERO;
            return Vec::new();
        };
        let content = child.minimum;
        let thickness = cx.config.scrollbar_thickness;

        let mut viewport = size;
        let mut show_vertical = self.vertical_mode.shows(content.height, viewport.height);
        if show_vertical {
            viewport.width -= thickness;
        }
        let show_horizontal = self.horizontal_mode.shows(content.width, viewport.width);
        if show_horizontal {
            viewport.height -= thickness;
            if !show_vertical && self.vertical_mode.shows(content.height, viewport.height) {
                show_vertical = true;
                viewport.width -= thickness;
            }
        }
        let viewport = viewport.non_negative();

        self.show_vertical = show_vertical;
        self.show_horizontal = show_horizontal;
        self.viewport = viewport;
        self.content = content.max(viewport);
        let max = self.max_scroll();
        self.scroll = Point::new(
            self.scroll.x.clamp(0.0, max.width),
            self.scroll.y.clamp(0.0, max.height),
        );

        vec![Placement::new(
            child.id,
            Rect::from_origin_size(-self.scroll, self.content),
        )]
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        let EventKind::MouseScrolled { delta, modifiers } = *event else {
            return InputResponse::ignored();
        };
        if !cx.pointer_inside() {
            return InputResponse::ignored();
        }
        if !self.scrolled_by(delta, modifiers.shift, cx.measure.config.scroll_step) {
            // At the limit: let an enclosing scroll container take it.
            return InputResponse::ignored();
        }
        let mut response = InputResponse::handled().with_signal(Signal::Scrolled(self.scroll));
        response.queue_sort = true;
        response
    }

    fn draw_overlay(&self, cx: &mut DrawContext<'_>) {
        let rect = cx.rect;
        let theme = cx.measure.theme;
        let thickness = cx.measure.config.scrollbar_thickness;
        if self.show_vertical && self.content.height > 0.0 {
            let track = Rect::new(rect.right() - thickness, rect.y, thickness, self.viewport.height);
            let visible = (self.viewport.height / self.content.height).min(1.0);
            let grabber = Rect::new(
                track.x,
                track.y + self.scroll.y / self.content.height * track.height,
                thickness,
                track.height * visible,
            );
            cx.rect(track, theme.track);
            cx.rect(grabber, theme.scrollbar);
        }
        if self.show_horizontal && self.content.width > 0.0 {
            let track = Rect::new(rect.x, rect.bottom() - thickness, self.viewport.width, thickness);
            let visible = (self.viewport.width / self.content.width).min(1.0);
            let grabber = Rect::new(
                track.x + self.scroll.x / self.content.width * track.width,
                track.y,
                track.width * visible,
                thickness,
            );
            cx.rect(track, theme.track);
            cx.rect(grabber, theme.scrollbar);
        }
    }
}
