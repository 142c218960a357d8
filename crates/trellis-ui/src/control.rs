//! The `Control` payload: rect, anchors, margins, sizing flags and
//! interaction state of a UI node.

use crate::containers::{Container, Layout};
use crate::signal::Signals;
use crate::widgets::{Button, CustomWidget, Label, Panel, Widget};
use trellis_ui_graphics::{EdgeInsets, Point, Rect, Size};
use trellis_ui_layout::{margins_for_position, Anchors, BoxAlignment, LayoutPreset};

/// How a control takes part in its container's layout along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeFlags {
    /// Take the whole slot instead of shrinking to the minimum.
    pub fill: bool,
    /// Ask for a share of leftover space.
    pub expand: bool,
    /// Placement inside the slot when not filling.
    pub shrink: BoxAlignment,
    pub stretch_ratio: f32,
}

impl Default for SizeFlags {
    fn default() -> Self {
        Self::FILL
    }
}

impl SizeFlags {
    pub const FILL: SizeFlags = SizeFlags {
        fill: true,
        expand: false,
        shrink: BoxAlignment::Begin,
        stretch_ratio: 1.0,
    };

    pub const EXPAND_FILL: SizeFlags = SizeFlags {
        fill: true,
        expand: true,
        shrink: BoxAlignment::Begin,
        stretch_ratio: 1.0,
    };

    pub const fn shrink(alignment: BoxAlignment) -> Self {
        SizeFlags {
            fill: false,
            expand: false,
            shrink: alignment,
            stretch_ratio: 1.0,
        }
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn with_stretch_ratio(mut self, ratio: f32) -> Self {
        self.stretch_ratio = ratio;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    None,
    /// Focusable by clicking only.
    Click,
    /// Focusable by clicking and keyboard traversal.
    All,
}

impl FocusMode {
    pub fn accepts_click(self) -> bool {
        !matches!(self, FocusMode::None)
    }

    pub fn accepts_keyboard(self) -> bool {
        matches!(self, FocusMode::All)
    }
}

/// A node that participates in layout, input and drawing.
///
/// `position` is relative to the parent control's origin. `hovered`,
/// `focused` and `pressed` are written only by the dispatcher.
#[derive(Debug)]
pub struct Control {
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) anchors: Anchors,
    pub(crate) margins: EdgeInsets,
    pub(crate) custom_minimum_size: Size,
    pub(crate) horizontal: SizeFlags,
    pub(crate) vertical: SizeFlags,
    pub focus_mode: FocusMode,
    pub mouse_filter: bool,
    pub clip_contents: bool,
    pub tooltip: Option<String>,
    pub(crate) hovered: bool,
    pub(crate) focused: bool,
    pub(crate) pressed: bool,
    pub(crate) signals: Signals,
    pub(crate) widget: Widget,
}

impl Control {
    pub fn new(widget: impl Into<Widget>) -> Self {
        let widget = widget.into();
        let clip_contents = widget
            .as_container()
            .is_some_and(|container| container.layout().clips_by_default());
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            anchors: Anchors::default(),
            margins: EdgeInsets::ZERO,
            custom_minimum_size: Size::ZERO,
            horizontal: SizeFlags::FILL,
            vertical: SizeFlags::FILL,
            focus_mode: widget.default_focus_mode(),
            mouse_filter: widget.default_mouse_filter(),
            clip_contents,
            tooltip: None,
            hovered: false,
            focused: false,
            pressed: false,
            signals: Signals::default(),
            widget,
        }
    }

    pub fn bare() -> Self {
        Self::new(Widget::Control)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(Label::new(text))
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Button::new(text))
    }

    pub fn panel() -> Self {
        Self::new(Panel::new())
    }

    pub fn container(layout: impl Into<Layout>) -> Self {
        Self::new(Container::new(layout))
    }

    pub fn custom(widget: impl CustomWidget) -> Self {
        Self::new(Box::new(widget) as Box<dyn CustomWidget>)
    }

    /// Places the control at `position` assuming point anchors at the
    /// parent's top-left; use the tree helpers once it is attached.
    pub fn with_position(mut self, position: Point) -> Self {
        self.margins = margins_for_position(self.anchors, self.margins, Size::ZERO, position);
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size.non_negative();
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.with_position(rect.origin()).with_size(rect.size())
    }

    pub fn with_anchors(mut self, anchors: Anchors, margins: EdgeInsets) -> Self {
        self.anchors = anchors;
        self.margins = margins;
        self
    }

    /// Anchors to `preset` with margins keeping the current size inside
    /// the parent.
    pub fn with_preset(mut self, preset: LayoutPreset) -> Self {
        self.anchors = preset.anchors();
        self.margins = preset.margins_for(self.size);
        self
    }

    pub fn with_custom_minimum_size(mut self, size: Size) -> Self {
        self.custom_minimum_size = size.non_negative();
        self
    }

    pub fn with_size_flags(mut self, horizontal: SizeFlags, vertical: SizeFlags) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn with_focus_mode(mut self, mode: FocusMode) -> Self {
        self.focus_mode = mode;
        self
    }

    pub fn with_mouse_filter(mut self, enabled: bool) -> Self {
        self.mouse_filter = enabled;
        self
    }

    pub fn with_clip_contents(mut self, clip: bool) -> Self {
        self.clip_contents = clip;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Rect relative to the parent control.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    pub fn margins(&self) -> EdgeInsets {
        self.margins
    }

    pub fn custom_minimum_size(&self) -> Size {
        self.custom_minimum_size
    }

    pub fn horizontal_flags(&self) -> SizeFlags {
        self.horizontal
    }

    pub fn vertical_flags(&self) -> SizeFlags {
        self.vertical
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    pub fn is_container(&self) -> bool {
        self.widget.as_container().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{BoxContainer, ScrollContainer};

    #[test]
    fn defaults_follow_widget_kind() {
        let button = Control::button("Ok");
        assert_eq!(button.focus_mode, FocusMode::All);
        assert!(button.mouse_filter);

        let label = Control::label("Name");
        assert_eq!(label.focus_mode, FocusMode::None);
        assert!(!label.mouse_filter);

        let column = Control::container(BoxContainer::vertical());
        assert!(!column.mouse_filter);
        assert!(!column.clip_contents);

        let scroll = Control::container(ScrollContainer::new());
        assert!(scroll.mouse_filter);
        assert!(scroll.clip_contents);
    }

    #[test]
    fn preset_keeps_size_inside_parent() {
        let control = Control::bare()
            .with_size(Size::new(40.0, 20.0))
            .with_preset(LayoutPreset::BottomRight);
        assert_eq!(control.anchors(), LayoutPreset::BottomRight.anchors());
        assert_eq!(control.margins().left, -40.0);
        assert_eq!(control.margins().top, -20.0);
    }
}
