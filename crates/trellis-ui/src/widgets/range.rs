use super::{DrawContext, InputContext, InputResponse, WidgetBehavior};
use crate::event::{EventKind, Key, MouseButton};
use crate::resources::MeasureContext;
use crate::signal::Signal;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::Axis;

/// Numeric value model shared by sliders and progress bars.
///
/// The value is snapped to `step` (when positive) relative to `min` and
/// clamped to `[min, max - page]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    step: f64,
    page: f64,
    value: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            page: 0.0,
            value: 0.0,
        }
    }
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        let mut range = Self::default();
        range.set_bounds(min, max);
        range
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.set_step(step);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn page(&self) -> f64 {
        self.page
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max.max(min);
        self.set_value(self.value);
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step.max(0.0);
        self.set_value(self.value);
    }

    pub fn set_page(&mut self, page: f64) {
        self.page = page.clamp(0.0, self.max - self.min);
        self.set_value(self.value);
    }

    /// Returns whether the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let mut value = value;
        if self.step > 0.0 {
            value = ((value - self.min) / self.step).round() * self.step + self.min;
        }
        let upper = (self.max - self.page).max(self.min);
        let value = value.clamp(self.min, upper);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    /// Position of the value in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn set_ratio(&mut self, ratio: f64) -> bool {
        self.set_value(self.min + ratio.clamp(0.0, 1.0) * (self.max - self.min))
    }

    /// Amount one keyboard or wheel step moves the value.
    pub fn increment(&self) -> f64 {
        if self.step > 0.0 {
            self.step
        } else {
            (self.max - self.min) / 100.0
        }
    }

    fn nudge(&mut self, steps: f64) -> bool {
        self.set_value(self.value + steps * self.increment())
    }
}

/// Draggable value picker. Vertical sliders grow upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub range: Range,
    pub axis: Axis,
    pub editable: bool,
    pub scrollable: bool,
    dragging: bool,
}

impl Slider {
    pub fn new(axis: Axis, range: Range) -> Self {
        Self {
            range,
            axis,
            editable: true,
            scrollable: true,
            dragging: false,
        }
    }

    pub fn horizontal(range: Range) -> Self {
        Self::new(Axis::Horizontal, range)
    }

    pub fn vertical(range: Range) -> Self {
        Self::new(Axis::Vertical, range)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn ratio_at(&self, cx: &InputContext<'_>) -> f64 {
        let local = cx.local_pointer();
        let extent = self.axis.main(cx.rect.size());
        if extent <= 0.0 {
            return 0.0;
        }
        let along = (self.axis.main_of_point(local) / extent) as f64;
        match self.axis {
            Axis::Horizontal => along,
            Axis::Vertical => 1.0 - along,
        }
    }

    fn changed(&self, changed: bool) -> InputResponse {
        let response = InputResponse::handled();
        if changed {
            response.with_signal(Signal::ValueChanged(self.range.value()))
        } else {
            response
        }
    }
}

impl WidgetBehavior for Slider {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        let grabber = cx.theme.grabber_size;
        self.axis.size(grabber, grabber)
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        if !self.editable {
            return InputResponse::ignored();
        }
        match *event {
            EventKind::MouseButtonPressed {
                button: MouseButton::Left,
            } if cx.hovered => {
                self.dragging = true;
                let ratio = self.ratio_at(cx);
                let changed = self.range.set_ratio(ratio);
                self.changed(changed)
            }
            EventKind::MouseMoved { .. } if self.dragging => {
                let ratio = self.ratio_at(cx);
                let changed = self.range.set_ratio(ratio);
                self.changed(changed)
            }
            EventKind::MouseButtonReleased {
                button: MouseButton::Left,
            } if self.dragging => {
                self.dragging = false;
                InputResponse::handled()
            }
            EventKind::MouseScrolled { delta, .. }
                if self.scrollable && cx.pointer_inside() && delta.y != 0.0 =>
            {
                let changed = self.range.nudge(delta.y.signum() as f64);
                self.changed(changed)
            }
            EventKind::KeyPressed { key, .. } if cx.focused => {
                let changed = match key {
                    Key::Right | Key::Up => self.range.nudge(1.0),
                    Key::Left | Key::Down => self.range.nudge(-1.0),
                    Key::Home => self.range.set_value(self.range.min()),
                    Key::End => self.range.set_value(self.range.max()),
                    _ => return InputResponse::ignored(),
                };
                self.changed(changed)
            }
            _ => InputResponse::ignored(),
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let rect = cx.rect;
        let grabber = theme.grabber_size;
        let ratio = self.range.ratio() as f32;
        let (track, knob) = match self.axis {
            Axis::Horizontal => {
                let track = Rect::new(rect.x, rect.y + rect.height * 0.5 - 2.0, rect.width, 4.0);
                let center = rect.x + rect.width * ratio;
                let knob = Rect::new(center - grabber * 0.5, rect.y + (rect.height - grabber) * 0.5, grabber, grabber);
                (track, knob)
            }
            Axis::Vertical => {
                let track = Rect::new(rect.x + rect.width * 0.5 - 2.0, rect.y, 4.0, rect.height);
                let center = rect.bottom() - rect.height * ratio;
                let knob = Rect::new(rect.x + (rect.width - grabber) * 0.5, center - grabber * 0.5, grabber, grabber);
                (track, knob)
            }
        };
        cx.rect(track, theme.track);
        cx.rect(knob, theme.grabber);
        if cx.focused {
            cx.outline(knob, theme.focus_outline, 1.0);
        }
    }
}

/// Read-only fill bar with optional percentage text.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBar {
    pub range: Range,
    pub show_percentage: bool,
    pub font_size: Option<f32>,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            range: Range::default(),
            show_percentage: true,
            font_size: None,
        }
    }
}

impl ProgressBar {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    pub fn percentage_text(&self) -> String {
        format!("{}%", (self.range.ratio() * 100.0).round() as i64)
    }
}

impl WidgetBehavior for ProgressBar {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        if self.show_percentage {
            cx.measure_text("100%", self.font_size)
        } else {
            Size::ZERO
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let rect = cx.rect;
        cx.rect(rect, theme.track);
        let fill = Rect::new(rect.x, rect.y, rect.width * self.range.ratio() as f32, rect.height);
        if !fill.is_empty() {
            cx.rect(fill, theme.progress_fill);
        }
        if self.show_percentage {
            let text = self.percentage_text();
            cx.centered_text(&text, rect, self.font_size, theme.text);
        }
    }
}
