use super::{DrawContext, InputContext, InputResponse, WidgetBehavior};
use crate::event::{EventKind, Key, MouseButton};
use crate::resources::MeasureContext;
use crate::signal::Signal;
use trellis_ui_graphics::{EdgeInsets, Size};

/// Clickable text button, optionally latching in toggle mode.
///
/// Activation happens on release while the pointer is still over the
/// button that received the press, or on Enter/Space while focused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Button {
    pub text: String,
    pub font_size: Option<f32>,
    pub disabled: bool,
    pub toggle_mode: bool,
    toggled: bool,
    /// `None` uses the theme's button padding.
    pub padding: Option<EdgeInsets>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn toggle(text: impl Into<String>) -> Self {
        Self {
            toggle_mode: true,
            ..Self::new(text)
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Sets the latched state without emitting `Toggled`.
    pub fn set_toggled(&mut self, toggled: bool) {
        self.toggled = self.toggle_mode && toggled;
    }

    fn activate(&mut self) -> InputResponse {
        let mut response = InputResponse::handled();
        if self.toggle_mode {
            self.toggled = !self.toggled;
            response.emit(Signal::Toggled(self.toggled));
        }
        response.emit(Signal::Pressed);
        response
    }
}

impl WidgetBehavior for Button {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        let padding = self.padding.unwrap_or(cx.theme.button_padding);
        cx.measure_text(&self.text, self.font_size) + padding.extent()
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        if self.disabled {
            return InputResponse::ignored();
        }
        match *event {
            EventKind::MouseButtonPressed {
                button: MouseButton::Left,
            } if cx.hovered => InputResponse::handled(),
            EventKind::MouseButtonReleased {
                button: MouseButton::Left,
            } if cx.pressed && cx.hovered => self.activate(),
            EventKind::KeyPressed {
                key: Key::Enter | Key::Space,
                ..
            } if cx.focused => self.activate(),
            _ => InputResponse::ignored(),
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let background = if self.disabled {
            theme.button_disabled
        } else if cx.pressed || self.toggled {
            theme.button_pressed
        } else if cx.hovered {
            theme.button_hovered
        } else {
            theme.button_normal
        };
        let rect = cx.rect;
        cx.rect(rect, background);
        if cx.focused {
            cx.outline(rect, theme.focus_outline, 1.0);
        }
        let color = if self.disabled {
            theme.text_disabled
        } else {
            theme.text
        };
        let padding = self.padding.unwrap_or(theme.button_padding);
        cx.centered_text(&self.text, rect.inset(padding), self.font_size, color);
    }
}
