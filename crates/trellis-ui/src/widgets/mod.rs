//! Leaf widgets and the closed `Widget` variant a control carries.

mod button;
mod custom;
mod label;
mod panel;
mod range;
mod separator;
mod texture_rect;

pub use button::Button;
pub use custom::CustomWidget;
pub use label::Label;
pub use panel::Panel;
pub use range::{ProgressBar, Range, Slider};
pub use separator::Separator;
pub use texture_rect::{TextureRect, TextureStretch};

use crate::containers::Container;
use crate::event::EventKind;
use crate::resources::MeasureContext;
use crate::signal::Signal;
use crate::FocusMode;
use smallvec::SmallVec;
use trellis_ui_graphics::{Color, Point, Rect, Renderer2D, Size};

/// What a widget asks of the dispatcher after seeing an event.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputResponse {
    /// Stops ancestors' own input hooks from seeing the event.
    pub handled: bool,
    pub request_focus: bool,
    pub queue_sort: bool,
    pub minimum_size_changed: bool,
    pub signals: SmallVec<[Signal; 2]>,
}

impl InputResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signals.push(signal);
        self
    }

    pub fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}

/// Everything a widget may look at while handling an event.
pub struct InputContext<'a> {
    pub measure: MeasureContext<'a>,
    /// The control's global rect.
    pub rect: Rect,
    /// Pointer in UI space.
    pub pointer: Point,
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
    /// A deeper control already handled this event.
    pub already_handled: bool,
}

impl InputContext<'_> {
    pub fn pointer_inside(&self) -> bool {
        self.rect.contains(self.pointer)
    }

    /// Pointer relative to the control's top-left corner.
    pub fn local_pointer(&self) -> Point {
        self.pointer - self.rect.origin()
    }
}

pub struct DrawContext<'a> {
    pub renderer: &'a mut dyn Renderer2D,
    pub measure: MeasureContext<'a>,
    /// The control's global rect.
    pub rect: Rect,
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
}

impl DrawContext<'_> {
    pub fn rect(&mut self, rect: Rect, color: Color) {
        self.renderer.draw_rect(rect, color);
    }

    pub fn outline(&mut self, rect: Rect, color: Color, width: f32) {
        self.renderer.draw_rect_outline(rect, color, width);
    }

    pub fn text(&mut self, text: &str, position: Point, font_size: Option<f32>, color: Color) {
        let size = self.measure.font_size(font_size);
        self.renderer.draw_text(text, position, size, color);
    }

    /// Draws `text` centered in `area`.
    pub fn centered_text(&mut self, text: &str, area: Rect, font_size: Option<f32>, color: Color) {
        let measured = self.measure.measure_text(text, font_size);
        let position = Point::new(
            area.x + (area.width - measured.width) * 0.5,
            area.y + (area.height - measured.height) * 0.5,
        );
        self.text(text, position, font_size, color);
    }
}

/// Per-widget content contract: intrinsic minimum size, input, drawing.
pub trait WidgetBehavior {
    fn minimum_size(&self, _cx: &MeasureContext<'_>) -> Size {
        Size::ZERO
    }

    fn gui_input(&mut self, _event: &EventKind, _cx: &InputContext<'_>) -> InputResponse {
        InputResponse::ignored()
    }

    fn draw(&self, _cx: &mut DrawContext<'_>) {}

    /// Drawn after the control's children.
    fn draw_overlay(&self, _cx: &mut DrawContext<'_>) {}
}

/// The content of a control.
pub enum Widget {
    /// A bare control with no content of its own.
    Control,
    Label(Label),
    Button(Button),
    Panel(Panel),
    TextureRect(TextureRect),
    Slider(Slider),
    ProgressBar(ProgressBar),
    Separator(Separator),
    Container(Container),
    Custom(Box<dyn CustomWidget>),
}

struct Bare;

impl WidgetBehavior for Bare {}

impl Widget {
    pub fn behavior(&self) -> &dyn WidgetBehavior {
        match self {
            Widget::Control => &Bare,
            Widget::Label(label) => label,
            Widget::Button(button) => button,
            Widget::Panel(panel) => panel,
            Widget::TextureRect(texture) => texture,
            Widget::Slider(slider) => slider,
            Widget::ProgressBar(bar) => bar,
            Widget::Separator(separator) => separator,
            Widget::Container(container) => container,
            Widget::Custom(custom) => custom,
        }
    }

    pub fn behavior_mut(&mut self) -> Option<&mut dyn WidgetBehavior> {
        let behavior: &mut dyn WidgetBehavior = match self {
            Widget::Control => return None,
            Widget::Label(label) => label,
            Widget::Button(button) => button,
            Widget::Panel(panel) => panel,
            Widget::TextureRect(texture) => texture,
            Widget::Slider(slider) => slider,
            Widget::ProgressBar(bar) => bar,
            Widget::Separator(separator) => separator,
            Widget::Container(container) => container,
            Widget::Custom(custom) => custom,
        };
        Some(behavior)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Widget::Control => "Control",
            Widget::Label(_) => "Label",
            Widget::Button(_) => "Button",
            Widget::Panel(_) => "Panel",
            Widget::TextureRect(_) => "TextureRect",
            Widget::Slider(_) => "Slider",
            Widget::ProgressBar(_) => "ProgressBar",
            Widget::Separator(_) => "Separator",
            Widget::Container(container) => container.layout().kind_name(),
            Widget::Custom(custom) => custom.type_name(),
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Widget::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Widget::Container(container) => Some(container),
            _ => None,
        }
    }

    pub(crate) fn default_mouse_filter(&self) -> bool {
        match self {
            Widget::Label(_) | Widget::Separator(_) | Widget::ProgressBar(_) => false,
            Widget::Container(container) => container.layout().accepts_mouse(),
            _ => true,
        }
    }

    pub(crate) fn default_focus_mode(&self) -> FocusMode {
        match self {
            Widget::Button(_) | Widget::Slider(_) => FocusMode::All,
            Widget::Container(container) if container.layout().accepts_focus() => FocusMode::All,
            _ => FocusMode::None,
        }
    }
}

impl From<Box<dyn CustomWidget>> for Widget {
    fn from(custom: Box<dyn CustomWidget>) -> Self {
        Widget::Custom(custom)
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Widget::{}", self.kind_name())
    }
}

/// Statically typed access into [`Widget`] without runtime type checks.
pub trait WidgetKind: Sized + 'static {
    const NAME: &'static str;
    fn from_widget(widget: &Widget) -> Option<&Self>;
    fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self>;
}

macro_rules! widget_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl WidgetKind for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_widget(widget: &Widget) -> Option<&Self> {
                    match widget {
                        Widget::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self> {
                    match widget {
                        Widget::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Widget {
                fn from(inner: $ty) -> Self {
                    Widget::$variant(inner)
                }
            }
        )*
    };
}

widget_kind! {
    Label => Label,
    Button => Button,
    Panel => Panel,
    TextureRect => TextureRect,
    Slider => Slider,
    ProgressBar => ProgressBar,
    Separator => Separator,
    Container => Container,
}
