use crate::config::UiConfig;
use crate::text::{MonospaceMeasurer, TextMeasurer};
use crate::theme::Theme;
use std::rc::Rc;
use trellis_core::NodeId;
use trellis_ui_graphics::Size;

/// Tree-wide state reachable from every control: theme, config, text
/// measurement and deferred focus requests raised from signal handlers.
#[derive(Clone)]
pub struct UiResources {
    pub theme: Theme,
    pub config: UiConfig,
    pub text: Rc<dyn TextMeasurer>,
    pub(crate) focus_requests: Vec<NodeId>,
    pub(crate) screen_size: Size,
    /// Frame currently being driven by the dispatcher, if any.
    pub(crate) layout_frame: Option<u64>,
    pub(crate) frames_started: u64,
}

impl Default for UiResources {
    fn default() -> Self {
        Self::new(Theme::default(), UiConfig::default())
    }
}

impl UiResources {
    pub fn new(theme: Theme, config: UiConfig) -> Self {
        Self {
            theme,
            config,
            text: Rc::new(MonospaceMeasurer::default()),
            focus_requests: Vec::new(),
            screen_size: Size::ZERO,
            layout_frame: None,
            frames_started: 0,
        }
    }

    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.text = Rc::new(measurer);
        self
    }

    /// Size top-level controls resolve their anchors against.
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size.non_negative();
    }

    pub fn measure_context(&self) -> MeasureContext<'_> {
        MeasureContext {
            theme: &self.theme,
            config: &self.config,
            text: self.text.as_ref(),
        }
    }
}

impl std::fmt::Debug for UiResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiResources")
            .field("theme", &self.theme)
            .field("config", &self.config)
            .field("focus_requests", &self.focus_requests)
            .field("screen_size", &self.screen_size)
            .field("layout_frame", &self.layout_frame)
            .finish_non_exhaustive()
    }
}

/// Read-only view used when computing minimum sizes.
#[derive(Clone, Copy)]
pub struct MeasureContext<'a> {
    pub theme: &'a Theme,
    pub config: &'a UiConfig,
    pub text: &'a dyn TextMeasurer,
}

impl MeasureContext<'_> {
    pub fn font_size(&self, requested: Option<f32>) -> f32 {
        requested.unwrap_or(self.config.font_size)
    }

    pub fn measure_text(&self, text: &str, font_size: Option<f32>) -> Size {
        self.text.measure(text, self.font_size(font_size))
    }
}
