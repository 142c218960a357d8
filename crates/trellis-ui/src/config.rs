/// Tunables shared by the dispatcher and the built-in layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiConfig {
    /// Seconds of continuous hover before a tooltip is drawn.
    pub tooltip_delay: f32,
    /// Pixels scrolled per wheel notch.
    pub scroll_step: f32,
    pub tab_height: f32,
    pub dragger_size: f32,
    pub scrollbar_thickness: f32,
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tooltip_delay: 0.5,
            scroll_step: 20.0,
            tab_height: 28.0,
            dragger_size: 8.0,
            scrollbar_thickness: 12.0,
            font_size: 16.0,
        }
    }
}

impl UiConfig {
    pub fn with_tooltip_delay(mut self, seconds: f32) -> Self {
        self.tooltip_delay = seconds.max(0.0);
        self
    }

    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn with_tab_height(mut self, height: f32) -> Self {
        self.tab_height = height.max(0.0);
        self
    }

    pub fn with_dragger_size(mut self, size: f32) -> Self {
        self.dragger_size = size.max(0.0);
        self
    }

    pub fn with_scrollbar_thickness(mut self, thickness: f32) -> Self {
        self.scrollbar_thickness = thickness.max(0.0);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}
