use super::{max_minimum, ChildInfo, LayoutPolicy, Placement};
use crate::event::{EventKind, Key, MouseButton};
use crate::resources::MeasureContext;
use crate::signal::Signal;
use crate::widgets::{DrawContext, InputContext, InputResponse};
use trellis_ui_graphics::{Rect, Size};

/// Per-tab overrides, indexed by child position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabState {
    pub title: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
}

/// Shows exactly one child below a strip of tab headers.
///
/// Header clicks split the strip evenly among non-hidden tabs; disabled
/// tabs swallow the click without switching. Tab titles default to the
/// child names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabContainer {
    current_tab: usize,
    states: Vec<TabState>,
    titles: Vec<String>,
    /// `None` uses the configured tab height.
    pub tab_height: Option<f32>,
}

impl TabContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tab(&self) -> usize {
        self.current_tab
    }

    /// Selects `index`; clamped to the child count at the next sort.
    pub fn set_current_tab(&mut self, index: usize) {
        self.current_tab = index;
    }

    /// Number of tabs seen at the last sort.
    pub fn tab_count(&self) -> usize {
        self.titles.len()
    }

    pub fn tab_title(&self, index: usize) -> Option<&str> {
        self.states
            .get(index)
            .and_then(|state| state.title.as_deref())
            .or_else(|| self.titles.get(index).map(String::as_str))
    }

    pub fn set_tab_title(&mut self, index: usize, title: impl Into<String>) {
        self.state_mut(index).title = Some(title.into());
    }

    pub fn set_tab_disabled(&mut self, index: usize, disabled: bool) {
        self.state_mut(index).disabled = disabled;
    }

    pub fn set_tab_hidden(&mut self, index: usize, hidden: bool) {
        self.state_mut(index).hidden = hidden;
    }

    pub fn is_tab_disabled(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|state| state.disabled)
    }

    pub fn is_tab_hidden(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|state| state.hidden)
    }

    fn state_mut(&mut self, index: usize) -> &mut TabState {
        if self.states.len() <= index {
            self.states.resize_with(index + 1, TabState::default);
        }
        &mut self.states[index]
    }

    fn tab_height(&self, cx: &MeasureContext<'_>) -> f32 {
        self.tab_height.unwrap_or(cx.config.tab_height)
    }

    /// Indices of tabs that have a header, in order.
    pub fn visible_tabs(&self) -> Vec<usize> {
        (0..self.tab_count())
            .filter(|&index| !self.is_tab_hidden(index))
            .collect()
    }

    /// Tab under a point given relative to the container.
    pub fn tab_at(&self, local_x: f32, local_y: f32, width: f32, cx: &MeasureContext<'_>) -> Option<usize> {
        if local_y < 0.0 || local_y >= self.tab_height(cx) || local_x < 0.0 || width <= 0.0 {
            return None;
        }
        let tabs = self.visible_tabs();
        if tabs.is_empty() {
            return None;
        }
        let slot_width = width / tabs.len() as f32;
        let slot = ((local_x / slot_width) as usize).min(tabs.len() - 1);
        Some(tabs[slot])
    }

    fn step_selection(&mut self, forward: bool) -> Option<usize> {
        let candidates: Vec<usize> = self
            .visible_tabs()
            .into_iter()
            .filter(|&index| !self.is_tab_disabled(index))
            .collect();
        if candidates.len() < 2 {
            return None;
        }
        let position = candidates
            .iter()
            .position(|&index| index == self.current_tab)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % candidates.len()
        } else {
            (position + candidates.len() - 1) % candidates.len()
        };
        Some(candidates[next])
    }

    fn select(&mut self, index: usize) -> InputResponse {
        if index == self.current_tab {
            return InputResponse::handled();
        }
        self.current_tab = index;
        log::debug!("tab changed to {index}");
        let mut response = InputResponse::handled().with_signal(Signal::TabChanged(index));
        response.queue_sort = true;
        response
    }
}

impl LayoutPolicy for TabContainer {
    fn minimum_size(&self, children: &[ChildInfo], cx: &MeasureContext<'_>) -> Size {
        let content = max_minimum(children.iter());
        Size::new(content.width, content.height + self.tab_height(cx))
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        self.titles = children.iter().map(|child| child.name.clone()).collect();
        if !children.is_empty() && self.current_tab >= children.len() {
            self.current_tab = children.len() - 1;
        }
        let strip = self.tab_height(cx);
        let content = Rect::new(0.0, strip, size.width, (size.height - strip).max(0.0));
        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                Placement::new(child.id, content).with_visibility(index == self.current_tab)
            })
            .collect()
    }

    fn includes_hidden_children(&self) -> bool {
        true
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        match *event {
            EventKind::MouseButtonPressed {
                button: MouseButton::Left,
            } if cx.pointer_inside() => {
                let local = cx.local_pointer();
                let Some(index) = self.tab_at(local.x, local.y, cx.rect.width, &cx.measure) else {
                    return InputResponse::ignored();
                };
                if self.is_tab_disabled(index) {
                    return InputResponse::handled();
                }
                self.select(index)
            }
            EventKind::KeyPressed {
                key: key @ (Key::Left | Key::Right),
                ..
            } if cx.focused => match self.step_selection(key == Key::Right) {
                Some(index) => self.select(index),
                None => InputResponse::ignored(),
            },
            _ => InputResponse::ignored(),
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let rect = cx.rect;
        let strip = Rect::new(rect.x, rect.y, rect.width, self.tab_height(&cx.measure));
        cx.rect(strip, theme.tab_background);
        let tabs = self.visible_tabs();
        if tabs.is_empty() {
            return;
        }
        let slot_width = strip.width / tabs.len() as f32;
        for (slot, index) in tabs.into_iter().enumerate() {
            let header = Rect::new(strip.x + slot as f32 * slot_width, strip.y, slot_width, strip.height);
            if index == self.current_tab {
                cx.rect(header, theme.tab_selected);
            }
            let color = if self.is_tab_disabled(index) {
                theme.text_disabled
            } else {
                theme.text
            };
            if let Some(title) = self.tab_title(index) {
                cx.centered_text(title, header, None, color);
            }
        }
        if cx.focused {
            cx.outline(strip, theme.focus_outline, 1.0);
        }
    }
}
