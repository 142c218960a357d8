use super::{DrawContext, InputContext, InputResponse, WidgetBehavior};
use crate::event::EventKind;
use crate::resources::MeasureContext;
use std::any::Any;
use trellis_ui_graphics::Size;

/// Host-defined widget content.
///
/// Only the host downcasts through `as_any`; the tree itself never needs
/// to know the concrete type.
pub trait CustomWidget: Any {
    fn minimum_size(&self, _cx: &MeasureContext<'_>) -> Size {
        Size::ZERO
    }

    fn gui_input(&mut self, _event: &EventKind, _cx: &InputContext<'_>) -> InputResponse {
        InputResponse::ignored()
    }

    fn draw(&self, _cx: &mut DrawContext<'_>) {}

    fn type_name(&self) -> &'static str {
        "Custom"
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl WidgetBehavior for Box<dyn CustomWidget> {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        CustomWidget::minimum_size(&**self, cx)
    }

    fn gui_input(&mut self, event: &EventKind, cx: &InputContext<'_>) -> InputResponse {
        CustomWidget::gui_input(&mut **self, event, cx)
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        CustomWidget::draw(&**self, cx)
    }
}
