use trellis_ui_graphics::{Color, EdgeInsets};

/// Colors and paddings used by the built-in widgets when drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub text: Color,
    pub text_disabled: Color,
    pub panel_background: Color,
    pub panel_border: Color,
    pub panel_padding: EdgeInsets,
    pub button_normal: Color,
    pub button_hovered: Color,
    pub button_pressed: Color,
    pub button_disabled: Color,
    pub button_padding: EdgeInsets,
    pub focus_outline: Color,
    pub track: Color,
    pub grabber: Color,
    pub grabber_size: f32,
    pub progress_fill: Color,
    pub separator: Color,
    pub separator_thickness: f32,
    pub scrollbar: Color,
    pub tab_background: Color,
    pub tab_selected: Color,
    pub tooltip_background: Color,
    pub tooltip_padding: EdgeInsets,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::from_rgb_u8(0xE0, 0xE0, 0xE0),
            text_disabled: Color::from_rgb_u8(0x80, 0x80, 0x80),
            panel_background: Color::from_rgb_u8(0x2B, 0x2D, 0x31),
            panel_border: Color::from_rgb_u8(0x1E, 0x1F, 0x22),
            panel_padding: EdgeInsets::uniform(4.0),
            button_normal: Color::from_rgb_u8(0x3C, 0x3F, 0x45),
            button_hovered: Color::from_rgb_u8(0x4A, 0x4E, 0x56),
            button_pressed: Color::from_rgb_u8(0x2F, 0x6F, 0xD6),
            button_disabled: Color::from_rgb_u8(0x33, 0x34, 0x38),
            button_padding: EdgeInsets::symmetric(8.0, 4.0),
            focus_outline: Color::from_rgb_u8(0x5A, 0x9B, 0xF5),
            track: Color::from_rgb_u8(0x25, 0x26, 0x29),
            grabber: Color::from_rgb_u8(0xC8, 0xC8, 0xC8),
            grabber_size: 16.0,
            progress_fill: Color::from_rgb_u8(0x3D, 0xA3, 0x5D),
            separator: Color::from_rgb_u8(0x55, 0x58, 0x5E),
            separator_thickness: 4.0,
            scrollbar: Color::from_rgb_u8(0x6A, 0x6D, 0x73),
            tab_background: Color::from_rgb_u8(0x33, 0x35, 0x3A),
            tab_selected: Color::from_rgb_u8(0x45, 0x48, 0x50),
            tooltip_background: Color::from_rgba_u8(0x10, 0x10, 0x10, 0xE6),
            tooltip_padding: EdgeInsets::uniform(4.0),
        }
    }
}
