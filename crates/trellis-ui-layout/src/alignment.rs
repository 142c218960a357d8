//! Alignment of content inside a larger extent

/// Alignment along a single axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxAlignment {
    /// Align to the leading edge.
    #[default]
    Begin,
    /// Align to the middle.
    Center,
    /// Align to the trailing edge.
    End,
}

impl BoxAlignment {
    /// Offset of `content` inside `available`. Overflowing content is
    /// pinned to the leading edge.
    pub fn offset(&self, available: f32, content: f32) -> f32 {
        match self {
            BoxAlignment::Begin => 0.0,
            BoxAlignment::Center => ((available - content) / 2.0).max(0.0),
            BoxAlignment::End => (available - content).max(0.0),
        }
    }

    /// Fraction of the leftover space placed before the content.
    pub fn factor(&self) -> f32 {
        match self {
            BoxAlignment::Begin => 0.0,
            BoxAlignment::Center => 0.5,
            BoxAlignment::End => 1.0,
        }
    }
}
