//! Distribution of children along a linear axis

use crate::BoxAlignment;
use smallvec::SmallVec;

/// A child as seen by a linear distribution along the main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearItem {
    /// Minimum extent along the main axis.
    pub min: f32,
    /// Whether this child takes a share of the leftover space.
    pub expand: bool,
    /// Relative weight of this child's share among expanding children.
    pub stretch_ratio: f32,
}

impl LinearItem {
    pub fn fixed(min: f32) -> Self {
        Self {
            min,
            expand: false,
            stretch_ratio: 1.0,
        }
    }

    pub fn expanding(min: f32, stretch_ratio: f32) -> Self {
        Self {
            min,
            expand: true,
            stretch_ratio,
        }
    }

    fn weight(&self) -> f32 {
        if self.expand {
            self.stretch_ratio.max(0.0)
        } else {
            0.0
        }
    }
}

/// Slot assigned to a child: offset from the container origin and extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSlot {
    pub offset: f32,
    pub extent: f32,
}

pub type LinearSlots = SmallVec<[LinearSlot; 8]>;

/// Sum of minimum extents plus inter-child spacing.
pub fn linear_minimum(items: &[LinearItem], spacing: f32) -> f32 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f32 = items.iter().map(|item| item.min).sum();
    sum + spacing * (items.len() as f32 - 1.0)
}

/// Distributes `available` along the main axis.
///
/// Every child starts at its minimum. Leftover space goes to expanding
/// children proportionally to their stretch ratio; when no child expands
/// the whole group is shifted by `alignment` instead.
pub fn distribute_linear(
    items: &[LinearItem],
    available: f32,
    spacing: f32,
    alignment: BoxAlignment,
) -> LinearSlots {
    let mut slots = LinearSlots::with_capacity(items.len());
    if items.is_empty() {
        return slots;
    }

    let total_min = linear_minimum(items, spacing);
    let leftover = available - total_min;
    let weight_sum: f32 = items.iter().map(LinearItem::weight).sum();

    let (start, share) = if leftover > 0.0 && weight_sum > 0.0 {
        (0.0, leftover / weight_sum)
    } else {
        (alignment.offset(available, total_min), 0.0)
    };

    let mut cursor = start;
    for item in items {
        let extent = item.min + item.weight() * share;
        slots.push(LinearSlot {
            offset: cursor,
            extent,
        });
        cursor += extent + spacing;
    }
    slots
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
