use crate::{EdgeInsets, RectEdge};

/// Describes the geometry of a single "page stop".
///
/// This is plain data: it never references a live surface, so the same configuration always
/// resolves to the same page geometry for the same viewport and insets. The resolver lives in
/// `resolve.rs` as inherent methods on this type.
///
/// The default configuration pages by the full visible area (after insets), aligned to the
/// top/leading edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingConfiguration {
    /// The size of each page.
    pub size: PageSize,

    /// Where a page is pinned inside the viewport.
    pub alignment: Alignment,

    /// Which of the container's adjusted content insets (safe area, etc.) take part in page
    /// positioning and sizing.
    ///
    /// Remove `RectEdge::TOP` to let pages ignore the top inset.
    pub content_inset_edges_to_use: RectEdge,

    /// Extra offset applied to each page stop.
    ///
    /// For example, `EdgeInsets::new(100.0, 0.0, 0.0, 0.0)` moves every stop 100 points away
    /// from the top edge.
    pub position_insets: EdgeInsets,

    /// Extra shrink applied to the visible area before a page size is derived from it.
    ///
    /// Only affects `Dimension::Fractional` (and `Dimension::Unused`) axes.
    pub size_insets: EdgeInsets,
}

impl Default for PagingConfiguration {
    fn default() -> Self {
        Self {
            size: PageSize::FULL,
            alignment: Alignment::default(),
            content_inset_edges_to_use: RectEdge::ALL,
            position_insets: EdgeInsets::ZERO,
            size_insets: EdgeInsets::ZERO,
        }
    }
}

impl PagingConfiguration {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: PageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_content_inset_edges(mut self, edges: RectEdge) -> Self {
        self.content_inset_edges_to_use = edges;
        self
    }

    pub fn with_position_insets(mut self, insets: EdgeInsets) -> Self {
        self.position_insets = insets;
        self
    }

    pub fn with_size_insets(mut self, insets: EdgeInsets) -> Self {
        self.size_insets = insets;
        self
    }
}

/// Page extent per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl PageSize {
    /// `fractional(1)` on both axes.
    pub const FULL: Self = Self {
        width: Dimension::Fractional(1.0),
        height: Dimension::Fractional(1.0),
    };

    /// `fractional_width(1)`; the vertical axis is not paged.
    pub const FULL_WIDTH: Self = Self::fractional_width(1.0);

    /// `fractional_height(1)`; the horizontal axis is not paged.
    pub const FULL_HEIGHT: Self = Self::fractional_height(1.0);

    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Pages have an absolute width; the vertical axis is not paged.
    pub const fn absolute_width(width: f64) -> Self {
        Self {
            width: Dimension::Absolute(width),
            height: Dimension::Unused,
        }
    }

    /// Pages have an absolute height; the horizontal axis is not paged.
    pub const fn absolute_height(height: f64) -> Self {
        Self {
            width: Dimension::Unused,
            height: Dimension::Absolute(height),
        }
    }

    /// Pages are a fraction of the visible width, minus all configured insets.
    pub const fn fractional_width(ratio: f64) -> Self {
        Self {
            width: Dimension::Fractional(ratio),
            height: Dimension::Unused,
        }
    }

    /// Pages are a fraction of the visible height, minus all configured insets.
    pub const fn fractional_height(ratio: f64) -> Self {
        Self {
            width: Dimension::Unused,
            height: Dimension::Fractional(ratio),
        }
    }

    pub fn along(&self, axis: crate::Axis) -> Dimension {
        match axis {
            crate::Axis::Horizontal => self.width,
            crate::Axis::Vertical => self.height,
        }
    }
}

/// A per-axis page extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// The axis is not paged: offsets pass through unchanged.
    #[default]
    Unused,
    /// A fixed extent.
    Absolute(f64),
    /// A fraction of the visible extent after insets. `1.0` is one full visible page.
    Fractional(f64),
}

impl Dimension {
    pub fn is_unused(self) -> bool {
        matches!(self, Self::Unused)
    }

    /// Resolves this dimension against the available (already inset) extent.
    pub fn resolve(self, available: f64) -> f64 {
        match self {
            Self::Unused => available,
            Self::Absolute(value) => value,
            Self::Fractional(ratio) => ratio * available,
        }
    }
}

/// Page alignment on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub vertical: VerticalAlignment,
    pub horizontal: HorizontalAlignment,
}

impl Alignment {
    /// Aligns pages to the top, taking all inset configuration into account.
    pub const TOP: Self = Self::new(VerticalAlignment::Top, HorizontalAlignment::Leading);
    /// Centers pages vertically.
    pub const CENTER_Y: Self = Self::new(VerticalAlignment::Center, HorizontalAlignment::Leading);
    /// Aligns pages to the bottom.
    pub const BOTTOM: Self = Self::new(VerticalAlignment::Bottom, HorizontalAlignment::Leading);
    /// Aligns pages to the leading edge.
    pub const LEADING: Self = Self::new(VerticalAlignment::Top, HorizontalAlignment::Leading);
    /// Centers pages horizontally.
    pub const CENTER_X: Self = Self::new(VerticalAlignment::Top, HorizontalAlignment::Center);
    /// Aligns pages to the trailing edge.
    pub const TRAILING: Self = Self::new(VerticalAlignment::Top, HorizontalAlignment::Trailing);

    pub const fn new(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Alignment collapsed to a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AxisAlignment {
    Near,
    Center,
    Far,
}

impl Alignment {
    pub(crate) fn along(&self, axis: crate::Axis) -> AxisAlignment {
        match axis {
            crate::Axis::Vertical => match self.vertical {
                VerticalAlignment::Top => AxisAlignment::Near,
                VerticalAlignment::Center => AxisAlignment::Center,
                VerticalAlignment::Bottom => AxisAlignment::Far,
            },
            crate::Axis::Horizontal => match self.horizontal {
                HorizontalAlignment::Leading => AxisAlignment::Near,
                HorizontalAlignment::Center => AxisAlignment::Center,
                HorizontalAlignment::Trailing => AxisAlignment::Far,
            },
        }
    }
}
