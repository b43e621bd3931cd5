use crate::{EdgeInsets, Point, Rect, Size};

/// The read-only capabilities the resolver needs from a scrollable surface.
///
/// Implement this for your toolkit's scroll container (or use [`Viewport`]) to call the
/// `*_for` conveniences on [`crate::PagingConfiguration`].
pub trait ScrollGeometry {
    /// The visible rectangle in content coordinates. Its origin is the content offset.
    fn bounds(&self) -> Rect;

    fn content_size(&self) -> Size;

    /// Insets after safe-area and other automatic adjustments.
    fn adjusted_content_inset(&self) -> EdgeInsets;

    fn content_offset(&self) -> Point {
        self.bounds().origin
    }

    fn viewport_size(&self) -> Size {
        self.bounds().size
    }
}

/// A lightweight, serializable snapshot of a scrollable surface's geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub bounds: Rect,
    pub content_size: Size,
    pub adjusted_content_inset: EdgeInsets,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect {
                origin: Point::ZERO,
                size,
            },
            ..Self::default()
        }
    }

    pub fn with_content_offset(mut self, offset: Point) -> Self {
        self.bounds.origin = offset;
        self
    }

    pub fn with_content_size(mut self, content_size: Size) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.adjusted_content_inset = insets;
        self
    }

    /// Captures the geometry of any [`ScrollGeometry`] implementor.
    pub fn capture(surface: &impl ScrollGeometry) -> Self {
        Self {
            bounds: surface.bounds(),
            content_size: surface.content_size(),
            adjusted_content_inset: surface.adjusted_content_inset(),
        }
    }
}

impl ScrollGeometry for Viewport {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn adjusted_content_inset(&self) -> EdgeInsets {
        self.adjusted_content_inset
    }
}
