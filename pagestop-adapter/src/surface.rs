use core::sync::atomic::{AtomicU64, Ordering};

use pagestop::{EdgeInsets, Point, Rect, ScrollGeometry, Size};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a scrollable surface, used as the subject of observer callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Identity of a view handed out by zoom callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecelerationRate {
    #[default]
    Normal,
    Fast,
    Custom(f64),
}

impl DecelerationRate {
    /// Per-millisecond velocity retention.
    pub fn value(self) -> f64 {
        match self {
            Self::Normal => 0.998,
            Self::Fast => 0.99,
            Self::Custom(value) => value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardDismissMode {
    #[default]
    None,
    OnDrag,
    Interactive,
}

/// The scroll behavior flags of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollProperties {
    pub scroll_enabled: bool,
    pub bounces: bool,
    pub always_bounce_vertical: bool,
    pub always_bounce_horizontal: bool,
    pub bounces_zoom: bool,
    pub deceleration_rate: DecelerationRate,
    pub directional_lock_enabled: bool,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    pub shows_vertical_scroll_indicator: bool,
    pub shows_horizontal_scroll_indicator: bool,
    pub scrolls_to_top: bool,
}

impl Default for ScrollProperties {
    fn default() -> Self {
        Self {
            scroll_enabled: true,
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            bounces_zoom: true,
            deceleration_rate: DecelerationRate::Normal,
            directional_lock_enabled: false,
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            shows_vertical_scroll_indicator: true,
            shows_horizontal_scroll_indicator: true,
            scrolls_to_top: true,
        }
    }
}

/// What the host's gesture and deceleration machinery is currently doing with a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollActivity {
    pub tracking: bool,
    pub dragging: bool,
    pub decelerating: bool,
}

impl ScrollActivity {
    pub const IDLE: Self = Self {
        tracking: false,
        dragging: false,
        decelerating: false,
    };

    pub const DRAGGING: Self = Self {
        tracking: true,
        dragging: true,
        decelerating: false,
    };

    pub const DECELERATING: Self = Self {
        tracking: false,
        dragging: false,
        decelerating: true,
    };
}

/// A plain model of a native scrollable surface.
///
/// This holds state only: it does no synchronization of its own. Setters are the "native"
/// behavior; the pageable containers wrap them with the paging hooks.
#[derive(Clone, Debug)]
pub struct ScrollSurface {
    id: SurfaceId,
    bounds: Rect,
    content_size: Size,
    adjusted_content_inset: EdgeInsets,
    pub(crate) properties: ScrollProperties,
    pub(crate) paging_enabled: bool,
    pub(crate) hidden: bool,
    pub(crate) user_interaction_enabled: bool,
    pub(crate) drag_enabled: bool,
    pub(crate) activity: ScrollActivity,
}

impl ScrollSurface {
    pub fn new(frame: Rect) -> Self {
        Self {
            id: SurfaceId::next(),
            bounds: Rect {
                origin: Point::ZERO,
                size: frame.size,
            },
            content_size: Size::ZERO,
            adjusted_content_inset: EdgeInsets::ZERO,
            properties: ScrollProperties::default(),
            paging_enabled: false,
            hidden: false,
            user_interaction_enabled: true,
            drag_enabled: true,
            activity: ScrollActivity::IDLE,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn properties(&self) -> &ScrollProperties {
        &self.properties
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    /// Whether this surface's own drag input is enabled.
    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn activity(&self) -> ScrollActivity {
        self.activity
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub(crate) fn set_content_offset(&mut self, offset: Point) {
        self.bounds.origin = offset;
    }

    pub(crate) fn set_content_size(&mut self, content_size: Size) {
        self.content_size = content_size;
    }

    pub(crate) fn set_adjusted_content_inset(&mut self, insets: EdgeInsets) {
        self.adjusted_content_inset = insets;
    }

    /// The offset the native surface would scroll to so that `rect` becomes visible, moving as
    /// little as possible. Rects larger than the bounds align to their leading edge.
    pub fn offset_revealing(&self, rect: Rect) -> Point {
        let mut offset = self.bounds.origin;
        for axis in pagestop::Axis::BOTH {
            let start = offset.along(axis);
            let extent = self.bounds.size.along(axis);
            let min = rect.min_along(axis);
            let max = rect.max_along(axis);
            let next = if min < start || max - min > extent {
                min
            } else if max > start + extent {
                max - extent
            } else {
                start
            };
            offset.set_along(axis, next);
        }
        offset
    }
}

impl ScrollGeometry for ScrollSurface {
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
