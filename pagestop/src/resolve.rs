use crate::config::AxisAlignment;
use crate::{Axis, EdgeInsets, PagingConfiguration, Point, Rect, RectEdge, ScrollGeometry, Size};

/// Which way [`PagingConfiguration::resolved_content_offset`] transforms an offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Container offset to shadow pager offset (subtracts the anchor).
    ContainerToPager,
    /// Shadow pager offset to container offset (adds the anchor).
    PagerToContainer,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::ContainerToPager => -1.0,
            Self::PagerToContainer => 1.0,
        }
    }
}

/// Pure resolver functions.
///
/// All of these take the container's viewport size and adjusted content insets as explicit
/// arguments. They never fail: available extents are clamped to `>= 0` and every divisor is
/// floored at `1`.
impl PagingConfiguration {
    /// Per edge: `size_insets[edge]`, plus the container inset when that edge is in
    /// `content_inset_edges_to_use`.
    pub fn resolved_paging_insets(&self, content_insets: EdgeInsets) -> EdgeInsets {
        let used = |edge: RectEdge| {
            if self.content_inset_edges_to_use.contains(edge) {
                content_insets.edge(edge)
            } else {
                0.0
            }
        };
        EdgeInsets {
            top: self.size_insets.top + used(RectEdge::TOP),
            left: self.size_insets.left + used(RectEdge::LEFT),
            bottom: self.size_insets.bottom + used(RectEdge::BOTTOM),
            right: self.size_insets.right + used(RectEdge::RIGHT),
        }
    }

    /// The extent of one page. Unused axes get the whole available extent.
    pub fn resolved_page_size(&self, viewport_size: Size, content_insets: EdgeInsets) -> Size {
        let insets = self.resolved_paging_insets(content_insets);
        let mut out = Size::ZERO;
        for axis in Axis::BOTH {
            let available =
                (viewport_size.along(axis) - insets.near(axis) - insets.far(axis)).max(0.0);
            out.set_along(axis, self.size.along(axis).resolve(available));
        }
        out
    }

    /// The position, per axis, that a page's aligned edge (or center) is pinned to.
    ///
    /// Unused axes have an anchor of `0`.
    pub fn anchor(&self, viewport_size: Size, content_insets: EdgeInsets) -> Point {
        let insets = self.resolved_paging_insets(content_insets);
        let page = self.resolved_page_size(viewport_size, content_insets);
        let mut out = Point::ZERO;
        for axis in Axis::BOTH {
            if self.size.along(axis).is_unused() {
                continue;
            }
            let near = insets.near(axis);
            let far = insets.far(axis);
            let extent = viewport_size.along(axis);
            let page = page.along(axis);
            let position = &self.position_insets;
            let anchor = match self.alignment.along(axis) {
                AxisAlignment::Near => near + position.near(axis),
                AxisAlignment::Center => {
                    near + (extent - near - far) * 0.5 - page * 0.5 + position.near(axis)
                        - position.far(axis)
                }
                AxisAlignment::Far => extent - page - far - position.far(axis),
            };
            out.set_along(axis, anchor);
        }
        out
    }

    /// Transforms `offset` between container space and pager space.
    ///
    /// For fixed inputs the two directions are exact inverses; unused axes pass through
    /// untouched.
    pub fn resolved_content_offset(
        &self,
        offset: Point,
        viewport_size: Size,
        content_insets: EdgeInsets,
        direction: Direction,
    ) -> Point {
        let anchor = self.anchor(viewport_size, content_insets);
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            pwarn!(?anchor, "resolved_content_offset: non-finite anchor");
            debug_assert!(
                anchor.x.is_finite() && anchor.y.is_finite(),
                "resolved_content_offset: non-finite anchor ({anchor:?})"
            );
        }

        let mut out = offset;
        for axis in Axis::BOTH {
            if self.size.along(axis).is_unused() {
                continue;
            }
            out.set_along(
                axis,
                offset.along(axis) + direction.sign() * anchor.along(axis),
            );
        }
        out
    }

    pub fn to_pager_space(
        &self,
        container_offset: Point,
        viewport_size: Size,
        content_insets: EdgeInsets,
    ) -> Point {
        self.resolved_content_offset(
            container_offset,
            viewport_size,
            content_insets,
            Direction::ContainerToPager,
        )
    }

    pub fn to_container_space(
        &self,
        pager_offset: Point,
        viewport_size: Size,
        content_insets: EdgeInsets,
    ) -> Point {
        self.resolved_content_offset(
            pager_offset,
            viewport_size,
            content_insets,
            Direction::PagerToContainer,
        )
    }

    /// Snaps `target` (e.g. an item frame) to the pager-space offset of the page containing its
    /// leading edge. Unused axes contribute `0`.
    pub fn paged_content_offset(
        &self,
        target: Rect,
        viewport_size: Size,
        content_insets: EdgeInsets,
    ) -> Point {
        let page = self.resolved_page_size(viewport_size, content_insets);
        let mut out = Point::ZERO;
        for axis in Axis::BOTH {
            if self.size.along(axis).is_unused() {
                continue;
            }
            let extent = page.along(axis);
            out.set_along(axis, floor(target.min_along(axis) / extent.max(1.0)) * extent);
        }
        out
    }

    /// Bounds for a shadow pager: `pager_origin` kept, size set to one page.
    pub fn resolved_pager_bounds<G: ScrollGeometry + ?Sized>(
        &self,
        container: &G,
        pager_origin: Point,
    ) -> Rect {
        Rect {
            origin: pager_origin,
            size: self.page_size_for(container),
        }
    }

    pub fn page_size_for<G: ScrollGeometry + ?Sized>(&self, container: &G) -> Size {
        self.resolved_page_size(container.viewport_size(), container.adjusted_content_inset())
    }

    pub fn pager_content_offset_for<G: ScrollGeometry + ?Sized>(
        &self,
        container_offset: Point,
        container: &G,
    ) -> Point {
        self.to_pager_space(
            container_offset,
            container.viewport_size(),
            container.adjusted_content_inset(),
        )
    }

    pub fn container_content_offset_for<G: ScrollGeometry + ?Sized>(
        &self,
        pager_offset: Point,
        container: &G,
    ) -> Point {
        self.to_container_space(
            pager_offset,
            container.viewport_size(),
            container.adjusted_content_inset(),
        )
    }

    pub fn paged_content_offset_for<G: ScrollGeometry + ?Sized>(
        &self,
        target: Rect,
        container: &G,
    ) -> Point {
        self.paged_content_offset(
            target,
            container.viewport_size(),
            container.adjusted_content_inset(),
        )
    }
}

/// `floor(offset / max(1, extent))`, saturating on overflow.
pub fn page_index(offset: f64, extent: f64) -> i64 {
    floor(offset / extent.max(1.0)) as i64
}

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(not(feature = "std"))]
fn floor(value: f64) -> f64 {
    // Every f64 at or above 2^52 in magnitude is already integral.
    if !value.is_finite() || value.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    let truncated = value as i64 as f64;
    if truncated > value {
        truncated - 1.0
    } else {
        truncated
    }
}
