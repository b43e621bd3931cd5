use pagestop::Point;

use crate::{SurfaceId, ViewId};

/// Receives scroll-lifecycle callbacks for a surface.
///
/// Every method has a no-op default, so observers only implement what they need. Observers are
/// registered as non-owning references; keep your `Rc` alive for as long as you want callbacks.
///
/// When a pageable container is paging, the drag and deceleration physics run on its shadow
/// pager. Those callbacks are still delivered here with the container's [`SurfaceId`] as
/// `scroll_view`, so observers never see the shadow surface.
#[allow(unused_variables)]
pub trait ScrollObserver {
    fn did_scroll(&self, scroll_view: SurfaceId) {}

    fn will_begin_dragging(&self, scroll_view: SurfaceId) {}

    /// `target_content_offset` may be rewritten to change where deceleration ends.
    fn will_end_dragging(
        &self,
        scroll_view: SurfaceId,
        velocity: Point,
        target_content_offset: &mut Point,
    ) {
    }

    fn did_end_dragging(&self, scroll_view: SurfaceId, will_decelerate: bool) {}

    fn will_begin_decelerating(&self, scroll_view: SurfaceId) {}

    fn did_end_decelerating(&self, scroll_view: SurfaceId) {}

    fn did_end_scrolling_animation(&self, scroll_view: SurfaceId) {}

    fn view_for_zooming(&self, scroll_view: SurfaceId) -> Option<ViewId> {
        None
    }

    fn will_begin_zooming(&self, scroll_view: SurfaceId, view: Option<ViewId>) {}

    fn did_end_zooming(&self, scroll_view: SurfaceId, view: Option<ViewId>, scale: f64) {}

    fn should_scroll_to_top(&self, scroll_view: SurfaceId) -> bool {
        true
    }

    fn did_scroll_to_top(&self, scroll_view: SurfaceId) {}
}
