use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use pagestop::{PagingConfiguration, Point, Rect, ScrollGeometry, Size};

use crate::container::Container;
use crate::tween::{DEFAULT_SCROLL_ANIMATION_MS, Tween};
use crate::{ScrollActivity, ScrollObserver, ScrollProperties, ScrollSurface, SurfaceId, ViewId};

/// A hidden, page-sized scroll surface that runs native paging physics on behalf of a
/// container.
///
/// The pager's bounds are exactly one page, so the host's native paging snaps it to page
/// boundaries. Every movement of the pager is projected onto the container through the
/// container's [`PagingConfiguration`], and every direct change to the container is projected
/// back. Two guards keep those projections from re-triggering each other:
///
/// - inward suppression: container changes are not pulled into the pager (held while the pager
///   writes the container offset, and during frame changes)
/// - outward suppression: pager bounds changes are not pushed to the container (held while the
///   pager resyncs its own offset from the container)
///
/// The pager holds only a `Weak` reference to its container. Once the container is gone every
/// operation is a no-op.
pub struct ShadowPager {
    parent: Weak<Container>,
    surface: RefCell<ScrollSurface>,
    stopper: SurfaceId,
    configuration: Cell<PagingConfiguration>,
    inward_suppressed: Cell<bool>,
    outward_suppressed: Cell<bool>,
    animation: Cell<Option<Tween>>,
}

/// Runs `f` with `flag` raised, restoring the previous value afterwards.
fn suppressed<R>(flag: &Cell<bool>, f: impl FnOnce() -> R) -> R {
    let prev = flag.replace(true);
    let out = f();
    flag.set(prev);
    out
}

impl ShadowPager {
    /// Creates the pager and attaches it to `parent`.
    ///
    /// The pager is wrapped in a non-scrollable "forwarding stopper" surface before being
    /// attached, so overscroll on the pager never bubbles into the container's own bounce
    /// handling.
    pub(crate) fn attach(parent: Weak<Container>) -> Rc<Self> {
        let mut surface = ScrollSurface::new(Rect::ZERO);
        surface.hidden = true;
        surface.paging_enabled = true;
        surface.user_interaction_enabled = false;
        surface.drag_enabled = false;
        surface.properties.scrolls_to_top = false;

        let pager = Rc::new(Self {
            parent,
            surface: RefCell::new(surface),
            stopper: SurfaceId::next(),
            configuration: Cell::new(PagingConfiguration::default()),
            inward_suppressed: Cell::new(false),
            outward_suppressed: Cell::new(false),
            animation: Cell::new(None),
        });

        if let Some(parent) = pager.parent.upgrade() {
            parent.native.borrow_mut().properties.scrolls_to_top = false;
            parent
                .auxiliary_surfaces
                .borrow_mut()
                .push(pager.stopper);
            parent.attached_drag_inputs.borrow_mut().push(pager.id());
            pdebug!(
                container = parent.id().get(),
                pager = pager.id().get(),
                "ShadowPager::attach"
            );
        }
        pager.update_properties();
        pager
    }

    pub fn id(&self) -> SurfaceId {
        self.surface.borrow().id()
    }

    pub fn configuration(&self) -> PagingConfiguration {
        self.configuration.get()
    }

    /// Replaces the configuration. An equal configuration is a no-op; anything else recomputes
    /// page bounds and resyncs the container offset once.
    pub fn set_configuration(&self, configuration: PagingConfiguration) {
        if self.configuration.get() == configuration {
            return;
        }
        self.configuration.set(configuration);
        pdebug!(?configuration, "ShadowPager::set_configuration");
        self.update_properties();
        self.update_size();
    }

    pub fn bounds(&self) -> Rect {
        self.surface.borrow().bounds()
    }

    pub fn content_offset(&self) -> Point {
        self.surface.borrow().content_offset()
    }

    pub fn content_size(&self) -> Size {
        self.surface.borrow().content_size()
    }

    pub fn properties(&self) -> ScrollProperties {
        self.surface.borrow().properties
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.surface.borrow().drag_enabled
    }

    pub fn is_hidden(&self) -> bool {
        self.surface.borrow().hidden
    }

    pub fn activity(&self) -> ScrollActivity {
        self.surface.borrow().activity
    }

    /// Recomputes page bounds and content size from the container, then pushes the resulting
    /// offset to the container.
    pub fn update_size(&self) {
        let Some(parent) = self.parent.upgrade() else {
            return;
        };
        let (bounds, content_size) = {
            let native = parent.native.borrow();
            let origin = self.content_offset();
            (
                self.configuration()
                    .resolved_pager_bounds(&*native, origin),
                native.content_size(),
            )
        };
        {
            let mut surface = self.surface.borrow_mut();
            surface.set_bounds(bounds);
            surface.set_content_size(content_size);
        }
        pdebug!(
            width = bounds.size.width,
            height = bounds.size.height,
            "ShadowPager::update_size"
        );
        self.update_parent_content_offset();
    }

    /// Pulls the container's offset into pager space after the container moved on its own.
    pub fn update_for_bounds_change(&self) {
        let Some(parent) = self.parent.upgrade() else {
            return;
        };
        if self.inward_suppressed.get() {
            return;
        }
        let offset = {
            let native = parent.native.borrow();
            self.configuration()
                .pager_content_offset_for(native.content_offset(), &*native)
        };
        ptrace!(x = offset.x, y = offset.y, "ShadowPager::update_for_bounds_change");
        suppressed(&self.outward_suppressed, || self.write_content_offset(offset));
    }

    /// Mirrors the container's scroll properties onto the pager and re-derives drag routing.
    pub fn update_properties(&self) {
        let Some(parent) = self.parent.upgrade() else {
            return;
        };
        let properties = parent.native.borrow().properties;
        self.surface.borrow_mut().properties = ScrollProperties {
            shows_vertical_scroll_indicator: false,
            shows_horizontal_scroll_indicator: false,
            scrolls_to_top: false,
            ..properties
        };
        self.update_drag_inputs(&parent);
    }

    /// While paging, the container's own drag input is off and the pager's is on, so touch
    /// tracking and deceleration run against page-sized bounds.
    fn update_drag_inputs(&self, parent: &Container) {
        let paging = parent.paging_enabled.get();
        self.surface.borrow_mut().drag_enabled = paging;
        parent.native.borrow_mut().drag_enabled = !paging;
    }

    /// Runs `f` without pulling container changes into the pager.
    pub fn ignore_parent_changes<R>(&self, f: impl FnOnce() -> R) -> R {
        suppressed(&self.inward_suppressed, f)
    }

    /// Moves the pager, either immediately or through an animation advanced by
    /// [`Self::tick`]. The container follows either way.
    pub fn set_content_offset(&self, offset: Point, animated: bool) {
        if !animated {
            self.animation.set(None);
            self.write_content_offset(offset);
            return;
        }
        let from = self.content_offset();
        self.animation
            .set(Some(Tween::new(from, offset, DEFAULT_SCROLL_ANIMATION_MS)));
    }

    pub fn scroll_rect_to_visible(&self, rect: Rect, animated: bool) {
        let offset = self.surface.borrow().offset_revealing(rect);
        self.set_content_offset(offset, animated);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.get().is_some()
    }

    /// Stops an animated scroll where it is. No end-of-animation callback is relayed.
    pub fn cancel_animation(&self) {
        self.animation.set(None);
    }

    /// Advances an animated scroll; the first tick after a request starts its clock.
    ///
    /// Returns `true` while the animation is still running.
    pub fn tick(&self, now_ms: u64) -> bool {
        let Some(mut tween) = self.animation.get() else {
            return false;
        };
        tween.begin(now_ms);
        if tween.is_done(now_ms) {
            self.animation.set(None);
            self.write_content_offset(tween.to);
            self.did_end_scrolling_animation(self.id());
            return false;
        }
        self.animation.set(Some(tween));
        self.write_content_offset(tween.sample(now_ms));
        true
    }

    /// The host's paging/deceleration engine moved the pager. Cancels any running animation.
    pub fn apply_native_offset(&self, offset: Point) {
        self.animation.set(None);
        self.write_content_offset(offset);
    }

    /// Reports what the host's gesture machinery is doing with the pager.
    pub fn set_activity(&self, activity: ScrollActivity) {
        self.surface.borrow_mut().activity = activity;
    }

    /// The non-scrollable surface wrapping the pager inside the container. It is the pager's
    /// nearest enclosing scroll surface, so overscroll stops there.
    pub fn forwarding_stopper(&self) -> SurfaceId {
        self.stopper
    }

    fn write_content_offset(&self, offset: Point) {
        let bounds = Rect {
            origin: offset,
            size: self.bounds().size,
        };
        self.set_bounds(bounds);
    }

    /// Pager bounds write plus the pager's change hook.
    fn set_bounds(&self, bounds: Rect) {
        self.surface.borrow_mut().set_bounds(bounds);
        if self.outward_suppressed.get() {
            return;
        }
        self.update_parent_content_offset();
    }

    /// Projects the pager offset onto the container. Skipped when the container is not paging.
    fn update_parent_content_offset(&self) {
        let Some(parent) = self.parent.upgrade() else {
            return;
        };
        if !parent.paging_enabled.get() {
            return;
        }
        let offset = {
            let native = parent.native.borrow();
            self.configuration()
                .container_content_offset_for(self.content_offset(), &*native)
        };
        ptrace!(x = offset.x, y = offset.y, "ShadowPager::update_parent_content_offset");
        suppressed(&self.inward_suppressed, || parent.write_content_offset(offset));
    }

    fn relay_target(&self) -> Option<(SurfaceId, Rc<dyn ScrollObserver>)> {
        let parent = self.parent.upgrade()?;
        let observer = parent.observer()?;
        Some((parent.id(), observer))
    }
}

/// The pager observes its own surface and relays every lifecycle callback to the container's
/// observer, with the container as subject.
impl ScrollObserver for ShadowPager {
    fn will_begin_dragging(&self, _scroll_view: SurfaceId) {
        if let Some((container, observer)) = self.relay_target() {
            observer.will_begin_dragging(container);
        }
    }

    fn will_end_dragging(
        &self,
        _scroll_view: SurfaceId,
        velocity: Point,
        target_content_offset: &mut Point,
    ) {
        if let Some((container, observer)) = self.relay_target() {
            observer.will_end_dragging(container, velocity, target_content_offset);
        }
    }

    fn did_end_dragging(&self, _scroll_view: SurfaceId, will_decelerate: bool) {
        if let Some((container, observer)) = self.relay_target() {
            observer.did_end_dragging(container, will_decelerate);
        }
    }

    fn will_begin_decelerating(&self, _scroll_view: SurfaceId) {
        if let Some((container, observer)) = self.relay_target() {
            observer.will_begin_decelerating(container);
        }
    }

    fn did_end_decelerating(&self, _scroll_view: SurfaceId) {
        if let Some((container, observer)) = self.relay_target() {
            observer.did_end_decelerating(container);
        }
    }

    fn did_end_scrolling_animation(&self, _scroll_view: SurfaceId) {
        if let Some((container, observer)) = self.relay_target() {
            observer.did_end_scrolling_animation(container);
        }
    }

    fn view_for_zooming(&self, _scroll_view: SurfaceId) -> Option<ViewId> {
        let (container, observer) = self.relay_target()?;
        observer.view_for_zooming(container)
    }

    fn will_begin_zooming(&self, _scroll_view: SurfaceId, view: Option<ViewId>) {
        if let Some((container, observer)) = self.relay_target() {
            observer.will_begin_zooming(container, view);
        }
    }

    fn did_end_zooming(&self, _scroll_view: SurfaceId, view: Option<ViewId>, scale: f64) {
        if let Some((container, observer)) = self.relay_target() {
            observer.did_end_zooming(container, view, scale);
        }
    }

    fn should_scroll_to_top(&self, _scroll_view: SurfaceId) -> bool {
        match self.relay_target() {
            Some((container, observer)) => observer.should_scroll_to_top(container),
            None => false,
        }
    }

    fn did_scroll_to_top(&self, _scroll_view: SurfaceId) {
        if let Some((container, observer)) = self.relay_target() {
            observer.did_scroll_to_top(container);
        }
    }
}

impl core::fmt::Debug for ShadowPager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShadowPager")
            .field("id", &self.id())
            .field("bounds", &self.bounds())
            .field("configuration", &self.configuration())
            .field("inward_suppressed", &self.inward_suppressed.get())
            .field("outward_suppressed", &self.outward_suppressed.get())
            .finish_non_exhaustive()
    }
}
