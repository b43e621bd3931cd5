use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, OnceCell, Ref, RefCell};

use pagestop::{Axis, EdgeInsets, PagingConfiguration, Point, Rect, ScrollGeometry, Size, Viewport};

use crate::tween::{DEFAULT_SCROLL_ANIMATION_MS, Tween};
use crate::{
    DecelerationRate, KeyboardDismissMode, ScrollActivity, ScrollObserver, ScrollProperties,
    ScrollSurface, ShadowPager, SurfaceId,
};

/// State shared between a pageable container and its shadow pager.
///
/// The container owns the pager; the pager only holds a `Weak` back to this.
pub(crate) struct Container {
    this: Weak<Container>,
    pub(crate) native: RefCell<ScrollSurface>,
    pub(crate) paging_enabled: Cell<bool>,
    observer: RefCell<Option<Weak<dyn ScrollObserver>>>,
    pager: OnceCell<Rc<ShadowPager>>,
    animation: Cell<Option<Tween>>,
    pub(crate) attached_drag_inputs: RefCell<Vec<SurfaceId>>,
    pub(crate) auxiliary_surfaces: RefCell<Vec<SurfaceId>>,
}

impl Container {
    fn new(frame: Rect) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            native: RefCell::new(ScrollSurface::new(frame)),
            paging_enabled: Cell::new(true),
            observer: RefCell::new(None),
            pager: OnceCell::new(),
            animation: Cell::new(None),
            attached_drag_inputs: RefCell::new(Vec::new()),
            auxiliary_surfaces: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn id(&self) -> SurfaceId {
        self.native.borrow().id()
    }

    /// The shadow pager, created on first use.
    pub(crate) fn pager(&self) -> &Rc<ShadowPager> {
        self.pager
            .get_or_init(|| ShadowPager::attach(self.this.clone()))
    }

    pub(crate) fn observer(&self) -> Option<Rc<dyn ScrollObserver>> {
        self.observer.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Native content-offset write plus the container's change hook.
    pub(crate) fn write_content_offset(&self, offset: Point) {
        let changed = {
            let mut native = self.native.borrow_mut();
            let changed = native.content_offset() != offset;
            native.set_content_offset(offset);
            changed
        };
        if !changed {
            return;
        }
        self.notify_did_scroll();
        self.pager().update_for_bounds_change();
    }

    /// Moves the container itself, bypassing the pager. Used while paging is disabled.
    fn scroll_natively(&self, offset: Point, animated: bool) {
        if !animated {
            self.animation.set(None);
            self.write_content_offset(offset);
            return;
        }
        let from = self.native.borrow().content_offset();
        self.animation
            .set(Some(Tween::new(from, offset, DEFAULT_SCROLL_ANIMATION_MS)));
    }

    fn tick(&self, now_ms: u64) -> bool {
        let Some(mut tween) = self.animation.get() else {
            return false;
        };
        tween.begin(now_ms);
        if tween.is_done(now_ms) {
            self.animation.set(None);
            self.write_content_offset(tween.to);
            if let Some(observer) = self.observer() {
                observer.did_end_scrolling_animation(self.id());
            }
            return false;
        }
        self.animation.set(Some(tween));
        self.write_content_offset(tween.sample(now_ms));
        true
    }

    fn notify_did_scroll(&self) {
        if let Some(observer) = self.observer() {
            observer.did_scroll(self.id());
        }
    }

    fn update_scroll_properties(&self, f: impl FnOnce(&mut ScrollProperties)) {
        let changed = {
            let mut native = self.native.borrow_mut();
            let before = native.properties;
            f(&mut native.properties);
            native.properties != before
        };
        if changed {
            self.pager().update_properties();
        }
    }
}

/// The shared core of [`crate::PageableListView`] and [`crate::PageableGridView`].
///
/// Reads pass through to the native surface. Writes to anything that affects scrolling also
/// re-run the matching shadow pager step, so the pager and the container stay two projections of
/// the same scroll position.
///
/// Dropping this tears down the pager's owner: any `Rc<ShadowPager>` still held by the host keeps
/// working, but every synchronization step becomes a no-op.
pub struct PageableScrollView {
    inner: Rc<Container>,
}

impl PageableScrollView {
    pub fn new(frame: Rect) -> Self {
        let view = Self {
            inner: Container::new(frame),
        };
        view.inner.pager().update_properties();
        view
    }

    pub fn id(&self) -> SurfaceId {
        self.inner.id()
    }

    /// The native surface state (read-only).
    pub fn native(&self) -> Ref<'_, ScrollSurface> {
        self.inner.native.borrow()
    }

    /// A snapshot of the container geometry the resolver works against.
    pub fn viewport(&self) -> Viewport {
        Viewport::capture(&*self.inner.native.borrow())
    }

    /// The surface that receives drag input while paging is enabled. Host toolkits deliver touch
    /// and deceleration updates for paging drags here.
    pub fn pager(&self) -> Rc<ShadowPager> {
        Rc::clone(self.inner.pager())
    }

    pub fn paging_configuration(&self) -> PagingConfiguration {
        self.inner.pager().configuration()
    }

    pub fn set_paging_configuration(&self, configuration: PagingConfiguration) {
        self.inner.pager().set_configuration(configuration);
    }

    /// Applies `f` to a copy of the current configuration and sets the result.
    pub fn update_paging_configuration(&self, f: impl FnOnce(&mut PagingConfiguration)) {
        let mut next = self.paging_configuration();
        f(&mut next);
        self.set_paging_configuration(next);
    }

    pub fn set_observer<O: ScrollObserver + 'static>(&self, observer: &Rc<O>) {
        let observer: Weak<O> = Rc::downgrade(observer);
        let observer: Weak<dyn ScrollObserver> = observer;
        *self.inner.observer.borrow_mut() = Some(observer);
        self.inner.pager().update_properties();
    }

    pub fn clear_observer(&self) {
        self.inner.observer.borrow_mut().take();
        self.inner.pager().update_properties();
    }

    pub fn observer(&self) -> Option<Rc<dyn ScrollObserver>> {
        self.inner.observer()
    }

    // Geometry

    pub fn bounds(&self) -> Rect {
        self.inner.native.borrow().bounds()
    }

    /// Bounds write. The origin is the content offset; a size change also resizes the pages.
    pub fn set_bounds(&self, bounds: Rect) {
        let (moved, resized) = {
            let mut native = self.inner.native.borrow_mut();
            let before = native.bounds();
            native.set_bounds(bounds);
            (before.origin != bounds.origin, before.size != bounds.size)
        };
        if moved {
            self.inner.animation.set(None);
            self.inner.notify_did_scroll();
        }
        let pager = self.inner.pager();
        pager.update_for_bounds_change();
        if resized {
            pager.update_size();
        }
    }

    /// Resizes the container. The pager ignores the intermediate geometry; call
    /// [`Self::layout_subviews`] to resync page bounds afterwards.
    pub fn set_frame(&self, frame: Rect) {
        self.inner.pager().ignore_parent_changes(|| {
            let mut native = self.inner.native.borrow_mut();
            let origin = native.content_offset();
            native.set_bounds(Rect {
                origin,
                size: frame.size,
            });
        });
    }

    /// The layout pass: recomputes the pager's page bounds and content size, then re-projects
    /// the pager offset onto the container.
    pub fn layout_subviews(&self) {
        self.inner.pager().update_size();
    }

    pub fn content_offset(&self) -> Point {
        self.inner.native.borrow().content_offset()
    }

    /// Writes the container offset directly; the pager follows in pager space.
    pub fn set_content_offset(&self, offset: Point) {
        self.inner.animation.set(None);
        self.inner.write_content_offset(offset);
    }

    /// Scrolls to a container-space offset, routed through the pager so that page physics and
    /// animation run on the shadow surface. With paging disabled the container animates itself.
    pub fn set_content_offset_animated(&self, offset: Point, animated: bool) {
        let configuration = self.paging_configuration();
        let pager_offset =
            configuration.pager_content_offset_for(offset, &*self.inner.native.borrow());
        self.scroll_to_pager_offset(pager_offset, animated);
    }

    pub fn scroll_rect_to_visible(&self, rect: Rect, animated: bool) {
        if !self.is_paging_enabled() {
            let offset = self.inner.native.borrow().offset_revealing(rect);
            self.inner.scroll_natively(offset, animated);
            return;
        }
        self.inner.animation.set(None);
        self.inner.pager().scroll_rect_to_visible(rect, animated);
    }

    pub(crate) fn scroll_to_pager_offset(&self, pager_offset: Point, animated: bool) {
        if self.is_paging_enabled() {
            self.inner.animation.set(None);
            self.inner.pager().set_content_offset(pager_offset, animated);
            return;
        }
        let configuration = self.paging_configuration();
        let offset =
            configuration.container_content_offset_for(pager_offset, &*self.inner.native.borrow());
        self.inner.scroll_natively(offset, animated);
    }

    /// Advances an animated scroll. Returns `true` while an animation is still running.
    pub fn tick(&self, now_ms: u64) -> bool {
        let pager = self.inner.pager().tick(now_ms);
        let native = self.inner.tick(now_ms);
        pager || native
    }

    /// Whether a programmatic scroll is still running, on the pager or on the container.
    pub fn is_animating(&self) -> bool {
        self.inner.pager().is_animating() || self.inner.animation.get().is_some()
    }

    pub fn content_size(&self) -> Size {
        self.inner.native.borrow().content_size()
    }

    pub fn set_content_size(&self, content_size: Size) {
        {
            let mut native = self.inner.native.borrow_mut();
            if native.content_size() == content_size {
                return;
            }
            native.set_content_size(content_size);
        }
        self.inner.pager().update_size();
    }

    pub fn adjusted_content_inset(&self) -> EdgeInsets {
        self.inner.native.borrow().adjusted_content_inset()
    }

    /// The inset-change notification: safe area or content inset changed.
    pub fn set_adjusted_content_inset(&self, insets: EdgeInsets) {
        {
            let mut native = self.inner.native.borrow_mut();
            if native.adjusted_content_inset() == insets {
                return;
            }
            native.set_adjusted_content_inset(insets);
        }
        let pager = self.inner.pager();
        pager.update_properties();
        pager.update_size();
    }

    /// `floor(offset / max(1, viewport extent))` along `axis`.
    pub fn current_page_index(&self, axis: Axis) -> i64 {
        let native = self.inner.native.borrow();
        pagestop::page_index(
            native.content_offset().along(axis),
            native.viewport_size().along(axis),
        )
    }

    // Scroll properties

    pub fn properties(&self) -> ScrollProperties {
        self.inner.native.borrow().properties
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.properties().scroll_enabled
    }

    pub fn set_scroll_enabled(&self, enabled: bool) {
        self.inner
            .update_scroll_properties(|p| p.scroll_enabled = enabled);
    }

    pub fn bounces(&self) -> bool {
        self.properties().bounces
    }

    pub fn set_bounces(&self, bounces: bool) {
        self.inner.update_scroll_properties(|p| p.bounces = bounces);
    }

    pub fn always_bounce_vertical(&self) -> bool {
        self.properties().always_bounce_vertical
    }

    pub fn set_always_bounce_vertical(&self, value: bool) {
        self.inner
            .update_scroll_properties(|p| p.always_bounce_vertical = value);
    }

    pub fn always_bounce_horizontal(&self) -> bool {
        self.properties().always_bounce_horizontal
    }

    pub fn set_always_bounce_horizontal(&self, value: bool) {
        self.inner
            .update_scroll_properties(|p| p.always_bounce_horizontal = value);
    }

    pub fn bounces_zoom(&self) -> bool {
        self.properties().bounces_zoom
    }

    pub fn set_bounces_zoom(&self, value: bool) {
        self.inner.update_scroll_properties(|p| p.bounces_zoom = value);
    }

    pub fn deceleration_rate(&self) -> DecelerationRate {
        self.properties().deceleration_rate
    }

    pub fn set_deceleration_rate(&self, rate: DecelerationRate) {
        self.inner
            .update_scroll_properties(|p| p.deceleration_rate = rate);
    }

    pub fn is_directional_lock_enabled(&self) -> bool {
        self.properties().directional_lock_enabled
    }

    pub fn set_directional_lock_enabled(&self, enabled: bool) {
        self.inner
            .update_scroll_properties(|p| p.directional_lock_enabled = enabled);
    }

    pub fn keyboard_dismiss_mode(&self) -> KeyboardDismissMode {
        self.properties().keyboard_dismiss_mode
    }

    pub fn set_keyboard_dismiss_mode(&self, mode: KeyboardDismissMode) {
        self.inner
            .update_scroll_properties(|p| p.keyboard_dismiss_mode = mode);
    }

    pub fn shows_vertical_scroll_indicator(&self) -> bool {
        self.properties().shows_vertical_scroll_indicator
    }

    pub fn set_shows_vertical_scroll_indicator(&self, shows: bool) {
        self.inner
            .update_scroll_properties(|p| p.shows_vertical_scroll_indicator = shows);
    }

    pub fn shows_horizontal_scroll_indicator(&self) -> bool {
        self.properties().shows_horizontal_scroll_indicator
    }

    pub fn set_shows_horizontal_scroll_indicator(&self, shows: bool) {
        self.inner
            .update_scroll_properties(|p| p.shows_horizontal_scroll_indicator = shows);
    }

    /// Whether custom paging is on. Enabled by default.
    ///
    /// The container's native paging never runs; this flag decides whether the shadow pager
    /// drives the container.
    pub fn is_paging_enabled(&self) -> bool {
        self.inner.paging_enabled.get()
    }

    pub fn set_paging_enabled(&self, enabled: bool) {
        self.inner.paging_enabled.set(enabled);
        self.inner.pager().update_properties();
    }

    // Drag state

    pub fn is_tracking(&self) -> bool {
        self.inner.native.borrow().activity.tracking || self.inner.pager().activity().tracking
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.native.borrow().activity.dragging || self.inner.pager().activity().dragging
    }

    pub fn is_decelerating(&self) -> bool {
        self.inner.native.borrow().activity.decelerating
            || self.inner.pager().activity().decelerating
    }

    /// Reports native (non-paging) drag activity on the container itself.
    pub fn set_native_activity(&self, activity: ScrollActivity) {
        self.inner.native.borrow_mut().activity = activity;
    }

    /// Whether the container's own drag input is enabled.
    pub fn is_drag_enabled(&self) -> bool {
        self.inner.native.borrow().drag_enabled
    }

    /// The surface whose drag input currently receives touches on this container.
    pub fn active_drag_surface(&self) -> SurfaceId {
        let pager = self.inner.pager();
        let attached = self.inner.attached_drag_inputs.borrow();
        if pager.is_drag_enabled() && attached.contains(&pager.id()) {
            return pager.id();
        }
        self.id()
    }

    /// Drag inputs attached to this container in addition to its own.
    pub fn attached_drag_inputs(&self) -> Vec<SurfaceId> {
        self.inner.attached_drag_inputs.borrow().clone()
    }

    /// Auxiliary child surfaces attached to this container.
    pub fn auxiliary_surfaces(&self) -> Vec<SurfaceId> {
        self.inner.auxiliary_surfaces.borrow().clone()
    }
}

impl core::fmt::Debug for PageableScrollView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageableScrollView")
            .field("id", &self.id())
            .field("bounds", &self.bounds())
            .field("content_size", &self.content_size())
            .field("paging_enabled", &self.is_paging_enabled())
            .field("paging_configuration", &self.paging_configuration())
            .finish_non_exhaustive()
    }
}
