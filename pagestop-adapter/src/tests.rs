use crate::*;

use crate::pagestop::{
    Alignment, Axis, EdgeInsets, PageSize, PagingConfiguration, Point, Rect, RectEdge,
    ScrollGeometry, Size,
};
use crate::tween::DEFAULT_SCROLL_ANIMATION_MS;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// A value in `[start, end)` with quarter-point resolution.
    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let steps = ((end - start) * 4.0) as u64;
        start + (self.next_u64() % steps.max(1)) as f64 / 4.0
    }

    fn gen_point(&mut self) -> Point {
        Point::new(self.gen_f64(-500.0, 3000.0), self.gen_f64(-500.0, 3000.0))
    }
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<(&'static str, SurfaceId)>>,
    snap_to: Cell<Option<Point>>,
}

impl Recorder {
    fn push(&self, name: &'static str, scroll_view: SurfaceId) {
        self.events.borrow_mut().push((name, scroll_view));
    }

    fn count(&self, name: &str) -> usize {
        self.events.borrow().iter().filter(|(n, _)| *n == name).count()
    }

    fn last(&self) -> Option<(&'static str, SurfaceId)> {
        self.events.borrow().last().copied()
    }
}

impl ScrollObserver for Recorder {
    fn did_scroll(&self, scroll_view: SurfaceId) {
        self.push("did_scroll", scroll_view);
    }

    fn will_begin_dragging(&self, scroll_view: SurfaceId) {
        self.push("will_begin_dragging", scroll_view);
    }

    fn will_end_dragging(
        &self,
        scroll_view: SurfaceId,
        _velocity: Point,
        target_content_offset: &mut Point,
    ) {
        self.push("will_end_dragging", scroll_view);
        if let Some(snap_to) = self.snap_to.get() {
            *target_content_offset = snap_to;
        }
    }

    fn did_end_decelerating(&self, scroll_view: SurfaceId) {
        self.push("did_end_decelerating", scroll_view);
    }

    fn did_end_scrolling_animation(&self, scroll_view: SurfaceId) {
        self.push("did_end_scrolling_animation", scroll_view);
    }

    fn view_for_zooming(&self, scroll_view: SurfaceId) -> Option<ViewId> {
        self.push("view_for_zooming", scroll_view);
        Some(ViewId(7))
    }

    fn should_scroll_to_top(&self, scroll_view: SurfaceId) -> bool {
        self.push("should_scroll_to_top", scroll_view);
        false
    }
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn assert_point(actual: Point, expected: Point) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
}

/// A 390x600 container with laid-out pages.
fn view_with(configuration: PagingConfiguration) -> PageableScrollView {
    let view = PageableScrollView::new(Rect::new(0.0, 0.0, 390.0, 600.0));
    view.set_content_size(Size::new(4000.0, 6000.0));
    view.set_paging_configuration(configuration);
    view.layout_subviews();
    view
}

fn centered_half_width() -> PagingConfiguration {
    PagingConfiguration::new(PageSize::absolute_width(194.0)).with_alignment(Alignment::CENTER_X)
}

#[test]
fn pager_is_created_lazily_and_attached_once() {
    let view = PageableScrollView::new(Rect::new(0.0, 0.0, 390.0, 600.0));
    let pager = view.pager();
    assert!(Rc::ptr_eq(&pager, &view.pager()));

    assert!(pager.is_hidden());
    assert_ne!(pager.id(), view.id());
    assert_eq!(view.attached_drag_inputs(), [pager.id()]);
    assert_eq!(view.auxiliary_surfaces(), [pager.forwarding_stopper()]);
    assert!(!view.properties().scrolls_to_top);
    assert!(!pager.properties().scrolls_to_top);
}

#[test]
fn drag_routing_follows_paging_flag() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    assert!(view.is_paging_enabled());
    assert!(pager.is_drag_enabled());
    assert!(!view.is_drag_enabled());
    assert_eq!(view.active_drag_surface(), pager.id());

    view.set_paging_enabled(false);
    assert!(!pager.is_drag_enabled());
    assert!(view.is_drag_enabled());
    assert_eq!(view.active_drag_surface(), view.id());

    view.set_paging_enabled(true);
    assert_eq!(view.active_drag_surface(), pager.id());
}

#[test]
fn scroll_properties_are_mirrored_without_indicators() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    view.set_bounces(false);
    view.set_always_bounce_vertical(true);
    view.set_deceleration_rate(DecelerationRate::Fast);
    view.set_directional_lock_enabled(true);
    view.set_keyboard_dismiss_mode(KeyboardDismissMode::OnDrag);
    view.set_shows_vertical_scroll_indicator(true);
    view.set_shows_horizontal_scroll_indicator(true);

    let mirrored = pager.properties();
    assert!(!mirrored.bounces);
    assert!(mirrored.always_bounce_vertical);
    assert_eq!(mirrored.deceleration_rate, DecelerationRate::Fast);
    assert!(mirrored.directional_lock_enabled);
    assert_eq!(mirrored.keyboard_dismiss_mode, KeyboardDismissMode::OnDrag);
    assert!(!mirrored.shows_vertical_scroll_indicator);
    assert!(!mirrored.shows_horizontal_scroll_indicator);
    assert!(!mirrored.scrolls_to_top);

    view.set_scroll_enabled(false);
    assert!(!pager.properties().scroll_enabled);
}

#[test]
fn default_configuration_keeps_both_offsets_equal() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    assert_eq!(pager.bounds().size, Size::new(390.0, 600.0));
    assert_eq!(pager.content_size(), Size::new(4000.0, 6000.0));

    view.set_content_offset(Point::new(0.0, 1234.0));
    assert_point(pager.content_offset(), Point::new(0.0, 1234.0));
}

#[test]
fn centered_pages_shift_the_container_on_layout() {
    let view = view_with(centered_half_width());
    let pager = view.pager();

    assert_eq!(pager.bounds().size, Size::new(194.0, 600.0));
    assert_point(pager.content_offset(), Point::ZERO);
    assert_point(view.content_offset(), Point::new(98.0, 0.0));
}

#[test]
fn container_write_reaches_pager_without_echo() {
    let view = view_with(centered_half_width());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_content_offset(Point::new(500.0, 40.0));

    assert_eq!(recorder.count("did_scroll"), 1);
    assert_eq!(recorder.last(), Some(("did_scroll", view.id())));
    assert_point(view.content_offset(), Point::new(500.0, 40.0));
    assert_point(pager.content_offset(), Point::new(402.0, 40.0));
}

#[test]
fn repeated_container_write_is_silent() {
    let view = view_with(PagingConfiguration::default());
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_content_offset(Point::new(0.0, 300.0));
    view.set_content_offset(Point::new(0.0, 300.0));
    assert_eq!(recorder.count("did_scroll"), 1);
}

#[test]
fn native_pager_movement_projects_onto_container() {
    let view = view_with(centered_half_width());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    pager.apply_native_offset(Point::new(388.0, 0.0));

    assert_point(pager.content_offset(), Point::new(388.0, 0.0));
    assert_point(view.content_offset(), Point::new(486.0, 0.0));
    assert_eq!(recorder.count("did_scroll"), 1);
}

#[test]
fn offsets_stay_in_lockstep_under_random_writes() {
    let mut rng = Lcg::new(0x5eed);
    let view = view_with(
        PagingConfiguration::new(PageSize::fractional_height(0.5))
            .with_alignment(Alignment::CENTER_Y)
            .with_size_insets(EdgeInsets::new(10.0, 0.0, 30.0, 0.0)),
    );
    let pager = view.pager();

    for step in 0..500 {
        let configuration = view.paging_configuration();
        let geometry = view.viewport();
        if step % 2 == 0 {
            let offset = rng.gen_point();
            view.set_content_offset(offset);
            assert_point(view.content_offset(), offset);
            assert_point(
                pager.content_offset(),
                configuration.pager_content_offset_for(offset, &geometry),
            );
        } else {
            let offset = rng.gen_point();
            pager.apply_native_offset(offset);
            assert_point(pager.content_offset(), offset);
            assert_point(
                view.content_offset(),
                configuration.container_content_offset_for(offset, &geometry),
            );
        }
    }
}

#[test]
fn paging_disabled_pager_never_pushes_back() {
    let view = view_with(centered_half_width());
    let pager = view.pager();
    view.set_paging_enabled(false);

    let before = view.content_offset();
    pager.apply_native_offset(Point::new(600.0, 0.0));
    assert_point(view.content_offset(), before);

    // Programmatic requests go straight to the container.
    view.set_content_offset_animated(Point::new(300.0, 0.0), false);
    assert!(!view.is_animating());
    assert_point(view.content_offset(), Point::new(300.0, 0.0));
    assert_point(pager.content_offset(), Point::new(202.0, 0.0));
}

#[test]
fn paging_disabled_animates_the_container() {
    let view = view_with(centered_half_width());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);
    view.set_paging_enabled(false);

    view.set_content_offset_animated(Point::new(300.0, 0.0), true);
    assert!(view.is_animating());
    assert!(!pager.is_animating());
    assert_point(view.content_offset(), Point::new(98.0, 0.0));

    assert!(view.tick(0));
    assert!(view.tick(150));
    assert_point(view.content_offset(), Point::new(199.0, 0.0));

    assert!(!view.tick(DEFAULT_SCROLL_ANIMATION_MS));
    assert!(!view.is_animating());
    assert_point(view.content_offset(), Point::new(300.0, 0.0));
    assert_point(pager.content_offset(), Point::new(202.0, 0.0));
    assert_eq!(
        recorder.last(),
        Some(("did_end_scrolling_animation", view.id()))
    );
}

#[test]
fn direct_offset_write_cancels_container_animation() {
    let view = view_with(PagingConfiguration::default());
    view.set_paging_enabled(false);

    view.scroll_rect_to_visible(Rect::new(0.0, 2000.0, 100.0, 100.0), true);
    view.tick(0);
    view.set_content_offset(Point::new(0.0, 40.0));

    assert!(!view.is_animating());
    assert!(!view.tick(1_000));
    assert_point(view.content_offset(), Point::new(0.0, 40.0));
}

#[test]
fn equal_configuration_is_a_no_op() {
    let view = view_with(centered_half_width());
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_paging_configuration(centered_half_width());
    view.update_paging_configuration(|_| {});
    assert_eq!(recorder.count("did_scroll"), 0);

    view.update_paging_configuration(|c| c.size = PageSize::absolute_width(190.0));
    assert_eq!(view.pager().bounds().size.width, 190.0);
    assert_point(view.content_offset(), Point::new(100.0, 0.0));
    assert_eq!(recorder.count("did_scroll"), 1);
}

#[test]
fn frame_change_waits_for_layout() {
    let view = view_with(
        PagingConfiguration::new(PageSize::fractional_width(0.5))
            .with_alignment(Alignment::CENTER_X),
    );
    let pager = view.pager();
    assert_eq!(pager.bounds().size.width, 195.0);
    assert_point(view.content_offset(), Point::new(97.5, 0.0));

    view.set_frame(Rect::new(0.0, 0.0, 600.0, 600.0));
    assert_eq!(view.bounds().size.width, 600.0);
    assert_eq!(pager.bounds().size.width, 195.0);
    assert_point(view.content_offset(), Point::new(97.5, 0.0));

    view.layout_subviews();
    assert_eq!(pager.bounds().size.width, 300.0);
    assert_point(view.content_offset(), Point::new(150.0, 0.0));
}

#[test]
fn inset_change_resizes_pages() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    view.set_adjusted_content_inset(EdgeInsets::new(50.0, 0.0, 30.0, 0.0));

    assert_eq!(pager.bounds().size, Size::new(390.0, 520.0));
    assert_point(view.content_offset(), Point::new(0.0, 50.0));

    let ignored = view.paging_configuration().with_content_inset_edges(RectEdge::empty());
    view.set_paging_configuration(ignored);
    assert_eq!(pager.bounds().size, Size::new(390.0, 600.0));
    assert_point(view.content_offset(), Point::ZERO);
}

#[test]
fn animated_scroll_runs_on_tick() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_content_offset_animated(Point::new(0.0, 600.0), true);
    assert!(pager.is_animating());
    assert_point(view.content_offset(), Point::ZERO);

    assert!(view.tick(1_000));
    assert_point(view.content_offset(), Point::ZERO);

    assert!(view.tick(1_150));
    assert_point(view.content_offset(), Point::new(0.0, 300.0));

    assert!(!view.tick(1_300));
    assert_point(view.content_offset(), Point::new(0.0, 600.0));
    assert_point(pager.content_offset(), Point::new(0.0, 600.0));
    assert!(!pager.is_animating());
    assert_eq!(
        recorder.last(),
        Some(("did_end_scrolling_animation", view.id()))
    );
    assert_eq!(recorder.count("did_end_scrolling_animation"), 1);

    assert!(!view.tick(1_400));
}

#[test]
fn native_movement_cancels_animation() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_content_offset_animated(Point::new(0.0, 1200.0), true);
    view.tick(0);
    pager.apply_native_offset(Point::new(0.0, 600.0));

    assert!(!pager.is_animating());
    assert!(!view.tick(500));
    assert_point(view.content_offset(), Point::new(0.0, 600.0));
    assert_eq!(recorder.count("did_end_scrolling_animation"), 0);
}

#[test]
fn scroll_rect_to_visible_moves_the_pager() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    view.scroll_rect_to_visible(Rect::new(0.0, 1000.0, 100.0, 50.0), false);
    assert_point(pager.content_offset(), Point::new(0.0, 450.0));
    assert_point(view.content_offset(), Point::new(0.0, 450.0));

    // Already visible: nothing moves.
    view.scroll_rect_to_visible(Rect::new(0.0, 500.0, 100.0, 50.0), false);
    assert_point(view.content_offset(), Point::new(0.0, 450.0));

    view.set_paging_enabled(false);
    view.scroll_rect_to_visible(Rect::new(0.0, 100.0, 100.0, 50.0), false);
    assert_point(view.content_offset(), Point::new(0.0, 100.0));
}

#[test]
fn relayed_callbacks_name_the_container() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    pager.will_begin_dragging(pager.id());
    assert_eq!(recorder.last(), Some(("will_begin_dragging", view.id())));

    pager.did_end_decelerating(pager.id());
    assert_eq!(recorder.last(), Some(("did_end_decelerating", view.id())));

    assert_eq!(pager.view_for_zooming(pager.id()), Some(ViewId(7)));
    assert_eq!(recorder.last(), Some(("view_for_zooming", view.id())));

    assert!(!pager.should_scroll_to_top(pager.id()));
    assert_eq!(recorder.last(), Some(("should_scroll_to_top", view.id())));

    assert!(
        recorder
            .events
            .borrow()
            .iter()
            .all(|(_, subject)| *subject == view.id())
    );
}

#[test]
fn will_end_dragging_target_can_be_rewritten() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    let mut target = Point::new(0.0, 1800.0);
    pager.will_end_dragging(pager.id(), Point::new(0.0, 2.0), &mut target);
    assert_eq!(target, Point::new(0.0, 1800.0));

    recorder.snap_to.set(Some(Point::new(0.0, 1200.0)));
    pager.will_end_dragging(pager.id(), Point::new(0.0, 2.0), &mut target);
    assert_eq!(target, Point::new(0.0, 1200.0));
    assert_eq!(recorder.count("will_end_dragging"), 2);
}

#[test]
fn relay_without_observer_uses_conservative_answers() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();

    assert!(!pager.should_scroll_to_top(pager.id()));
    assert_eq!(pager.view_for_zooming(pager.id()), None);

    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);
    assert!(view.observer().is_some());
    drop(recorder);
    assert!(view.observer().is_none());
    pager.will_begin_dragging(pager.id());

    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);
    view.clear_observer();
    view.set_content_offset(Point::new(0.0, 10.0));
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn pager_is_nested_in_the_stopper() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let auxiliary = view.auxiliary_surfaces();
    assert!(auxiliary.contains(&pager.forwarding_stopper()));
    assert!(!auxiliary.contains(&pager.id()));
    assert_ne!(pager.forwarding_stopper(), view.id());
}

#[test]
fn drag_state_is_reported_from_either_surface() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    assert!(!view.is_tracking() && !view.is_dragging() && !view.is_decelerating());

    pager.set_activity(ScrollActivity::DRAGGING);
    assert!(view.is_tracking());
    assert!(view.is_dragging());
    assert!(!view.is_decelerating());

    pager.set_activity(ScrollActivity::IDLE);
    view.set_native_activity(ScrollActivity::DECELERATING);
    assert!(view.is_decelerating());
    assert!(!view.is_dragging());
}

#[test]
fn dropped_container_turns_pager_into_no_op() {
    let view = view_with(centered_half_width());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);
    drop(view);

    pager.apply_native_offset(Point::new(194.0, 0.0));
    pager.update_size();
    pager.update_for_bounds_change();
    pager.update_properties();
    pager.will_begin_dragging(pager.id());

    assert_point(pager.content_offset(), Point::new(194.0, 0.0));
    assert!(!pager.should_scroll_to_top(pager.id()));
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn current_page_index_uses_container_extent() {
    let view = view_with(PagingConfiguration::default());
    view.set_content_offset(Point::new(800.0, 1250.0));
    assert_eq!(view.current_page_index(Axis::Vertical), 2);
    assert_eq!(view.current_page_index(Axis::Horizontal), 2);

    view.set_content_offset(Point::new(-1.0, 599.0));
    assert_eq!(view.current_page_index(Axis::Vertical), 0);
    assert_eq!(view.current_page_index(Axis::Horizontal), -1);
}

#[test]
fn list_scrolls_to_page_of_row() {
    let list = PageableListView::new(Rect::new(0.0, 0.0, 320.0, 600.0), |ip: IndexPath| {
        Rect::new(0.0, ip.row() as f64 * 50.0, 320.0, 50.0)
    });
    list.set_content_size(Size::new(320.0, 5000.0));
    list.set_paging_configuration(
        PagingConfiguration::new(PageSize::absolute_height(200.0))
            .with_alignment(Alignment::CENTER_Y),
    );
    list.layout_subviews();
    let pager = list.pager();
    assert_eq!(pager.bounds().size, Size::new(320.0, 200.0));

    list.scroll_to_page_of_row(IndexPath::new(0, 20), false);
    assert_eq!(list.rect_for_row(IndexPath::new(0, 20)).min_y(), 1000.0);
    assert_point(pager.content_offset(), Point::new(0.0, 1000.0));
    assert_point(list.content_offset(), Point::new(0.0, 1200.0));
    assert_eq!(list.current_page_index(), 2);

    // Row 23 sits inside the same page.
    list.scroll_to_page_of_row(IndexPath::new(0, 23), false);
    assert_point(pager.content_offset(), Point::new(0.0, 1000.0));
}

#[test]
fn list_scroll_to_page_animates_through_pager() {
    let mut list = PageableListView::new(Rect::new(0.0, 0.0, 320.0, 600.0), |_| Rect::ZERO);
    list.set_content_size(Size::new(320.0, 5000.0));
    list.layout_subviews();
    list.set_row_rect_provider(|ip| Rect::new(0.0, ip.row() as f64 * 100.0, 320.0, 100.0));

    list.scroll_to_page_of_row(IndexPath::new(0, 13), true);
    assert!(list.pager().is_animating());
    list.tick(0);
    list.tick(DEFAULT_SCROLL_ANIMATION_MS);
    assert_point(list.content_offset(), Point::new(0.0, 1200.0));
}

#[test]
fn grid_scrolls_to_page_for_item() {
    let grid = PageableGridView::new(Rect::new(0.0, 0.0, 390.0, 600.0), |ip: IndexPath| {
        (ip.section == 0).then(|| Rect::new(ip.item as f64 * 100.0, 0.0, 100.0, 100.0))
    });
    grid.set_content_size(Size::new(5000.0, 600.0));
    grid.set_paging_configuration(centered_half_width());
    grid.layout_subviews();
    let pager = grid.pager();

    assert!(grid.scroll_to_page_for_item(IndexPath::new(0, 5), false));
    assert_point(pager.content_offset(), Point::new(388.0, 0.0));
    assert_point(grid.content_offset(), Point::new(486.0, 0.0));
    assert_eq!(grid.current_horizontal_page_index(), 1);
    assert_eq!(grid.current_vertical_page_index(), 0);

    let before = grid.content_offset();
    assert!(!grid.scroll_to_page_for_item(IndexPath::new(1, 0), false));
    assert_point(grid.content_offset(), before);
}

#[test]
fn bounds_write_notifies_and_resyncs() {
    let view = view_with(PagingConfiguration::default());
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);

    view.set_bounds(Rect::new(0.0, 720.0, 390.0, 600.0));
    assert_eq!(recorder.count("did_scroll"), 1);
    assert_point(pager.content_offset(), Point::new(0.0, 720.0));

    let viewport = view.viewport();
    assert_eq!(viewport.content_offset(), Point::new(0.0, 720.0));
    assert_eq!(viewport.content_size(), Size::new(4000.0, 6000.0));
}

#[test]
fn bounds_resize_recomputes_page_size() {
    let view = view_with(
        PagingConfiguration::new(PageSize::fractional_width(0.5))
            .with_alignment(Alignment::CENTER_X),
    );
    let pager = view.pager();
    let recorder = Rc::new(Recorder::default());
    view.set_observer(&recorder);
    assert_eq!(pager.bounds().size, Size::new(195.0, 600.0));

    view.set_bounds(Rect::new(0.0, 0.0, 600.0, 600.0));

    assert_eq!(pager.bounds().size, Size::new(300.0, 600.0));
    assert_point(pager.content_offset(), Point::new(-150.0, 0.0));
    assert_point(view.content_offset(), Point::ZERO);
    assert_eq!(recorder.count("did_scroll"), 1);

    // Same size, new origin: pages keep their size.
    view.set_bounds(Rect::new(450.0, 0.0, 600.0, 600.0));
    assert_eq!(pager.bounds().size, Size::new(300.0, 600.0));
    assert_point(pager.content_offset(), Point::new(300.0, 0.0));
}
