use std::rc::Rc;

use pagestop_adapter::pagestop::{Alignment, PageSize, PagingConfiguration, Point, Rect, Size};
use pagestop_adapter::{IndexPath, PageableGridView, ScrollActivity, ScrollObserver, SurfaceId};

struct Log;

impl ScrollObserver for Log {
    fn will_begin_dragging(&self, scroll_view: SurfaceId) {
        println!("  will_begin_dragging({})", scroll_view.get());
    }

    fn did_end_decelerating(&self, scroll_view: SurfaceId) {
        println!("  did_end_decelerating({})", scroll_view.get());
    }

    fn did_end_scrolling_animation(&self, scroll_view: SurfaceId) {
        println!("  did_end_scrolling_animation({})", scroll_view.get());
    }
}

fn main() {
    // Example: a host toolkit driving a pageable grid.
    //
    // The host would:
    // - deliver drag and deceleration updates to the surface named by `active_drag_surface()`
    // - move that surface with its native paging physics (`apply_native_offset`)
    // - call tick(now_ms) each frame while a programmatic scroll animates
    let grid = PageableGridView::new(Rect::new(0.0, 0.0, 390.0, 300.0), |ip: IndexPath| {
        (ip.section == 0 && ip.item < 40)
            .then(|| Rect::new(ip.item as f64 * 97.0, 0.0, 97.0, 300.0))
    });
    grid.set_content_size(Size::new(40.0 * 97.0, 300.0));
    grid.set_paging_configuration(
        PagingConfiguration::new(PageSize::absolute_width(194.0))
            .with_alignment(Alignment::CENTER_X),
    );
    grid.layout_subviews();

    let log = Rc::new(Log);
    grid.set_observer(&log);

    let pager = grid.pager();
    println!(
        "grid={} pager={} drag goes to {}",
        grid.id().get(),
        pager.id().get(),
        grid.active_drag_surface().get()
    );
    println!("at rest: container_x={}", grid.content_offset().x);

    // A drag that the native pager snaps two pages to the right.
    pager.set_activity(ScrollActivity::DRAGGING);
    pager.will_begin_dragging(pager.id());
    for step in 1..=4 {
        pager.apply_native_offset(Point::new(step as f64 * 40.0, 0.0));
        println!(
            "  dragging={} container_x={}",
            grid.is_dragging(),
            grid.content_offset().x
        );
    }
    pager.set_activity(ScrollActivity::DECELERATING);
    pager.apply_native_offset(Point::new(388.0, 0.0));
    pager.set_activity(ScrollActivity::IDLE);
    pager.did_end_decelerating(pager.id());
    println!(
        "settled: container_x={} page={}",
        grid.content_offset().x,
        grid.current_horizontal_page_index()
    );

    // Jump to the page holding item 30.
    grid.scroll_to_page_for_item(IndexPath::new(0, 30), true);
    let mut now_ms = 0u64;
    while grid.tick(now_ms) {
        now_ms += 16;
    }
    println!(
        "after scroll_to_page_for_item: container_x={} pager_x={}",
        grid.content_offset().x,
        pager.content_offset().x
    );
}
