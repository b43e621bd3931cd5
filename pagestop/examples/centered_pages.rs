// Example: centered pages narrower than the viewport, and snapping an item to its page.
use pagestop::{Alignment, EdgeInsets, PageSize, PagingConfiguration, Point, Rect, Size};

fn main() {
    let viewport = Size::new(390.0, 844.0);
    let insets = EdgeInsets::new(47.0, 0.0, 34.0, 0.0);

    let config =
        PagingConfiguration::new(PageSize::absolute_width(194.0)).with_alignment(Alignment::CENTER_X);

    let page = config.resolved_page_size(viewport, insets);
    let anchor = config.anchor(viewport, insets);
    println!("page={page:?} anchor={anchor:?}");

    for container_x in [0.0, 98.0, 292.0, 486.0] {
        let pager = config.to_pager_space(Point::new(container_x, 0.0), viewport, insets);
        let back = config.to_container_space(pager, viewport, insets);
        println!("container_x={container_x} -> pager_x={} -> container_x={}", pager.x, back.x);
    }

    let item = Rect::new(700.0, 0.0, 120.0, 120.0);
    let snapped = config.paged_content_offset(item, viewport, insets);
    println!(
        "item at x={} snaps to pager_x={} (page {})",
        item.origin.x,
        snapped.x,
        pagestop::page_index(snapped.x, page.width)
    );
}
