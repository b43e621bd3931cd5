use alloc::rc::Rc;
use core::ops::Deref;

use pagestop::{Axis, Rect};

use crate::{IndexPath, PageableScrollView};

type RowRectProvider = Rc<dyn Fn(IndexPath) -> Rect>;

/// A list-style pageable container.
///
/// The host owns row layout; this type only asks it for the rect of a row (in container content
/// coordinates) when jumping to the page that contains that row. Everything else is the shared
/// [`PageableScrollView`] contract, reachable through `Deref`.
pub struct PageableListView {
    view: PageableScrollView,
    rect_for_row: RowRectProvider,
}

impl PageableListView {
    pub fn new(frame: Rect, rect_for_row: impl Fn(IndexPath) -> Rect + 'static) -> Self {
        Self {
            view: PageableScrollView::new(frame),
            rect_for_row: Rc::new(rect_for_row),
        }
    }

    pub fn scroll_view(&self) -> &PageableScrollView {
        &self.view
    }

    pub fn set_row_rect_provider(&mut self, rect_for_row: impl Fn(IndexPath) -> Rect + 'static) {
        self.rect_for_row = Rc::new(rect_for_row);
    }

    pub fn rect_for_row(&self, index_path: IndexPath) -> Rect {
        (self.rect_for_row)(index_path)
    }

    /// Scrolls so the page containing `index_path` is current.
    pub fn scroll_to_page_of_row(&self, index_path: IndexPath, animated: bool) {
        let rect = self.rect_for_row(index_path);
        let configuration = self.view.paging_configuration();
        let target = configuration.paged_content_offset_for(rect, &self.view.viewport());
        pdebug!(
            section = index_path.section,
            row = index_path.item,
            x = target.x,
            y = target.y,
            "PageableListView::scroll_to_page_of_row"
        );
        self.view.scroll_to_pager_offset(target, animated);
    }

    /// The vertical page index of the current offset.
    pub fn current_page_index(&self) -> i64 {
        self.view.current_page_index(Axis::Vertical)
    }
}

impl Deref for PageableListView {
    type Target = PageableScrollView;

    fn deref(&self) -> &Self::Target {
        &self.view
    }
}

impl core::fmt::Debug for PageableListView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageableListView")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
