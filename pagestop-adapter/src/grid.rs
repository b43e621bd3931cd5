use alloc::rc::Rc;
use core::ops::Deref;

use pagestop::{Axis, Rect};

use crate::{IndexPath, PageableScrollView};

type LayoutAttributesProvider = Rc<dyn Fn(IndexPath) -> Option<Rect>>;

/// A grid-style pageable container.
///
/// Grid layouts may not have attributes for every index path (unloaded sections, supplementary
/// gaps), so the layout provider is fallible and [`Self::scroll_to_page_for_item`] reports
/// whether it moved.
pub struct PageableGridView {
    view: PageableScrollView,
    layout_attributes: LayoutAttributesProvider,
}

impl PageableGridView {
    pub fn new(
        frame: Rect,
        layout_attributes: impl Fn(IndexPath) -> Option<Rect> + 'static,
    ) -> Self {
        Self {
            view: PageableScrollView::new(frame),
            layout_attributes: Rc::new(layout_attributes),
        }
    }

    pub fn scroll_view(&self) -> &PageableScrollView {
        &self.view
    }

    pub fn set_layout_attributes_provider(
        &mut self,
        layout_attributes: impl Fn(IndexPath) -> Option<Rect> + 'static,
    ) {
        self.layout_attributes = Rc::new(layout_attributes);
    }

    pub fn layout_attributes_for_item(&self, index_path: IndexPath) -> Option<Rect> {
        (self.layout_attributes)(index_path)
    }

    /// Scrolls so the page containing the item's frame is current.
    ///
    /// Returns `false` without scrolling when the layout has no attributes for `index_path`.
    pub fn scroll_to_page_for_item(&self, index_path: IndexPath, animated: bool) -> bool {
        let Some(frame) = self.layout_attributes_for_item(index_path) else {
            ptrace!(
                section = index_path.section,
                item = index_path.item,
                "PageableGridView::scroll_to_page_for_item: no layout attributes"
            );
            return false;
        };
        let configuration = self.view.paging_configuration();
        let target = configuration.paged_content_offset_for(frame, &self.view.viewport());
        pdebug!(
            section = index_path.section,
            item = index_path.item,
            x = target.x,
            y = target.y,
            "PageableGridView::scroll_to_page_for_item"
        );
        self.view.scroll_to_pager_offset(target, animated);
        true
    }

    pub fn current_vertical_page_index(&self) -> i64 {
        self.view.current_page_index(Axis::Vertical)
    }

    pub fn current_horizontal_page_index(&self) -> i64 {
        self.view.current_page_index(Axis::Horizontal)
    }
}

impl Deref for PageableGridView {
    type Target = PageableScrollView;

    fn deref(&self) -> &Self::Target {
        &self.view
    }
}

impl core::fmt::Debug for PageableGridView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageableGridView")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
