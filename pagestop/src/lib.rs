//! Headless page-stop geometry for custom scroll paging.
//!
//! Native scroll containers usually page by exact multiples of their own visible bounds. This
//! crate describes pages that are smaller or larger than the viewport, offset from it, or aligned
//! differently inside it, and provides the pure math that maps between the container's
//! content-offset space and the content-offset space of a page-sized "shadow pager".
//!
//! For the synchronization controller and pageable list/grid containers, see the
//! `pagestop-adapter` crate.
//!
//! It is UI-agnostic. A toolkit layer is expected to provide:
//! - the container's viewport size and content offset
//! - the container's adjusted content insets (safe area, etc.)
//! - item frames when snapping to the page containing an item
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod geometry;
mod resolve;
mod types;


pub use config::{
    Alignment, Dimension, HorizontalAlignment, PageSize, PagingConfiguration, VerticalAlignment,
};
pub use geometry::{ScrollGeometry, Viewport};
pub use resolve::{Direction, page_index};
pub use types::{Axis, EdgeInsets, Point, Rect, RectEdge, Size};
