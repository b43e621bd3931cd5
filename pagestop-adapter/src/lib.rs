//! Shadow-pager synchronization and pageable containers for the `pagestop` crate.
//!
//! `pagestop` computes page sizes and offset transforms. This crate keeps a hidden, page-sized
//! [`ShadowPager`] in lockstep with a container so the host's native paging physics (which can only
//! step by the bounds of the surface it runs on) produce custom page stops on the container:
//!
//! - [`PageableListView`] / [`PageableGridView`]: container wrappers that route every scroll-related
//!   write through the pager
//! - [`ScrollObserver`]: lifecycle callbacks; pager-side events are relayed with the container as
//!   subject
//!
//! Everything here is single-threaded and driven by the host's event loop: feed it frames, layout
//! passes, drag activity and animation ticks.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod grid;
mod index_path;
mod list;
mod observer;
mod pager;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use container::PageableScrollView;
pub use grid::PageableGridView;
pub use index_path::IndexPath;
pub use list::PageableListView;
pub use observer::ScrollObserver;
pub use pager::ShadowPager;
pub use surface::{
    DecelerationRate, KeyboardDismissMode, ScrollActivity, ScrollProperties, ScrollSurface,
    SurfaceId, ViewId,
};

pub use pagestop;
