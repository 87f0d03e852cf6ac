//! Core pagination logic for the **pagebar** toolkit.
//!
//! Everything here is pure and synchronous: given a current page and a total
//! page count, [`PageWindow`] computes the ordered run of page indicators
//! (numbers plus ellipsis markers) a pagination control should show, and
//! [`ItemRange`] computes the "showing X–Y of Z" span for the matching item
//! counts. Both are plain values recomputed from their inputs on every call,
//! with no caching and no side effects.
//!
//! The crate also carries the minimal component seam the widget crate builds
//! on: the Elm-style [`Component`] trait, the synchronous [`Command`] type
//! used for outward notifications, and a headless
//! [`TestComponent`](testing::TestComponent) harness for unit tests.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PageWindow`] | Indicator sequence + previous/next enablement |
//! | [`PageIndicator`] | One page number or ellipsis in that sequence |
//! | [`ItemRange`] | 1-indexed item span of the current page |
//! | [`WindowError`] | Input-validation failures of the strict constructors |
//! | [`Component`] | update/view trait implemented by the widgets |
//! | [`Command`] | Deferred messages returned from `update` |
//!
//! # Quick example
//!
//! ```ignore
//! use pagebar_core::PageWindow;
//!
//! let w = PageWindow::clamped(6, 10);
//! let pages: Vec<_> = w.pages().collect();
//! assert_eq!(pages, [1, 4, 5, 6, 7, 8, 10]);
//! assert!(w.can_go_previous && w.can_go_next);
//! ```

pub mod command;
pub mod component;
pub mod range;
pub mod testing;
pub mod window;

pub use command::Command;
pub use component::Component;
pub use range::{page_count, ItemRange};
pub use window::{PageIndicator, PageWindow, WindowError, ANCHOR_THRESHOLD, MAX_VISIBLE};
