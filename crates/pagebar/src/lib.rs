//! **pagebar** -- list-navigation pagination for [`ratatui`] UIs.
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! pagebar = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`pagebar_core`] are available at the crate root
//!   ([`PageWindow`], [`PageIndicator`], [`ItemRange`], [`Component`],
//!   [`Command`], etc.).
//! * The [`widgets`] module re-exports everything from [`pagebar_widgets`]
//!   (the numbered [`PageBar`](widgets::PageBar) and the compact
//!   [`Dots`](widgets::Dots) indicator).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! The core is usable without any terminal at all:
//!
//! ```ignore
//! use pagebar::PageWindow;
//!
//! let w = PageWindow::clamped(6, 10);
//! let pages: Vec<_> = w.pages().collect();
//! assert_eq!(pages, [1, 4, 5, 6, 7, 8, 10]);
//! ```
//!
//! For an interactive component wired into an update/view loop, see the
//! `article_list` demo.

pub use pagebar_core::*;
pub mod widgets {
    pub use pagebar_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
