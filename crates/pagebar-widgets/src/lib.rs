//! Pagination widgets for the **pagebar** toolkit.
//!
//! Every widget implements [`pagebar_core::Component`], so it can be
//! embedded in any Elm-style update/view loop and composed freely within
//! [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`page_bar`] | Numbered pagination bar with ellipsis truncation, first/last anchors, and an optional "X–Y of Z" label |
//! | [`dots`] | Compact position indicator (`● ○ ○` or `2/5`) for small page counts |

pub mod dots;
pub mod page_bar;

pub use dots::{Dots, DotsStyle, DotsType};
pub use page_bar::{PageBar, PageBarStyle};
