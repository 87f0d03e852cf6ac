//! Compact page-position indicator: a dot row or an Arabic fraction.

use pagebar_core::command::Command;
use pagebar_core::component::Component;
use pagebar_core::ItemRange;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// How the position indicator is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotsType {
    /// Render dots: ● for the current page, ○ for the others.
    Dots,
    /// Render an Arabic fraction: "2/5".
    Arabic,
}

/// Messages for the dots component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move to the next page.
    NextPage,
    /// Move to the previous page.
    PrevPage,
    /// Jump to a specific page (1-indexed).
    GotoPage(usize),
}

/// Style configuration for the dots indicator.
#[derive(Debug, Clone)]
pub struct DotsStyle {
    /// Style for the current-page dot.
    pub active_dot: Style,
    /// Style for the other dots.
    pub inactive_dot: Style,
    /// Style for Arabic fraction text (e.g. "2/5").
    pub text: Style,
}

impl Default for DotsStyle {
    fn default() -> Self {
        Self {
            active_dot: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_dot: Style::default().fg(Color::DarkGray),
            text: Style::default(),
        }
    }
}

/// A compact page-position indicator for flows where a full numbered bar is
/// overkill, such as wizards or carousels.
///
/// Unlike [`PageBar`](crate::page_bar::PageBar) it shows every page, so it
/// suits small page counts. Pages are 1-indexed throughout, matching the
/// rest of the toolkit.
pub struct Dots {
    total_pages: usize,
    page: usize,
    per_page: usize,
    dots_type: DotsType,
    style: DotsStyle,
}

impl Dots {
    /// Create a new indicator with the given number of total pages (raised
    /// to at least 1), starting on page 1. Defaults to `DotsType::Dots` and
    /// 10 items per page.
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages: total_pages.max(1),
            page: 1,
            per_page: 10,
            dots_type: DotsType::Dots,
            style: DotsStyle::default(),
        }
    }

    /// Set the display type.
    pub fn with_type(mut self, t: DotsType) -> Self {
        self.dots_type = t;
        self
    }

    /// Set the number of items per page (raised to at least 1).
    pub fn with_per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Set the indicator style.
    pub fn with_style(mut self, style: DotsStyle) -> Self {
        self.style = style;
        self
    }

    /// The current page (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the current page (1-indexed). Clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages);
    }

    /// The total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Set the total number of pages (minimum 1), re-clamping the current
    /// page.
    pub fn set_total_pages(&mut self, n: usize) {
        self.total_pages = n.max(1);
        self.set_page(self.page);
    }

    /// Advance to the next page if not on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Go to the previous page if not on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Whether we are on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether we are on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// How many items are on the current page given a total item count.
    ///
    /// With 23 items at 10 per page: pages 1 and 2 hold 10 items, page 3
    /// holds 3.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        ItemRange::compute(self.page, self.per_page, total_items)
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

impl Component for Dots {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::NextPage => self.next_page(),
            Message::PrevPage => self.prev_page(),
            Message::GotoPage(page) => self.set_page(page),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.dots_type {
            DotsType::Dots => {
                let mut spans = Vec::with_capacity(self.total_pages * 2);
                for page in 1..=self.total_pages {
                    if page > 1 {
                        spans.push(Span::raw(" "));
                    }
                    if page == self.page {
                        spans.push(Span::styled("●", self.style.active_dot));
                    } else {
                        spans.push(Span::styled("○", self.style.inactive_dot));
                    }
                }
                frame.render_widget(Paragraph::new(Line::from(spans)), area);
            }
            DotsType::Arabic => {
                let text = format!("{}/{}", self.page, self.total_pages);
                let span = Span::styled(text, self.style.text);
                frame.render_widget(Paragraph::new(span), area);
            }
        }
    }
}
