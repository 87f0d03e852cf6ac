//! Numbered pagination bar with ellipsis truncation and first/last anchors.

use crossterm::event::{KeyCode, KeyEvent};
use pagebar_core::command::Command;
use pagebar_core::component::Component;
use pagebar_core::{ItemRange, PageIndicator, PageWindow};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Messages for the page bar component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press event forwarded to the page bar.
    KeyPress(KeyEvent),
    /// Advance to the next page.
    NextPage,
    /// Go back to the previous page.
    PrevPage,
    /// Jump to a specific page (1-indexed).
    GotoPage(usize),
    /// Emitted whenever the current page actually changes, carrying the new
    /// page number. Parents map this to their own data-fetch message; the
    /// component never invokes caller code directly.
    PageChanged(usize),
}

/// Visual style configuration for the [`PageBar`] component.
#[derive(Debug, Clone)]
pub struct PageBarStyle {
    /// Style for inactive page numbers.
    pub number: Style,
    /// Style for the current page number.
    pub active: Style,
    /// Style for ellipsis markers.
    pub ellipsis: Style,
    /// Style for enabled previous/next arrows.
    pub arrow: Style,
    /// Style for disabled previous/next arrows.
    pub arrow_disabled: Style,
    /// Style for the "X–Y of Z" item-range label.
    pub label: Style,
}

impl Default for PageBarStyle {
    fn default() -> Self {
        Self {
            number: Style::default(),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            ellipsis: Style::default().fg(Color::DarkGray),
            arrow: Style::default(),
            arrow_disabled: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A pagination bar component.
///
/// Renders a single line of page numbers around the current page, truncated
/// with ellipses and anchored by the first/last page once the page count
/// grows, plus previous/next arrows. The window layout comes from
/// [`PageWindow`], recomputed from current state on every render pass.
///
/// With one page or none there is nothing to navigate and the bar renders no
/// page numbers. When item counts are configured via
/// [`with_item_counts`](PageBar::with_item_counts), a right-aligned
/// "X–Y of Z" label shows the item span of the current page (and still
/// renders for a single page).
pub struct PageBar {
    current_page: usize,
    total_pages: usize,
    per_page: usize,
    total_items: Option<usize>,
    focus: bool,
    style: PageBarStyle,
}

impl PageBar {
    /// Create a new page bar with the given number of total pages, starting
    /// on page 1. Defaults to 10 items per page with no item-range label.
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 1,
            total_pages,
            per_page: 10,
            total_items: None,
            focus: false,
            style: PageBarStyle::default(),
        }
    }

    /// Set the current page (1-indexed). Clamped to the valid range.
    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    /// Configure item counts, enabling the "X–Y of Z" label.
    /// `per_page` is raised to at least 1.
    pub fn with_item_counts(mut self, per_page: usize, total_items: usize) -> Self {
        self.per_page = per_page.max(1);
        self.total_items = Some(total_items);
        self
    }

    /// Set the visual style for this page bar.
    pub fn with_style(mut self, style: PageBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Give this page bar keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this page bar.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// The current page (1-indexed).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Set the current page (1-indexed). Clamped to `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    /// Set the total number of pages, re-clamping the current page.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.set_page(self.current_page);
    }

    /// Whether we are on the first page.
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether we are on the last page.
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// The page window for the current state, recomputed on each call.
    pub fn window(&self) -> PageWindow {
        PageWindow::clamped(self.current_page, self.total_pages)
    }

    /// The item span of the current page, when item counts are configured.
    pub fn item_range(&self) -> Option<ItemRange> {
        let total_items = self.total_items?;
        // per_page >= 1 and current_page >= 1 by construction.
        ItemRange::compute(self.current_page, self.per_page, total_items).ok()
    }

    fn go_to(&mut self, page: usize) -> Command<Message> {
        let before = self.current_page;
        self.set_page(page);
        if self.current_page != before {
            Command::message(Message::PageChanged(self.current_page))
        } else {
            Command::none()
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.on_first_page() {
                    Command::none()
                } else {
                    self.go_to(self.current_page - 1)
                }
            }
            KeyCode::Right | KeyCode::Char('l') => self.go_to(self.current_page + 1),
            KeyCode::Home | KeyCode::Char('g') => self.go_to(1),
            KeyCode::End | KeyCode::Char('G') => self.go_to(self.total_pages),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let page = c.to_digit(10).unwrap_or(0) as usize;
                if page >= 1 && page <= self.total_pages {
                    self.go_to(page)
                } else {
                    Command::none()
                }
            }
            _ => Command::none(),
        }
    }

    fn bar_spans(&self, window: &PageWindow) -> Vec<Span<'static>> {
        let prev_style = if window.can_go_previous {
            self.style.arrow
        } else {
            self.style.arrow_disabled
        };
        let next_style = if window.can_go_next {
            self.style.arrow
        } else {
            self.style.arrow_disabled
        };

        let mut spans = vec![Span::styled("‹", prev_style)];
        for indicator in &window.indicators {
            spans.push(Span::raw(" "));
            match *indicator {
                PageIndicator::Page { page, active } => {
                    let style = if active {
                        self.style.active
                    } else {
                        self.style.number
                    };
                    spans.push(Span::styled(page.to_string(), style));
                }
                PageIndicator::Ellipsis => {
                    spans.push(Span::styled("…", self.style.ellipsis));
                }
            }
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled("›", next_style));
        spans
    }

    fn range_label(&self) -> Option<String> {
        let total_items = self.total_items?;
        let range = self.item_range()?;
        if range.is_empty() {
            Some(format!("0 of {total_items}"))
        } else {
            Some(format!("{}–{} of {}", range.start, range.end, total_items))
        }
    }
}

impl Component for PageBar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::KeyPress(_) => Command::none(),
            Message::NextPage => self.go_to(self.current_page + 1),
            Message::PrevPage => {
                if self.on_first_page() {
                    Command::none()
                } else {
                    self.go_to(self.current_page - 1)
                }
            }
            Message::GotoPage(page) => self.go_to(page),
            // Outward notification only; nothing to do on loopback.
            Message::PageChanged(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let window = self.window();
        let mut spans = if window.is_empty() {
            Vec::new()
        } else {
            self.bar_spans(&window)
        };

        if let Some(label) = self.range_label() {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let label_width = label.width();
            let gap = if spans.is_empty() { 0 } else { 2 };
            if used + gap + label_width <= area.width as usize {
                let pad = area.width as usize - used - label_width;
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(label, self.style.label));
            }
        }

        if spans.is_empty() {
            return;
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
