//! # Article List Example
//!
//! A browsable paged list driven by the [`PageBar`] widget:
//! - Embedding a component in an Elm-style update/view loop
//! - Mapping `PageChanged` notifications to the caller-owned data layer
//!   (a static fixture standing in for a real query)
//! - Draining synchronous [`Command`]s without any async runtime
//!
//! Run with: `cargo run --example article_list`
//! Navigate with arrow keys / `h` `l`, jump with digits, `g`/`G` for the
//! extremes, `q` to quit.

use pagebar::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use pagebar::ratatui::layout::{Constraint, Layout, Rect};
use pagebar::ratatui::style::{Color, Style};
use pagebar::ratatui::text::Line;
use pagebar::ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use pagebar::ratatui::{DefaultTerminal, Frame};
use pagebar::widgets::page_bar::{self, PageBar};
use pagebar::{page_count, Command, Component, ItemRange};

const PER_PAGE: usize = 5;

struct App {
    articles: Vec<String>,
    pager: PageBar,
    /// Items for the page most recently "fetched" from the data layer.
    visible: Vec<String>,
    quit: bool,
}

#[derive(Debug)]
enum Msg {
    Pager(page_bar::Message),
    Quit,
}

impl App {
    fn new(articles: Vec<String>) -> Self {
        let pages = page_count(articles.len(), PER_PAGE).unwrap_or(0);
        let mut pager = PageBar::new(pages).with_item_counts(PER_PAGE, articles.len());
        pager.focus();
        let mut app = App {
            articles,
            pager,
            visible: Vec::new(),
            quit: false,
        };
        app.fetch_page(1);
        app
    }

    /// The caller-owned data layer: slices the fixture for one page.
    fn fetch_page(&mut self, page: usize) {
        let range = ItemRange::compute(page, PER_PAGE, self.articles.len())
            .unwrap_or(ItemRange { start: 1, end: 0 });
        self.visible = if range.is_empty() {
            Vec::new()
        } else {
            self.articles[range.start - 1..range.end].to_vec()
        };
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Pager(page_bar::Message::PageChanged(page)) => {
                self.fetch_page(page);
                Command::none()
            }
            Msg::Pager(m) => self.pager.update(m).map(Msg::Pager),
            Msg::Quit => {
                self.quit = true;
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [list_area, bar_area, help_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|title| ListItem::new(title.as_str()))
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Articles "),
        );
        frame.render_widget(list, list_area);

        self.pager.view(frame, pad(bar_area));

        let help = Paragraph::new(Line::raw(
            "←/→ page · digits jump · g/G extremes · q quit",
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, pad(help_area));
    }

    fn deliver(&mut self, cmd: Command<Msg>) {
        for msg in cmd.into_messages() {
            let next = self.update(msg);
            self.deliver(next);
        }
    }
}

/// Inset an area by one column on each side.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    while !app.quit {
        terminal.draw(|frame| app.view(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let msg = match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Msg::Quit,
                _ => Msg::Pager(page_bar::Message::KeyPress(key)),
            };
            let cmd = app.update(msg);
            app.deliver(cmd);
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let articles: Vec<String> = (1..=45)
        .map(|i| format!("Article {i:02}: notes from the archive"))
        .collect();
    let mut app = App::new(articles);

    let mut terminal = pagebar::ratatui::init();
    let result = run(&mut terminal, &mut app);
    pagebar::ratatui::restore();
    result?;

    println!("left off on page {}", app.pager.current_page());
    Ok(())
}
