//! Headless test harness for exercising components without a terminal.

use crate::command::{Command, CommandInner};
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Drives a [`Component`] through update/view cycles in a plain `#[test]`.
///
/// Messages sent with [`send`](TestComponent::send) go straight to
/// [`Component::update`]; any messages the returned command carries are
/// collected into a pending queue, which [`drain_messages`](TestComponent::drain_messages)
/// feeds back into the component until it settles. Rendering goes through a
/// ratatui `TestBackend`, so visual output can be asserted as a string.
///
/// # Example
///
/// ```rust,ignore
/// use pagebar_core::testing::TestComponent;
///
/// let mut t = TestComponent::new(PageBar::new(10).with_page(3));
/// t.send(Message::NextPage);
/// assert_eq!(t.component().current_page(), 4);
/// assert!(t.render_string(40, 1).contains("4"));
/// ```
pub struct TestComponent<C: Component> {
    component: C,
    pending_messages: Vec<C::Message>,
}

impl<C: Component> TestComponent<C> {
    /// Wrap a component for testing.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending_messages: Vec::new(),
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Messages produced by the returned command are enqueued; call
    /// [`drain_messages`](TestComponent::drain_messages) to flush them.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect_messages(cmd);
    }

    /// Process all pending messages, including ones produced along the way,
    /// until the queue is empty.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.collect_messages(cmd);
            }
        }
    }

    /// Take the currently queued messages without updating the component.
    ///
    /// Useful for asserting on outward notifications (the messages a parent
    /// would receive) instead of looping them back in.
    pub fn take_messages(&mut self) -> Vec<C::Message> {
        self.pending_messages.drain(..).collect()
    }

    /// Shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutable reference to the component for direct test setup.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component into a ratatui [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a string.
    ///
    /// Rows are joined with newlines; trailing whitespace within each row is
    /// preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_messages(&mut self, cmd: Command<C::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            // Delivery here is synchronous and single-threaded, so batch
            // and sequence both collect in input order.
            CommandInner::Batch(cmds) | CommandInner::Sequence(cmds) => {
                for cmd in cmds {
                    self.collect_messages(cmd);
                }
            }
        }
    }
}
