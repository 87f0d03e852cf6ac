use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// pagebar components follow the Elm shape: a message-driven
/// [`update`](Component::update) that mutates state and returns a
/// [`Command`], and a pure [`view`](Component::view) that draws the current
/// state into whatever sub-region of the frame the parent hands it. The
/// parent owns re-invocation: it calls `view` on every render pass and
/// routes events in as messages, so a component never subscribes to
/// anything itself.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use pagebar_core::{Command, Component};
///
/// enum AppMsg { Pager(pager::Message) }
///
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Pager(m) => self.pager.update(m).map(AppMsg::Pager),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message
    /// variants so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying
    /// any outward notifications.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle
    /// and recompute whatever layout they need from current state; nothing
    /// about a render pass may be cached across calls.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing: a parent can query `focused()` to decide
    /// which child should receive keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
