//! Synchronous command values returned from component updates.

/// A message-producing effect returned from [`Component::update`](crate::Component::update).
///
/// pagebar components are pure and synchronous, so a `Command` is only ever
/// a deferred message (or a batch of them) for the embedding application to
/// deliver on its next update cycle. This is how a component notifies its
/// parent, such as a page-changed notification, without ever calling back
/// into the parent directly.
///
/// ```rust,ignore
/// // Nothing to report:
/// let cmd = Command::none();
///
/// // Tell the parent a page was selected:
/// let cmd = Command::message(Message::PageChanged(3));
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
    Sequence(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver a message on the next update cycle.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Group several commands with no ordering guarantee between them.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => {
                let mut cmds = cmds;
                cmds.pop().unwrap()
            }
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Group commands sequentially — each command's messages are delivered
    /// before the next command's.
    pub fn sequence(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => {
                let mut cmds = cmds;
                cmds.pop().unwrap()
            }
            _ => Command {
                inner: CommandInner::Sequence(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    ///
    /// A parent wraps a child's messages in one of its own variants and uses
    /// `map` to lift the child's commands:
    ///
    /// ```rust,ignore
    /// AppMsg::Pager(m) => self.pager.update(m).map(AppMsg::Pager),
    /// ```
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter().map(|cmd| cmd.map_with(f.clone())).collect(),
                ),
            },
            CommandInner::Sequence(cmds) => Command {
                inner: CommandInner::Sequence(
                    cmds.into_iter().map(|cmd| cmd.map_with(f.clone())).collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is a single message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }

    /// Flatten this command into its messages, depth first. Batch and
    /// sequence groups both yield their messages in input order.
    pub fn into_messages(self) -> Vec<Msg> {
        match self.inner {
            CommandInner::None => Vec::new(),
            CommandInner::Message(msg) => vec![msg],
            CommandInner::Batch(cmds) | CommandInner::Sequence(cmds) => {
                cmds.into_iter().flat_map(Command::into_messages).collect()
            }
        }
    }
}
