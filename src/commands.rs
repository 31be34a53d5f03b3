//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update:
//! caller notifications and focus changes on the surfaces.

use serde::Serialize;

/// A caller-visible notification produced by a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "callback", content = "value", rename_all = "snake_case")]
pub enum Notification {
    /// Preview → Editing happened
    Edit,
    /// The pending value changed while editing
    Change(String),
    /// The edit was discarded; carries the value to revert to
    Cancel(String),
    /// The edit was confirmed; carries the value to commit
    Submit(String),
}

impl Notification {
    /// Name of the callback this notification is delivered to
    pub fn callback_name(&self) -> &'static str {
        match self {
            Notification::Edit => "on_edit",
            Notification::Change(_) => "on_change",
            Notification::Cancel(_) => "on_cancel",
            Notification::Submit(_) => "on_submit",
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Deliver a notification to the caller's callbacks
    Notify(Notification),
    /// Focus the input surface, optionally selecting its whole text
    FocusInput { select_all: bool },
    /// Move focus off the input surface
    BlurInput,
    /// Return focus to the preview surface
    FocusPreview,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn notify(notification: Notification) -> Self {
        Cmd::Notify(notification)
    }

    /// Focus return after leaving edit mode
    pub fn leave_input() -> Self {
        Cmd::Batch(vec![Cmd::BlurInput, Cmd::FocusPreview])
    }

    /// Flatten nested batches into execution order, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Cmd>) {
        match self {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }

    /// Notifications carried by this command, in execution order
    pub fn notifications(&self) -> Vec<&Notification> {
        match self {
            Cmd::Notify(n) => vec![n],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.notifications()).collect(),
            _ => Vec::new(),
        }
    }
}
