//! Message types for the Elm-style architecture
//!
//! Every surface event and render pass reaches the control as a [`Msg`].

use serde::{Deserialize, Serialize};

use crate::config::EditableConfig;
use crate::input::Keystroke;
use crate::text_field::TextEditMsg;

/// Something that can hold focus around the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    Preview,
    Input,
    EditButton,
    SubmitButton,
    CancelButton,
    /// Anything outside the control
    Outside,
}

impl FocusTarget {
    /// Edit/submit/cancel buttons belonging to the control
    pub fn is_control(self) -> bool {
        matches!(
            self,
            FocusTarget::EditButton | FocusTarget::SubmitButton | FocusTarget::CancelButton
        )
    }
}

/// Preview surface messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewMsg {
    /// Preview surface received focus
    Focus,
}

/// Input surface messages
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    /// Raw text-change notification carrying the whole new text
    Change(String),
    /// Fine-grained edit applied to the pending text
    Edit(TextEditMsg),
    /// Key press
    Key(Keystroke),
    /// Input surface lost focus; `related` is where focus went, if known
    Blur { related: Option<FocusTarget> },
}

/// Edit control button messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMsg {
    /// Edit button pressed
    Edit,
    /// Submit button pressed
    Submit,
    /// Cancel button pressed
    Cancel,
}

/// Render-pass messages from the owner of the control
#[derive(Debug, Clone, PartialEq)]
pub enum SyncMsg {
    /// Externally supplied value for this render (None = not supplied)
    Value(Option<String>),
    /// Options for this render
    Config(EditableConfig),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Preview(PreviewMsg),
    Input(InputMsg),
    Control(ControlMsg),
    Sync(SyncMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn focus_preview() -> Self {
        Msg::Preview(PreviewMsg::Focus)
    }

    pub fn change(text: impl Into<String>) -> Self {
        Msg::Input(InputMsg::Change(text.into()))
    }

    pub fn edit(edit: TextEditMsg) -> Self {
        Msg::Input(InputMsg::Edit(edit))
    }

    /// Key press from a key string such as `"Enter"` or `"shift+enter"`
    pub fn key(key: &str) -> Self {
        Msg::Input(InputMsg::Key(Keystroke::parse(key)))
    }

    pub fn blur() -> Self {
        Msg::Input(InputMsg::Blur { related: None })
    }

    pub fn blur_to(target: FocusTarget) -> Self {
        Msg::Input(InputMsg::Blur {
            related: Some(target),
        })
    }

    pub fn set_value(value: Option<&str>) -> Self {
        Msg::Sync(SyncMsg::Value(value.map(str::to_string)))
    }

    /// Short label for logs and transcripts
    pub fn label(&self) -> String {
        match self {
            Msg::Preview(PreviewMsg::Focus) => "preview.focus".to_string(),
            Msg::Input(InputMsg::Change(text)) => format!("input.change({:?})", text),
            Msg::Input(InputMsg::Edit(edit)) => format!("input.edit({:?})", edit),
            Msg::Input(InputMsg::Key(stroke)) => format!("input.key({})", stroke),
            Msg::Input(InputMsg::Blur { related: None }) => "input.blur".to_string(),
            Msg::Input(InputMsg::Blur {
                related: Some(target),
            }) => format!("input.blur({:?})", target),
            Msg::Control(ControlMsg::Edit) => "control.edit".to_string(),
            Msg::Control(ControlMsg::Submit) => "control.submit".to_string(),
            Msg::Control(ControlMsg::Cancel) => "control.cancel".to_string(),
            Msg::Sync(SyncMsg::Value(value)) => format!("sync.value({:?})", value),
            Msg::Sync(SyncMsg::Config(_)) => "sync.config".to_string(),
        }
    }
}
