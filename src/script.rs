//! Interaction scripts
//!
//! A script is a YAML list of surface events replayed against one control.
//! Replaying produces a transcript with the callbacks each step fired and the
//! resulting state, one entry per step.
//!
//! ```yaml
//! value: Hello          # omit for an uncontrolled control
//! echoOwner: true       # feed change/submit/cancel values back as renders
//! config:
//!   submitOnBlur: true
//! steps:
//!   - do: focus_preview
//!   - do: type
//!     text: World
//!   - do: key
//!     key: Enter
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::callbacks::Callbacks;
use crate::commands::Notification;
use crate::config::EditableConfig;
use crate::messages::FocusTarget;
use crate::model::Mode;
use crate::runtime::Editable;
use crate::view::PreviewView;

/// One surface event or render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
    FocusPreview,
    /// Raw text-change notification with the whole new text
    Change { text: String },
    /// Type characters one at a time at the caret
    Type { text: String },
    Key { key: String },
    Blur {
        #[serde(default)]
        to: Option<FocusTarget>,
    },
    /// Owner re-renders with this value (absent = not supplied)
    SetValue {
        #[serde(default)]
        value: Option<String>,
    },
    /// Owner re-renders with these options
    SetConfig { config: EditableConfig },
    EditButton,
    SubmitButton,
    CancelButton,
}

impl Step {
    pub fn describe(&self) -> String {
        match self {
            Step::FocusPreview => "focus preview".to_string(),
            Step::Change { text } => format!("change {:?}", text),
            Step::Type { text } => format!("type {:?}", text),
            Step::Key { key } => format!("key {}", key),
            Step::Blur { to: None } => "blur".to_string(),
            Step::Blur { to: Some(target) } => format!("blur to {:?}", target),
            Step::SetValue { value } => format!("set value {:?}", value),
            Step::SetConfig { .. } => "set config".to_string(),
            Step::EditButton => "edit button".to_string(),
            Step::SubmitButton => "submit button".to_string(),
            Step::CancelButton => "cancel button".to_string(),
        }
    }
}

/// A replayable interaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Script {
    /// Options for the control; the loaded config file applies when absent
    pub config: Option<EditableConfig>,
    /// Externally supplied value; makes the control controlled
    pub value: Option<String>,
    /// The owner stores every change, submit and cancel value and re-renders with it
    pub echo_owner: bool,
    pub steps: Vec<Step>,
}

/// Errors that can occur when loading scripts
#[derive(Debug, Clone)]
pub enum ScriptError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "IO error: {}", e),
            ScriptError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ScriptError {}

impl Script {
    pub fn from_yaml(yaml: &str) -> Result<Self, ScriptError> {
        serde_yaml::from_str(yaml).map_err(|e| ScriptError::ParseError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScriptError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }
}

/// State after one replayed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub step: usize,
    pub event: String,
    /// Callbacks fired by this step, in order
    pub notifications: Vec<Notification>,
    pub mode: Mode,
    pub committed: String,
    pub pending: String,
    pub preview: PreviewView,
}

/// Replay a script. `base` is used when the script carries no config.
pub fn run(script: &Script, base: &EditableConfig) -> Vec<TranscriptEntry> {
    let config = script.config.clone().unwrap_or_else(|| base.clone());
    let log = Rc::new(RefCell::new(Vec::new()));

    let callbacks = {
        let (edit, change, cancel, submit) = (log.clone(), log.clone(), log.clone(), log.clone());
        Callbacks::new()
            .on_edit(move || edit.borrow_mut().push(Notification::Edit))
            .on_change(move |v| change.borrow_mut().push(Notification::Change(v.to_string())))
            .on_cancel(move |v| cancel.borrow_mut().push(Notification::Cancel(v.to_string())))
            .on_submit(move |v| submit.borrow_mut().push(Notification::Submit(v.to_string())))
    };

    let mut editable = Editable::new(config, script.value.clone(), callbacks);
    let echo = script.echo_owner && script.value.is_some();
    let mut transcript = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!(step = index, event = %step.describe(), "replaying");
        apply_step(&mut editable, step);

        let notifications: Vec<Notification> = log.borrow_mut().drain(..).collect();
        if echo {
            for notification in &notifications {
                if let Notification::Change(v) | Notification::Cancel(v) | Notification::Submit(v) =
                    notification
                {
                    editable.set_value(Some(v.as_str()));
                }
            }
        }

        transcript.push(TranscriptEntry {
            step: index + 1,
            event: step.describe(),
            notifications,
            mode: editable.mode(),
            committed: editable.value().to_string(),
            pending: editable.pending().to_string(),
            preview: editable.preview(),
        });
    }

    transcript
}

fn apply_step(editable: &mut Editable, step: &Step) {
    match step {
        Step::FocusPreview => editable.focus_preview(),
        Step::Change { text } => editable.input_change(text),
        Step::Type { text } => editable.type_text(text),
        Step::Key { key } => editable.input_key(key),
        Step::Blur { to } => editable.input_blur(*to),
        Step::SetValue { value } => editable.set_value(value.as_deref()),
        Step::SetConfig { config } => editable.set_config(config.clone()),
        Step::EditButton => editable.edit_button(),
        Step::SubmitButton => editable.submit_button(),
        Step::CancelButton => editable.cancel_button(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = Script::from_yaml(
            "value: Hello\nsteps:\n  - do: focus_preview\n  - do: blur\n    to: submit_button\n  - do: set_value\n",
        )
        .unwrap();
        assert_eq!(script.value.as_deref(), Some("Hello"));
        assert_eq!(
            script.steps,
            vec![
                Step::FocusPreview,
                Step::Blur {
                    to: Some(FocusTarget::SubmitButton)
                },
                Step::SetValue { value: None },
            ]
        );
    }

    #[test]
    fn test_unknown_step_is_parse_error() {
        let err = Script::from_yaml("steps:\n  - do: dance\n").unwrap_err();
        assert!(matches!(err, ScriptError::ParseError(_)));
    }

    #[test]
    fn test_run_uncontrolled_submit() {
        let script = Script {
            config: Some(EditableConfig {
                default_value: Some("Hello".into()),
                ..Default::default()
            }),
            steps: vec![
                Step::FocusPreview,
                Step::Type {
                    text: "Yo".into(),
                },
                Step::Key {
                    key: "Enter".into(),
                },
            ],
            ..Default::default()
        };

        let transcript = run(&script, &EditableConfig::default());
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].notifications, vec![Notification::Edit]);
        assert_eq!(transcript[2].mode, Mode::Preview);
        assert_eq!(transcript[2].committed, "Yo");
        assert_eq!(
            transcript[2].notifications,
            vec![Notification::Submit("Yo".into())]
        );
    }

    #[test]
    fn test_echo_owner_updates_controlled_preview() {
        let script = Script {
            value: Some("Hello".into()),
            echo_owner: true,
            steps: vec![
                Step::FocusPreview,
                Step::Change {
                    text: "World".into(),
                },
                Step::Key {
                    key: "Enter".into(),
                },
            ],
            ..Default::default()
        };

        let transcript = run(&script, &EditableConfig::default());
        assert_eq!(transcript[1].committed, "World");
        assert_eq!(transcript[2].preview.text, "World");
    }
}
