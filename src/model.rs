//! Model for the Elm-style architecture
//!
//! [`EditableModel`] is the whole state of one edit-in-place control.

use std::fmt;

use serde::Serialize;

use crate::config::EditableConfig;
use crate::text_field::{StringBuffer, TextFieldState};
use crate::value::{value_source, Controlled, ValueSource};

/// Interaction mode. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Preview,
    Editing,
}

/// State of one edit-in-place control
pub struct EditableModel {
    /// Current interaction mode
    pub mode: Mode,
    /// Options of the latest render pass
    pub config: EditableConfig,
    /// Pending text shown by the input surface. Only authoritative while editing.
    pub field: TextFieldState,
    /// Committed value, owned locally or mirrored from the owner
    source: Box<dyn ValueSource>,
    /// Committed value captured when edit mode was entered
    prior_value: String,
    /// Latest external value seen while editing that was not an echo of our own `on_change`
    external_while_editing: Option<String>,
    /// Values reported through `on_change` during this edit, oldest first, not yet echoed back
    reported_changes: Vec<String>,
}

impl EditableModel {
    /// Create the state for a freshly mounted control.
    ///
    /// `value` selects controlled mode; otherwise `config.default_value` seeds
    /// the committed value.
    pub fn new(config: EditableConfig, value: Option<String>) -> Self {
        let source = value_source(value, config.default_value.clone());
        let committed = source.read().to_string();
        let field = TextFieldState::new(StringBuffer::from_text(&committed), config.constraints());

        let mut model = Self {
            mode: Mode::Preview,
            config,
            field,
            source,
            prior_value: committed,
            external_while_editing: None,
            reported_changes: Vec::new(),
        };

        if model.config.start_with_edit_view && model.config.is_interactive() {
            model.enter_editing();
        }
        model
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn is_controlled(&self) -> bool {
        self.source.is_controlled()
    }

    /// The last confirmed value
    pub fn committed_value(&self) -> &str {
        self.source.read()
    }

    /// The in-progress text of the input surface
    pub fn pending_value(&self) -> &str {
        self.field.as_str()
    }

    /// Committed value captured at the latest Preview → Editing transition
    pub fn prior_value(&self) -> &str {
        &self.prior_value
    }

    /// Value a cancel reverts to right now.
    ///
    /// In controlled mode an external update observed during the edit wins over
    /// the value captured at edit entry.
    pub fn cancel_target(&self) -> &str {
        self.external_while_editing
            .as_deref()
            .unwrap_or(&self.prior_value)
    }

    /// Preview → Editing: snapshot the committed value and load it into the field
    pub(crate) fn enter_editing(&mut self) {
        let committed = self.source.read().to_string();
        self.field.set_content(&committed);
        if self.config.select_all_on_focus {
            self.field.select_all();
        }
        self.prior_value = committed;
        self.external_while_editing = None;
        self.reported_changes.clear();
        self.mode = Mode::Editing;
    }

    /// Editing → Preview, committing `value` if the control owns it
    pub(crate) fn leave_editing(&mut self, value: &str) {
        let stored = self.source.commit(value);
        tracing::trace!(value, stored, "leaving edit mode");
        self.external_while_editing = None;
        self.reported_changes.clear();
        self.mode = Mode::Preview;
    }

    /// Editing → Preview without committing anything
    pub(crate) fn abandon_editing(&mut self) {
        let committed = self.source.read().to_string();
        self.field.set_content(&committed);
        self.external_while_editing = None;
        self.reported_changes.clear();
        self.mode = Mode::Preview;
    }

    /// Remember the pending value just reported through `on_change`, so an
    /// owner echoing it back is not mistaken for an external update.
    pub(crate) fn record_change(&mut self) {
        if self.is_editing() {
            self.reported_changes.push(self.field.as_str().to_string());
        }
    }

    /// Observe the externally supplied value of a render pass.
    ///
    /// While editing, a value the control reported through `on_change` is an
    /// echo. Echoes may lag behind; one consumes every older report. Any other
    /// change becomes the cancel target and drops the remaining reports.
    ///
    /// Returns true if the committed value changed.
    pub(crate) fn observe_value(&mut self, value: Option<&str>) -> bool {
        let Some(external) = value else {
            if self.source.is_controlled() {
                tracing::warn!("external value withdrawn; control stays controlled");
            }
            return false;
        };

        if !self.source.is_controlled() {
            tracing::warn!(
                value = external,
                "external value supplied to an uncontrolled control; switching to controlled"
            );
            self.source = Box::new(Controlled::new(self.source.read()));
        }

        let changed = self.source.observe(external);
        if !self.is_editing() {
            return changed;
        }

        if let Some(pos) = self.reported_changes.iter().position(|v| v == external) {
            tracing::trace!(value = external, pending = pos, "owner echoed a reported change");
            self.reported_changes.drain(..=pos);
        } else if changed {
            tracing::debug!(value = external, "external update while editing");
            self.external_while_editing = Some(external.to_string());
            self.reported_changes.clear();
        }
        changed
    }

    /// Apply the options of a render pass
    pub(crate) fn apply_config(&mut self, config: EditableConfig) {
        self.field.constraints = config.constraints();
        self.config = config;
    }
}

impl fmt::Debug for EditableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableModel")
            .field("mode", &self.mode)
            .field("controlled", &self.is_controlled())
            .field("committed", &self.committed_value())
            .field("pending", &self.pending_value())
            .field("prior", &self.prior_value)
            .field("external_while_editing", &self.external_while_editing)
            .field("reported_changes", &self.reported_changes)
            .finish()
    }
}
