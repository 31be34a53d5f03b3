//! Derived surface attributes
//!
//! Pure functions from [`EditableModel`] to the attributes each surface
//! renders. Nothing here mutates state.

use serde::Serialize;

use crate::model::EditableModel;
use crate::text_field::Selection;

/// Attributes of the read-only preview surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    /// Literal text content: the committed value, or the placeholder when empty
    pub text: String,
    /// `text` is the placeholder rather than the value
    pub is_placeholder: bool,
    /// Preview is replaced by the input while editing
    pub hidden: bool,
    pub aria_disabled: bool,
    /// Tab order slot; `None` when the preview is not focusable
    pub tab_index: Option<i32>,
}

/// Attributes of the editable input surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    /// Pending text while editing, committed value otherwise
    pub value: String,
    pub hidden: bool,
    pub aria_hidden: bool,
    /// Not focusable while previewing; the surface stays mounted
    pub disabled: bool,
    pub aria_disabled: bool,
    pub placeholder: Option<String>,
    #[serde(skip)]
    pub selection: Selection,
}

/// Attributes of one edit control button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub hidden: bool,
    pub aria_disabled: bool,
}

/// Attributes of the edit/submit/cancel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub edit: ControlView,
    pub submit: ControlView,
    pub cancel: ControlView,
}

pub fn preview_view(model: &EditableModel) -> PreviewView {
    let committed = model.committed_value();
    let placeholder = model
        .config
        .placeholder
        .as_deref()
        .filter(|_| committed.is_empty());

    let focusable = model.config.is_preview_focusable && model.config.is_interactive();
    let tab_index = (focusable && !model.is_editing()).then_some(0);

    PreviewView {
        text: placeholder.unwrap_or(committed).to_string(),
        is_placeholder: placeholder.is_some(),
        hidden: model.is_editing(),
        aria_disabled: model.config.is_disabled,
        tab_index,
    }
}

pub fn input_view(model: &EditableModel) -> InputView {
    let editing = model.is_editing();
    let value = if editing {
        model.pending_value()
    } else {
        model.committed_value()
    };

    InputView {
        value: value.to_string(),
        hidden: !editing,
        aria_hidden: !editing,
        disabled: !editing,
        aria_disabled: model.config.is_disabled,
        placeholder: model.config.placeholder.clone(),
        selection: model.field.selection,
    }
}

pub fn controls_view(model: &EditableModel) -> ControlsView {
    let editing = model.is_editing();
    let aria_disabled = model.config.is_disabled;

    ControlsView {
        edit: ControlView {
            hidden: editing,
            aria_disabled,
        },
        submit: ControlView {
            hidden: !editing,
            aria_disabled,
        },
        cancel: ControlView {
            hidden: !editing,
            aria_disabled,
        },
    }
}
