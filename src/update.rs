//! Update functions for the Elm-style architecture
//!
//! All state transitions of an editable control flow through [`update`].

use crate::commands::{Cmd, Notification};
use crate::input::Keystroke;
use crate::messages::{ControlMsg, FocusTarget, InputMsg, Msg, PreviewMsg, SyncMsg};
use crate::model::EditableModel;
use crate::text_field::TextEditMsg;

#[cfg(debug_assertions)]
use crate::tracing::ModelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditableModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditableModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Preview(m) => update_preview(model, m),
        Msg::Input(m) => update_input(model, m),
        Msg::Control(m) => update_control(model, m),
        Msg::Sync(m) => update_sync(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut EditableModel, msg: Msg) -> Option<Cmd> {
    let label = msg.label();
    let span = span!(Level::DEBUG, "update", msg = %label);
    let _guard = span.enter();

    let before = ModelSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = ModelSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "transition", "{}", diff);
    }
    result
}

/// Side effects for a freshly mounted control.
///
/// A control created with `start_with_edit_view` focuses its input surface
/// without a preview focus and without `on_edit`.
pub fn mount(model: &EditableModel) -> Option<Cmd> {
    if model.is_editing() {
        Some(Cmd::FocusInput {
            select_all: model.config.select_all_on_focus,
        })
    } else {
        None
    }
}

/// Handle preview surface messages
pub fn update_preview(model: &mut EditableModel, msg: PreviewMsg) -> Option<Cmd> {
    match msg {
        PreviewMsg::Focus => begin_edit(model),
    }
}

/// Handle input surface messages
pub fn update_input(model: &mut EditableModel, msg: InputMsg) -> Option<Cmd> {
    if !model.is_editing() {
        tracing::trace!("input surface event while previewing, ignored");
        return None;
    }

    match msg {
        InputMsg::Change(text) => {
            model.field.replace_all(&text);
            Some(report_change(model))
        }
        InputMsg::Edit(edit) => apply_edit(model, &edit),
        InputMsg::Key(stroke) => handle_key(model, &stroke),
        InputMsg::Blur { related } => handle_blur(model, related),
    }
}

/// Handle edit control button messages
pub fn update_control(model: &mut EditableModel, msg: ControlMsg) -> Option<Cmd> {
    match msg {
        ControlMsg::Edit => begin_edit(model),
        ControlMsg::Submit if model.is_editing() => Some(submit(model)),
        ControlMsg::Cancel if model.is_editing() => Some(cancel(model)),
        ControlMsg::Submit | ControlMsg::Cancel => None,
    }
}

/// Handle render-pass messages
pub fn update_sync(model: &mut EditableModel, msg: SyncMsg) -> Option<Cmd> {
    match msg {
        SyncMsg::Value(value) => {
            model.observe_value(value.as_deref());
            None
        }
        SyncMsg::Config(config) => {
            model.apply_config(config);
            if model.is_editing() && !model.config.is_interactive() {
                tracing::debug!("control disabled while editing, pending edit dropped");
                model.abandon_editing();
                return Some(Cmd::BlurInput);
            }
            None
        }
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Preview → Editing
fn begin_edit(model: &mut EditableModel) -> Option<Cmd> {
    if !model.config.is_interactive() {
        tracing::debug!("edit entry suppressed: control is disabled");
        return None;
    }
    if model.is_editing() {
        return None;
    }

    model.enter_editing();
    tracing::debug!(value = model.prior_value(), "entered edit mode");

    Some(Cmd::batch(vec![
        Cmd::FocusInput {
            select_all: model.config.select_all_on_focus,
        },
        Cmd::notify(Notification::Edit),
    ]))
}

/// Editing → Preview, confirming the pending value
fn submit(model: &mut EditableModel) -> Cmd {
    let value = model.pending_value().to_string();
    model.leave_editing(&value);
    tracing::debug!(value = %value, "submitted");

    Cmd::batch(vec![
        Cmd::notify(Notification::Submit(value)),
        Cmd::leave_input(),
    ])
}

/// Editing → Preview, reverting to the cancel target
fn cancel(model: &mut EditableModel) -> Cmd {
    let target = model.cancel_target().to_string();
    model.field.set_content(&target);
    model.leave_editing(&target);
    tracing::debug!(value = %target, "cancelled");

    Cmd::batch(vec![
        Cmd::notify(Notification::Cancel(target)),
        Cmd::leave_input(),
    ])
}

fn apply_edit(model: &mut EditableModel, edit: &TextEditMsg) -> Option<Cmd> {
    if !model.field.apply(edit) {
        return None;
    }
    tracing::trace!(pending = model.pending_value(), "pending value edited");
    Some(report_change(model))
}

/// `on_change` with the constrained pending value
fn report_change(model: &mut EditableModel) -> Cmd {
    model.record_change();
    Cmd::notify(Notification::Change(model.pending_value().to_string()))
}

fn handle_key(model: &mut EditableModel, stroke: &Keystroke) -> Option<Cmd> {
    if stroke.is_cancel() {
        Some(cancel(model))
    } else if stroke.is_submit() {
        Some(submit(model))
    } else {
        None
    }
}

fn handle_blur(model: &mut EditableModel, related: Option<FocusTarget>) -> Option<Cmd> {
    // Focus moving onto our own buttons lets their press decide
    if related.is_some_and(FocusTarget::is_control) {
        return None;
    }
    if model.config.submit_on_blur {
        Some(submit(model))
    } else {
        None
    }
}
