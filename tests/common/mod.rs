//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use inline_edit::{Callbacks, Editable, EditableConfig, Notification};

/// Shared log of every callback a control fired, in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this recorder
    pub fn callbacks(&self) -> Callbacks {
        let (edit, change, cancel, submit) = (
            self.log.clone(),
            self.log.clone(),
            self.log.clone(),
            self.log.clone(),
        );
        Callbacks::new()
            .on_edit(move || edit.borrow_mut().push(Notification::Edit))
            .on_change(move |v| change.borrow_mut().push(Notification::Change(v.to_string())))
            .on_cancel(move |v| cancel.borrow_mut().push(Notification::Cancel(v.to_string())))
            .on_submit(move |v| submit.borrow_mut().push(Notification::Submit(v.to_string())))
    }

    pub fn all(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    /// Drain and return what was recorded since the last call
    pub fn take(&self) -> Vec<Notification> {
        self.log.borrow_mut().drain(..).collect()
    }

    pub fn count_edits(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Edit))
            .count()
    }

    /// Values of every on_change, in order
    pub fn changes(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Change(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Uncontrolled control seeded with `value`
pub fn uncontrolled(value: &str, recorder: &Recorder) -> Editable {
    uncontrolled_with(
        EditableConfig {
            default_value: Some(value.to_string()),
            ..Default::default()
        },
        recorder,
    )
}

pub fn uncontrolled_with(config: EditableConfig, recorder: &Recorder) -> Editable {
    Editable::new(config, None, recorder.callbacks())
}

/// Controlled control rendered with `value`
pub fn controlled(value: &str, recorder: &Recorder) -> Editable {
    Editable::new(
        EditableConfig::default(),
        Some(value.to_string()),
        recorder.callbacks(),
    )
}

/// Owner that stores every reported value and re-renders the control with it
pub fn echo_owner(editable: &mut Editable, recorder: &Recorder) -> Vec<Notification> {
    let fired = recorder.take();
    for notification in &fired {
        match notification {
            Notification::Change(v) | Notification::Cancel(v) | Notification::Submit(v) => {
                editable.set_value(Some(v.as_str()))
            }
            Notification::Edit => {}
        }
    }
    fired
}
