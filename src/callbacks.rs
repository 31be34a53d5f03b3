//! Caller-supplied callbacks and surface handlers

use std::fmt;

use crate::commands::Notification;
use crate::input::Keystroke;
use crate::messages::FocusTarget;

type ValueCallback = Box<dyn FnMut(&str)>;

/// Lifecycle callbacks of a control. Each is optional.
#[derive(Default)]
pub struct Callbacks {
    on_edit: Option<Box<dyn FnMut()>>,
    on_change: Option<ValueCallback>,
    on_cancel: Option<ValueCallback>,
    on_submit: Option<ValueCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after Preview → Editing
    pub fn on_edit(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    /// Called with the new pending value on every text change while editing
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called with the value the control reverted to
    pub fn on_cancel(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called with the confirmed value
    pub fn on_submit(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Deliver a notification to its callback, if one is registered
    pub fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::Edit => {
                if let Some(f) = self.on_edit.as_mut() {
                    f();
                }
            }
            Notification::Change(value) => call(&mut self.on_change, value),
            Notification::Cancel(value) => call(&mut self.on_cancel, value),
            Notification::Submit(value) => call(&mut self.on_submit, value),
        }
    }
}

fn call(callback: &mut Option<ValueCallback>, value: &str) {
    if let Some(f) = callback.as_mut() {
        f(value);
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_edit", &self.on_edit.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

/// Caller handlers attached to the surfaces.
///
/// Each runs after the control's own handling of the same event and sees the
/// same event data.
#[derive(Default)]
pub struct Handlers {
    pub(crate) on_preview_focus: Option<Box<dyn FnMut()>>,
    pub(crate) on_input_change: Option<ValueCallback>,
    pub(crate) on_input_key: Option<Box<dyn FnMut(&Keystroke)>>,
    pub(crate) on_input_blur: Option<Box<dyn FnMut(Option<FocusTarget>)>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_preview_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_preview_focus = Some(Box::new(f));
        self
    }

    pub fn on_input_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_input_change = Some(Box::new(f));
        self
    }

    pub fn on_input_key(mut self, f: impl FnMut(&Keystroke) + 'static) -> Self {
        self.on_input_key = Some(Box::new(f));
        self
    }

    pub fn on_input_blur(mut self, f: impl FnMut(Option<FocusTarget>) + 'static) -> Self {
        self.on_input_blur = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_preview_focus", &self.on_preview_focus.is_some())
            .field("on_input_change", &self.on_input_change.is_some())
            .field("on_input_key", &self.on_input_key.is_some())
            .field("on_input_blur", &self.on_input_blur.is_some())
            .finish()
    }
}
