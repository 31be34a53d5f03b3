//! Control runtime
//!
//! [`Editable`] owns one control: it feeds surface events through
//! [`update`](crate::update::update) and executes the resulting commands
//! synchronously, so every callback of an event has run before the next
//! event is handled.

use crate::callbacks::{Callbacks, Handlers};
use crate::commands::Cmd;
use crate::config::EditableConfig;
use crate::input::Keystroke;
use crate::messages::{ControlMsg, FocusTarget, InputMsg, Msg, SyncMsg};
use crate::model::{EditableModel, Mode};
use crate::surface::{HeadlessSurfaces, Surfaces};
use crate::text_field::TextEditMsg;
use crate::update::{mount, update};
use crate::view::{controls_view, input_view, preview_view, ControlsView, InputView, PreviewView};

/// One mounted edit-in-place control
#[derive(Debug)]
pub struct Editable<S: Surfaces = HeadlessSurfaces> {
    model: EditableModel,
    callbacks: Callbacks,
    handlers: Handlers,
    surfaces: S,
}

impl Editable<HeadlessSurfaces> {
    /// Mount a control over in-memory surfaces.
    ///
    /// `value` makes the control controlled; otherwise `config.default_value`
    /// seeds its own value.
    pub fn new(config: EditableConfig, value: Option<String>, callbacks: Callbacks) -> Self {
        Self::with_surfaces(config, value, callbacks, HeadlessSurfaces::new())
    }
}

impl<S: Surfaces> Editable<S> {
    /// Mount a control over the given surfaces
    pub fn with_surfaces(
        config: EditableConfig,
        value: Option<String>,
        callbacks: Callbacks,
        surfaces: S,
    ) -> Self {
        let model = EditableModel::new(config, value);
        let mut editable = Self {
            model,
            callbacks,
            handlers: Handlers::default(),
            surfaces,
        };
        if let Some(cmd) = mount(&editable.model) {
            editable.process_cmd(cmd);
        }
        tracing::debug!(model = ?editable.model, "mounted");
        editable
    }

    /// Attach caller handlers for the surface events
    pub fn with_handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Run one message through the update function and execute its commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::Notify(notification) => {
                    tracing::trace!(callback = notification.callback_name(), "notify");
                    self.callbacks.notify(&notification);
                }
                Cmd::FocusInput { select_all } => {
                    self.surfaces.focus_input();
                    if select_all {
                        self.surfaces.select_input_all();
                    }
                }
                Cmd::BlurInput => self.surfaces.blur_input(),
                Cmd::FocusPreview => self.surfaces.focus_preview(),
            }
        }
    }

    // =========================================================================
    // Render passes
    // =========================================================================

    /// Re-render with the owner's current value and options
    pub fn render(&mut self, value: Option<&str>, config: EditableConfig) {
        self.dispatch(Msg::Sync(SyncMsg::Config(config)));
        self.dispatch(Msg::set_value(value));
    }

    /// Re-render with a new externally supplied value, keeping the options
    pub fn set_value(&mut self, value: Option<&str>) {
        self.dispatch(Msg::set_value(value));
    }

    /// Re-render with new options, keeping the value
    pub fn set_config(&mut self, config: EditableConfig) {
        self.dispatch(Msg::Sync(SyncMsg::Config(config)));
    }

    // =========================================================================
    // Surface events: control handling first, then the caller's handler
    // =========================================================================

    pub fn focus_preview(&mut self) {
        self.dispatch(Msg::focus_preview());
        if let Some(f) = self.handlers.on_preview_focus.as_mut() {
            f();
        }
    }

    /// Raw text-change notification carrying the whole new text
    pub fn input_change(&mut self, text: &str) {
        self.dispatch(Msg::change(text));
        if let Some(f) = self.handlers.on_input_change.as_mut() {
            f(text);
        }
    }

    /// Fine-grained edit of the pending text.
    ///
    /// The caller's `on_input_change` sees every edit, caret moves included,
    /// with the pending text after the core handler ran.
    pub fn input_edit(&mut self, edit: TextEditMsg) {
        self.dispatch(Msg::edit(edit));
        let text = self.model.pending_value().to_string();
        if let Some(f) = self.handlers.on_input_change.as_mut() {
            f(&text);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.input_edit(TextEditMsg::InsertChar(ch));
        }
    }

    /// Key press given as a key string such as `"Enter"` or `"shift+enter"`
    pub fn input_key(&mut self, key: &str) {
        self.input_keystroke(Keystroke::parse(key));
    }

    pub fn input_keystroke(&mut self, stroke: Keystroke) {
        self.dispatch(Msg::Input(InputMsg::Key(stroke.clone())));
        if let Some(f) = self.handlers.on_input_key.as_mut() {
            f(&stroke);
        }
    }

    /// Input surface lost focus to `related`, if known
    pub fn input_blur(&mut self, related: Option<FocusTarget>) {
        self.dispatch(Msg::Input(InputMsg::Blur { related }));
        if let Some(f) = self.handlers.on_input_blur.as_mut() {
            f(related);
        }
    }

    pub fn edit_button(&mut self) {
        self.dispatch(Msg::Control(ControlMsg::Edit));
    }

    pub fn submit_button(&mut self) {
        self.dispatch(Msg::Control(ControlMsg::Submit));
    }

    pub fn cancel_button(&mut self) {
        self.dispatch(Msg::Control(ControlMsg::Cancel));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn mode(&self) -> Mode {
        self.model.mode
    }

    pub fn is_editing(&self) -> bool {
        self.model.is_editing()
    }

    /// The last confirmed value
    pub fn value(&self) -> &str {
        self.model.committed_value()
    }

    /// The in-progress text
    pub fn pending(&self) -> &str {
        self.model.pending_value()
    }

    pub fn preview(&self) -> PreviewView {
        preview_view(&self.model)
    }

    pub fn input(&self) -> InputView {
        input_view(&self.model)
    }

    pub fn controls(&self) -> ControlsView {
        controls_view(&self.model)
    }

    pub fn model(&self) -> &EditableModel {
        &self.model
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn config(&self) -> &EditableConfig {
        &self.model.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Notification;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(config: EditableConfig) -> (Editable, Rc<RefCell<Vec<Notification>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (e, c, x, s) = (log.clone(), log.clone(), log.clone(), log.clone());
        let callbacks = Callbacks::new()
            .on_edit(move || e.borrow_mut().push(Notification::Edit))
            .on_change(move |v| c.borrow_mut().push(Notification::Change(v.into())))
            .on_cancel(move |v| x.borrow_mut().push(Notification::Cancel(v.into())))
            .on_submit(move |v| s.borrow_mut().push(Notification::Submit(v.into())));
        (Editable::new(config, None, callbacks), log)
    }

    #[test]
    fn test_focus_then_enter_fires_edit_then_submit() {
        let (mut editable, log) = recording(EditableConfig {
            default_value: Some("Hello".into()),
            ..Default::default()
        });

        editable.focus_preview();
        assert!(editable.surfaces().is_focused(FocusTarget::Input));
        assert!(editable.surfaces().input_selected_all);

        editable.input_key("Enter");
        assert!(editable.surfaces().is_focused(FocusTarget::Preview));
        assert_eq!(
            *log.borrow(),
            vec![Notification::Edit, Notification::Submit("Hello".into())]
        );
    }

    #[test]
    fn test_type_replaces_selection() {
        let (mut editable, log) = recording(EditableConfig {
            default_value: Some("Hello".into()),
            ..Default::default()
        });

        editable.focus_preview();
        editable.type_text("Hi");
        assert_eq!(editable.pending(), "Hi");
        assert_eq!(
            log.borrow()[1..],
            [
                Notification::Change("H".into()),
                Notification::Change("Hi".into())
            ]
        );
    }

    #[test]
    fn test_caller_handler_runs_after_core() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let core = Rc::clone(&order);
        let caller = Rc::clone(&order);

        let callbacks = Callbacks::new().on_edit(move || core.borrow_mut().push("core"));
        let handlers = Handlers::new().on_preview_focus(move || caller.borrow_mut().push("caller"));
        let mut editable =
            Editable::new(EditableConfig::default(), None, callbacks).with_handlers(handlers);

        editable.focus_preview();
        assert_eq!(*order.borrow(), vec!["core", "caller"]);
    }
}
