//! Focus capability of the rendered surfaces
//!
//! The runtime executes focus commands through [`Surfaces`]. Programmatic
//! focus changes are not reported back as surface events.

use crate::messages::FocusTarget;

/// Programmatic focus control over the preview and input surfaces
pub trait Surfaces {
    /// Give focus to the preview surface
    fn focus_preview(&mut self);

    /// Give focus to the input surface
    fn focus_input(&mut self);

    /// Select the whole text of the input surface
    fn select_input_all(&mut self);

    /// Remove focus from the input surface
    fn blur_input(&mut self);
}

/// In-memory surfaces that remember where focus is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSurfaces {
    /// Surface holding focus, if any
    pub focused: Option<FocusTarget>,
    /// Input text is fully selected
    pub input_selected_all: bool,
    /// Every focus change in order
    pub focus_log: Vec<FocusTarget>,
}

impl HeadlessSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focused == Some(target)
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
        self.focus_log.push(target);
    }
}

impl Surfaces for HeadlessSurfaces {
    fn focus_preview(&mut self) {
        self.input_selected_all = false;
        self.focus(FocusTarget::Preview);
    }

    fn focus_input(&mut self) {
        self.focus(FocusTarget::Input);
    }

    fn select_input_all(&mut self) {
        self.input_selected_all = true;
    }

    fn blur_input(&mut self) {
        if self.focused == Some(FocusTarget::Input) {
            self.focused = None;
        }
        self.input_selected_all = false;
    }
}
