//! Inline Edit - Elm-style edit-in-place text control
//!
//! A control shows a value as read-only preview text and switches to an
//! editable input on focus. Enter or blur confirms, Escape reverts. The value
//! is either owned by the control or supplied by its owner on every render.
//!
//! ```
//! use inline_edit::{Callbacks, Editable, EditableConfig};
//!
//! let config = EditableConfig {
//!     default_value: Some("Hello".into()),
//!     ..Default::default()
//! };
//! let mut editable = Editable::new(config, None, Callbacks::new());
//!
//! editable.focus_preview();
//! editable.input_change("World");
//! editable.input_key("Escape");
//! assert_eq!(editable.value(), "Hello");
//! ```

pub mod callbacks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod surface;
pub mod text_field;
pub mod tracing;
pub mod update;
pub mod util;
pub mod value;
pub mod view;

// Re-export commonly used types
pub use callbacks::{Callbacks, Handlers};
pub use commands::{Cmd, Notification};
pub use config::EditableConfig;
pub use messages::{FocusTarget, Msg};
pub use model::{EditableModel, Mode};
pub use runtime::Editable;
pub use update::update;
