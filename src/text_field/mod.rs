//! Text model of the input surface.
//!
//! The input surface shows the pending value while the control is editing.
//! It is a single-line field:
//!
//! - [`StringBuffer`]: character-offset buffer backed by `String`
//! - [`Selection`]: anchor/head selection, the head doubles as the caret
//! - [`TextFieldState`]: buffer + selection + constraints, with editing operations
//! - [`EditConstraints`]: max length and character filters
//! - [`TextEditMsg`]: fine-grained edits forwarded by the surface
//!
//! # Example
//!
//! ```
//! use inline_edit::text_field::{EditConstraints, StringBuffer, TextFieldState};
//!
//! let mut field = TextFieldState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::single_line(),
//! );
//!
//! // Entering edit mode selects everything, so typing replaces it
//! field.select_all();
//! field.insert_char('!');
//!
//! assert_eq!(field.text(), "!");
//! ```

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

pub use buffer::StringBuffer;
pub use constraints::EditConstraints;
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::TextFieldState;
