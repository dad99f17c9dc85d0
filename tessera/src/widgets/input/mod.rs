//! Text input control.
//!
//! A controlled, labeled field. The caller owns the text and passes it in as
//! [`InputProps::value`]; edits come back through `on_change`. The field keeps
//! only its cursor and the password visibility.
//!
//! # Element ids
//!
//! With the default id `input`:
//!
//! - `input-label`, `input-field`, `input-text`
//! - `input-clear` (clearable and non-empty), `input-toggle` (password)
//! - `input-helper` or `input-error`

mod events;
mod render;
mod state;

pub use state::{
    ChangeCallback, InputField, InputProps, InputSize, InputState, InputType, InputVariant,
    Visibility,
};
