//! Built-in components.
//!
//! Each component is a small state struct with a pure `view` that builds a
//! tessera-dom [`Element`](tessera_dom::Element) tree from caller props, and a
//! `handle_event` that maps targeted events back onto state changes and
//! callbacks. Call `view` again after every state change.

pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use events::EventResult;
pub use input::InputField;
pub use selection::Selection;
pub use table::DataTable;
