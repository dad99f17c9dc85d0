pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{from_key_event, Event, Key, Modifiers, MouseButton};
pub use hit::{click_at, hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use types::*;
