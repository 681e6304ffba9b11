//! # TUI Components
//!
//! Two patterns, following the rest of the interface:
//!
//! - **Stateless (props-based)**: [`TitleBar`], [`Message`] — created fresh
//!   each frame with the data they render.
//! - **Stateful (event-driven)**: [`InputBox`], [`MessageListState`] — hold
//!   local editing/scroll state and emit high-level events.
//!
//! Each component file contains its state types, event handling, rendering,
//! and tests, so one file tells the whole story of one component.

pub mod input_box;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use message::Message;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
