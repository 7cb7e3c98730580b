//! Runtime-agnostic core of the Q&A chat client.
//!
//! Holds the conversation state machine, the wire types exchanged with the
//! Q&A backend and the [`QaBackend`] seam that the browser and native
//! front-ends implement with their own HTTP stacks.

pub mod backend;
pub mod config;
pub mod conversation;
pub mod errors;
pub mod models;
pub mod protocol;
pub mod theme;

pub use backend::QaBackend;
pub use conversation::{ConversationState, Phase};
pub use errors::AskError;
pub use models::{AskRequest, AskResponse, Message, MessageRole};
pub use theme::Theme;
