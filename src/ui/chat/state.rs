//! State for the chat screen.

use crate::model::{ChatMessage, ChatRole};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatState {
    /// Conversation in display order, user and assistant interleaved.
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UiState for ChatState {}

impl ChatState {
    /// The most recent assistant reply, if any.
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == ChatRole::Assistant)
    }
}
