use crate::model::ChatMessage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    /// User message accepted; shown before the request goes out.
    MessageSent { message: ChatMessage },
    ReplyReceived { message: ChatMessage },
    ReplyFailed { message: String },
    Cleared,
}

impl Intent for ChatIntent {}
