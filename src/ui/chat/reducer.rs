use crate::ui::chat::intent::ChatIntent;
use crate::ui::chat::state::ChatState;
use crate::ui::mvi::Reducer;

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatState;
    type Intent = ChatIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::MessageSent { message } => {
                let mut messages = state.messages;
                messages.push(message);
                ChatState {
                    messages,
                    is_loading: true,
                    error: None,
                }
            }
            ChatIntent::ReplyReceived { message } => {
                let mut messages = state.messages;
                messages.push(message);
                ChatState {
                    messages,
                    is_loading: false,
                    error: state.error,
                }
            }
            ChatIntent::ReplyFailed { message } => ChatState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            ChatIntent::Cleared => ChatState {
                messages: Vec::new(),
                error: None,
                ..state
            },
        }
    }
}
