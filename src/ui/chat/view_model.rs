use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::ChatClient;
use crate::model::ChatMessage;
use crate::scope::ViewModelScope;
use crate::ui::chat::intent::ChatIntent;
use crate::ui::chat::reducer::ChatReducer;
use crate::ui::chat::state::ChatState;
use crate::ui::mvi::Store;

/// State holder for the chat screen.
pub struct ChatViewModel {
    store: Store<ChatReducer>,
    client: ChatClient,
    scope: ViewModelScope,
}

impl ChatViewModel {
    pub fn new(client: ChatClient) -> Self {
        Self {
            store: Store::default(),
            client,
            scope: ViewModelScope::new(),
        }
    }

    pub fn state(&self) -> ChatState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.store.subscribe()
    }

    /// Send a user message and request the assistant's reply.
    ///
    /// Blank input, or input arriving while a reply is pending, leaves the
    /// state untouched and returns `None`. Otherwise the user message is
    /// visible in the state before this returns.
    pub fn send(&self, input: &str) -> Option<JoinHandle<()>> {
        if input.trim().is_empty() {
            return None;
        }

        let Some(sent) = self.store.dispatch_if(
            |state| !state.is_loading,
            ChatIntent::MessageSent {
                message: ChatMessage::user(input),
            },
        ) else {
            tracing::debug!("Message ignored: reply already pending");
            return None;
        };

        let history = sent.messages;
        let store = self.store.clone();
        let scope = self.scope.handle();
        let client = self.client.clone();
        let span = tracing::debug_span!(
            "chat_completion",
            request_id = %Uuid::new_v4(),
            history = history.len()
        );

        Some(self.scope.launch(
            async move {
                let intent = match client.reply(history).await {
                    Ok(message) => ChatIntent::ReplyReceived { message },
                    Err(err) => {
                        tracing::warn!(error = %err, "Chat completion failed");
                        ChatIntent::ReplyFailed {
                            message: err.user_message(),
                        }
                    }
                };
                scope.unless_cancelled(|| store.dispatch(intent));
            }
            .instrument(span),
        ))
    }

    /// Forget the conversation and any error.
    pub fn clear(&self) {
        self.store.dispatch(ChatIntent::Cleared);
    }
}
