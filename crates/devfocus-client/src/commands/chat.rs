use devfocus_shared::OwnerId;
use devfocus_store::{ChatMessage, Result};

use crate::events::StoreEvent;
use crate::facade::DataFacade;

impl DataFacade {
    /// Post to the shared feed. Content is filtered before the length check.
    pub fn post_chat_message(
        &mut self,
        owner: &OwnerId,
        owner_display: &str,
        content: &str,
    ) -> Result<ChatMessage> {
        let message = self
            .store
            .append_chat_message(owner, owner_display, content)?;
        self.events.emit(StoreEvent::ChatMessagePosted(message.clone()));
        Ok(message)
    }

    pub fn chat_feed(&self) -> Vec<ChatMessage> {
        self.store.chat_feed()
    }
}
