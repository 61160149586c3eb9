use devfocus_shared::OwnerId;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ChatMessage;
use crate::store::EntityStore;

impl EntityStore {
    /// Filter, validate and append a chat message.
    pub fn append_chat_message(
        &mut self,
        owner: &OwnerId,
        owner_display: &str,
        content: &str,
    ) -> Result<ChatMessage> {
        let content = self.filter.check_message(content)?;

        let message = ChatMessage {
            id: Uuid::new_v4(),
            owner: owner.clone(),
            owner_display: owner_display.to_string(),
            content,
            created_at: self.now(),
        };
        self.chat_messages.push(message.clone());

        tracing::info!(msg_id = %message.id, %owner, "chat message posted");
        Ok(message)
    }

    /// The whole feed, oldest first.
    pub fn chat_feed(&self) -> Vec<ChatMessage> {
        let mut feed = self.chat_messages.clone();
        feed.sort_by_key(|m| m.created_at);
        feed
    }

    /// The newest `limit` messages, newest first.
    pub fn recent_chat_messages(&self, limit: usize) -> Vec<ChatMessage> {
        let mut feed = self.chat_feed();
        feed.reverse();
        feed.truncate(limit);
        feed
    }
}
