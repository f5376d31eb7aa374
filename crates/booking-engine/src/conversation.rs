//! Keyed conversation history with per-key expiry.
//!
//! Conversational callers (the chat front end that books appointments) need
//! continuity between turns. This store keeps one message list per
//! conversation id, each with its own deadline; writing to a conversation
//! refreshes its deadline. The store is an explicit dependency — pass it to
//! whatever needs continuity — not ambient global state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationItem {
    pub id: String,
    pub conversation_id: String,
    /// "inbound" or "outbound" relative to the assistant.
    pub direction: String,
    /// Provider message type (text, attachment, system event).
    pub kind: String,
    pub text: Option<String>,
    pub author_display_name: Option<String>,
    pub event_time: DateTime<Utc>,
}

struct Entry {
    items: Vec<ConversationItem>,
    deadline: Instant,
}

/// Conversation histories keyed by conversation id, each expiring `ttl` after
/// its last write.
pub struct ConversationStore {
    ttl: Duration,
    entries: HashMap<String, Entry>,
}

impl ConversationStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Append an item to its conversation, refreshing the conversation's
    /// deadline. An expired conversation is replaced, not extended.
    pub fn store_item(&mut self, item: ConversationItem) {
        let now = Instant::now();
        let key = item.conversation_id.clone();
        let entry = self
            .entries
            .entry(key)
            .and_modify(|e| {
                if e.deadline <= now {
                    e.items.clear();
                }
            })
            .or_insert_with(|| Entry {
                items: Vec::new(),
                deadline: now,
            });
        entry.items.push(item);
        entry.deadline = now + self.ttl;
    }

    /// The items of a conversation, or `None` if unknown or expired.
    pub fn conversation(&self, conversation_id: &str) -> Option<&[ConversationItem]> {
        let entry = self.entries.get(conversation_id)?;
        if entry.deadline <= Instant::now() {
            return None;
        }
        Some(&entry.items)
    }

    /// Drop every expired conversation.
    pub fn purge_expired(&mut self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.deadline > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
