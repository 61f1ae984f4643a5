//! Focus state for the conversation list.

use serde::{Deserialize, Serialize};

use crate::entities::Conversation;
use crate::store::ConversationStore;
use crate::types::ConversationId;

/// Which conversation, if any, is focused for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing focused yet
    NoSelection,
    /// A conversation is focused. The ID may go stale if the referenced
    /// conversation disappears; resolution treats that as no selection.
    Selected(ConversationId),
}

/// State machine resolving the active conversation.
///
/// Selection is transient per-session state: it is never persisted and a
/// default (the first conversation in store order) is derived whenever
/// conversations exist and no explicit choice has been made.
#[derive(Debug, Clone)]
pub struct ConversationSelector {
    state: SelectionState,
}

impl Default for ConversationSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSelector {
    /// Create a selector with nothing focused
    pub fn new() -> Self {
        Self {
            state: SelectionState::NoSelection,
        }
    }

    /// Current selection state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// ID of the focused conversation, if any
    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            SelectionState::NoSelection => None,
            SelectionState::Selected(id) => Some(id),
        }
    }

    /// Focus the first conversation when nothing is focused yet and the
    /// store is non-empty. Idempotent, and never overrides an existing
    /// explicit selection. Call again whenever the conversation list
    /// changes. Returns whether the focus changed.
    pub fn ensure_default(&mut self, store: &ConversationStore) -> bool {
        if self.state != SelectionState::NoSelection {
            return false;
        }

        match store.first() {
            Some(first) => {
                self.state = SelectionState::Selected(first.id.clone());
                true
            }
            None => false,
        }
    }

    /// Explicitly focus a conversation. Re-selecting the already focused
    /// conversation is a no-op transition. Returns whether the focus
    /// changed.
    pub fn select(&mut self, id: impl Into<ConversationId>) -> bool {
        let id = id.into();
        if self.active_id() == Some(id.as_str()) {
            return false;
        }
        self.state = SelectionState::Selected(id);
        true
    }

    /// Resolve the focused conversation against the store. Returns `None`
    /// under `NoSelection` or when the focused ID is no longer present;
    /// a stale selection is never an error.
    pub fn resolve_active<'a>(&self, store: &'a ConversationStore) -> Option<&'a Conversation> {
        self.active_id().and_then(|id| store.get(id))
    }
}
