//! Session host wiring the messaging components together.

use tokio::sync::{broadcast, watch};
use tracing::debug;

use knot_registry::{Post, Registry, User};

use crate::entities::{Conversation, Message};
use crate::services::{ConversationSelector, MessageComposer, PlaceholderEngine};
use crate::store::{ConversationStore, InterestTracker};
use crate::types::{ConversationId, MessagingResult, PostId, SessionEvent, UserId};

/// Capacity of the session event channel; slow observers simply lag
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The explicit application context for one client session.
///
/// Owns the registry, the conversation store, the selection state, the
/// interest tracker, and the placeholder engine; every mutation enters
/// through a `&mut self` method here and runs to completion before the
/// next one, so no two mutations ever interleave. Observers subscribe to
/// [`SessionEvent`]s, which are published strictly after the mutation they
/// describe is visible; the rendering layer relies on that ordering to
/// scroll the newest message into view.
pub struct ChatSession {
    registry: Registry,
    store: ConversationStore,
    selector: ConversationSelector,
    composer: MessageComposer,
    interests: InterestTracker,
    placeholder: PlaceholderEngine,
    current_user_id: UserId,
    post_context: Option<PostId>,
    events: broadcast::Sender<SessionEvent>,
}

impl ChatSession {
    /// Create a session for the given user over seeded reference data.
    /// The default selection (first conversation, when one exists) is
    /// derived immediately.
    pub fn new(
        registry: Registry,
        store: ConversationStore,
        placeholder: PlaceholderEngine,
        current_user_id: impl Into<UserId>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let mut session = Self {
            registry,
            store,
            selector: ConversationSelector::new(),
            composer: MessageComposer::new(),
            interests: InterestTracker::new(),
            placeholder,
            current_user_id: current_user_id.into(),
            post_context: None,
            events,
        };
        session.ensure_default_selection();
        session
    }

    /// The registry backing this session
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// ID of the signed-in user
    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    /// The signed-in user, when the registry knows them
    pub fn current_user(&self) -> Option<&User> {
        self.registry.user(&self.current_user_id)
    }

    /// All conversations, in store order
    pub fn conversations(&self) -> &[Conversation] {
        self.store.conversations()
    }

    /// The focused conversation, resolved defensively against the store
    pub fn resolve_active(&self) -> Option<&Conversation> {
        self.selector.resolve_active(&self.store)
    }

    /// ID of the focused conversation, if any
    pub fn active_conversation_id(&self) -> Option<&str> {
        self.selector.active_id()
    }

    /// Subscribe to session events
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Derive the default selection when nothing is focused yet. Invoked
    /// on construction; call again after any change to the conversation
    /// list.
    pub fn ensure_default_selection(&mut self) {
        if self.selector.ensure_default(&self.store) {
            self.publish_selection();
        }
    }

    /// Explicitly focus a conversation. Re-selecting the focused one is a
    /// no-op and publishes nothing.
    pub fn select_conversation(&mut self, id: impl Into<ConversationId>) {
        if self.selector.select(id) {
            self.publish_selection();
        }
    }

    /// Validate the draft and commit it into the active conversation as
    /// the signed-in user. The message is committed before observers are
    /// notified.
    pub fn send(&mut self, draft: &str) -> MessagingResult<Message> {
        let conversation_id = self.selector.active_id().map(str::to_string);
        let message = self.composer.send(
            &mut self.store,
            draft,
            conversation_id.as_deref(),
            &self.current_user_id,
        )?;

        if let Some(conversation_id) = conversation_id {
            let _ = self.events.send(SessionEvent::MessageAppended {
                conversation_id,
                message: message.clone(),
            });
        }
        Ok(message)
    }

    /// Register the signed-in user's interest in a post. Returns whether
    /// this call changed state; repeat registrations are a quiet no-op.
    /// First-time registrations are mirrored into the registry's per-post
    /// interested set and announced to any analytics observers,
    /// fire-and-forget.
    pub fn register_interest(&mut self, post_id: &str) -> bool {
        if !self.interests.register(post_id) {
            return false;
        }

        self.registry.mark_interested(post_id, &self.current_user_id);
        let _ = self.events.send(SessionEvent::InterestRegistered {
            post_id: post_id.to_string(),
            user_id: self.current_user_id.clone(),
        });
        true
    }

    /// Whether the signed-in user has registered interest in a post
    pub fn is_interested(&self, post_id: &str) -> bool {
        self.interests.is_interested(post_id)
    }

    /// Attach or clear the post context of the active chat. Attaching
    /// pins the input placeholder to the post; clearing resumes ambient
    /// rotation.
    pub fn set_post_context(&mut self, post: Option<&Post>) {
        self.post_context = post.map(|p| p.id.clone());
        self.placeholder.set_post_context(post);
    }

    /// ID of the post the active chat is anchored to, if any
    pub fn post_context(&self) -> Option<&str> {
        self.post_context.as_deref()
    }

    /// Current input placeholder text
    pub fn placeholder(&self) -> String {
        self.placeholder.current()
    }

    /// Watch the input placeholder for changes
    pub fn subscribe_placeholder(&self) -> watch::Receiver<String> {
        self.placeholder.subscribe()
    }

    /// Cancel the ambient placeholder rotation when the chat view goes
    /// away. Selection and message state are untouched.
    pub fn close_chat(&mut self) {
        self.placeholder.deactivate();
    }

    /// Declare the signed-in user's offer categories; allowed once
    pub fn complete_onboarding(
        &mut self,
        offers: Vec<String>,
    ) -> knot_registry::RegistryResult<()> {
        let user_id = self.current_user_id.clone();
        self.registry.complete_onboarding(&user_id, offers)
    }

    fn publish_selection(&self) {
        if let Some(id) = self.selector.active_id() {
            debug!(conversation_id = id, "conversation focused");
            let _ = self.events.send(SessionEvent::ConversationSelected {
                conversation_id: id.to_string(),
            });
        }
    }
}
