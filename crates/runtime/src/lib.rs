use anyhow::{anyhow, Result};
use tracing::info;

use knot_config::AppConfig;
use knot_messaging::{ChatSession, ConversationStore, PlaceholderEngine};

pub mod seed;

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::INFO)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// The wired-up client session for one run of the app.
pub struct SessionServices {
    pub session: ChatSession,
}

impl SessionServices {
    /// Build a session over the stock demo data set, signed in as the
    /// first seeded user.
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let registry = seed::registry();
        for user in registry.users() {
            user.validate()
                .map_err(|message| anyhow!("invalid seed user: {message}"))?;
        }
        for post in registry.posts() {
            post.validate()
                .map_err(|message| anyhow!("invalid seed post: {message}"))?;
        }

        let conversations = seed::conversations();
        for conversation in &conversations {
            conversation
                .validate()
                .map_err(|message| anyhow!("invalid seed conversation: {message}"))?;
        }
        let store = ConversationStore::with_conversations(conversations);

        let engine = PlaceholderEngine::new(
            config.placeholder.greetings.clone(),
            config.placeholder.rotation_interval(),
        );

        let session = ChatSession::new(registry, store, engine, seed::CURRENT_USER);

        info!(
            user_id = session.current_user_id(),
            conversations = session.conversations().len(),
            posts = session.registry().posts().len(),
            "session ready"
        );

        Ok(Self { session })
    }
}
