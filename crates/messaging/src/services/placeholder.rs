//! Suggested-prompt text for the empty message input.
//!
//! The engine has two modes, chosen by the presence of a post context on
//! the active chat. With a context the prompt is pinned to a string
//! derived from the post title and nothing rotates. Without one the
//! prompt cycles through a greeting catalog on a fixed period until the
//! mode changes, the engine is deactivated, or the engine is dropped.
//! Rotation runs as a spawned Tokio task whose handle is aborted on every
//! mode exit, so no recurring callback can outlive its chat.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use knot_registry::Post;

/// Chooses the next catalog index during ambient rotation.
///
/// Injectable so tests can drive the rotation deterministically; the
/// production picker draws from the thread-local RNG, independent of the
/// previous pick (repeats allowed).
pub trait GreetingPicker: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random pick over the catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl GreetingPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Produces the prompt shown in the empty message input of the active
/// chat. Must live inside a Tokio runtime; entering ambient mode spawns
/// the rotation task.
pub struct PlaceholderEngine {
    catalog: Arc<Vec<String>>,
    period: Duration,
    picker: Arc<Mutex<Box<dyn GreetingPicker>>>,
    current: Arc<watch::Sender<String>>,
    rotation: Option<JoinHandle<()>>,
}

impl PlaceholderEngine {
    /// Create an engine over the given greeting catalog, rotating on the
    /// given period, with the production random picker
    pub fn new(catalog: Vec<String>, period: Duration) -> Self {
        Self::with_picker(catalog, period, Box::new(RandomPicker))
    }

    /// Create an engine with an injected picker
    pub fn with_picker(
        catalog: Vec<String>,
        period: Duration,
        picker: Box<dyn GreetingPicker>,
    ) -> Self {
        let initial = catalog.first().cloned().unwrap_or_default();
        let (current, _) = watch::channel(initial);
        Self {
            catalog: Arc::new(catalog),
            period,
            picker: Arc::new(Mutex::new(picker)),
            current: Arc::new(current),
            rotation: None,
        }
    }

    /// Current prompt text
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Watch the prompt for changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }

    /// Whether the ambient rotation task is running
    pub fn is_rotating(&self) -> bool {
        self.rotation.as_ref().map_or(false, |task| !task.is_finished())
    }

    /// Switch mode. A post context pins the prompt and stops any rotation
    /// in progress; clearing the context (re)starts ambient rotation from
    /// a fresh random pick rather than the top of the catalog.
    pub fn set_post_context(&mut self, post: Option<&Post>) {
        match post {
            Some(post) => {
                self.stop_rotation();
                let pinned = format!("Ask about '{}'...", post.title);
                let _ = self.current.send(pinned);
                debug!(post_id = %post.id, "placeholder pinned to post context");
            }
            None => self.start_rotation(),
        }
    }

    /// Stop rotation without touching the displayed prompt. Used when the
    /// chat view goes away.
    pub fn deactivate(&mut self) {
        self.stop_rotation();
    }

    fn start_rotation(&mut self) {
        self.stop_rotation();
        if self.catalog.is_empty() {
            return;
        }

        self.advance();

        let catalog = Arc::clone(&self.catalog);
        let picker = Arc::clone(&self.picker);
        let current = Arc::clone(&self.current);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick completes immediately; the fresh pick made
            // before spawning already covers it
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let index = picker
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pick(catalog.len());
                if let Some(greeting) = catalog.get(index) {
                    let _ = current.send(greeting.clone());
                }
            }
        });

        self.rotation = Some(task);
        debug!(period_ms = self.period.as_millis() as u64, "placeholder rotation started");
    }

    fn advance(&self) {
        let index = self
            .picker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pick(self.catalog.len());
        if let Some(greeting) = self.catalog.get(index) {
            let _ = self.current.send(greeting.clone());
        }
    }

    fn stop_rotation(&mut self) {
        if let Some(task) = self.rotation.take() {
            task.abort();
            debug!("placeholder rotation cancelled");
        }
    }
}

impl Drop for PlaceholderEngine {
    fn drop(&mut self) {
        self.stop_rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_secs(3);

    fn catalog() -> Vec<String> {
        vec![
            "Hello...".to_string(),
            "Hola...".to_string(),
            "Bonjour...".to_string(),
        ]
    }

    fn sample_post(title: &str) -> Post {
        Post::new("u2", title, "description", "Textbooks")
    }

    /// Replays a fixed index sequence, then repeats the last entry.
    struct ScriptedPicker {
        indices: Vec<usize>,
        position: usize,
    }

    impl ScriptedPicker {
        fn new(indices: Vec<usize>) -> Self {
            Self { indices, position: 0 }
        }
    }

    impl GreetingPicker for ScriptedPicker {
        fn pick(&mut self, len: usize) -> usize {
            let index = self
                .indices
                .get(self.position)
                .or_else(|| self.indices.last())
                .copied()
                .unwrap_or(0);
            self.position += 1;
            index % len
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ambient_mode_starts_with_a_fresh_pick() {
        let mut engine =
            PlaceholderEngine::with_picker(catalog(), PERIOD, Box::new(ScriptedPicker::new(vec![2])));

        assert_eq!(engine.current(), "Hello...");
        engine.set_post_context(None);

        assert_eq!(engine.current(), "Bonjour...");
        assert!(engine.is_rotating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ambient_mode_rotates_through_the_catalog() {
        let mut engine = PlaceholderEngine::with_picker(
            catalog(),
            PERIOD,
            Box::new(ScriptedPicker::new(vec![1, 0, 2])),
        );
        let mut rx = engine.subscribe();

        engine.set_post_context(None);
        assert_eq!(engine.current(), "Hola...");
        rx.mark_unchanged();

        timeout(Duration::from_secs(60), rx.changed())
            .await
            .expect("first rotation tick")
            .expect("sender alive");
        assert_eq!(rx.borrow_and_update().as_str(), "Hello...");

        timeout(Duration::from_secs(60), rx.changed())
            .await
            .expect("second rotation tick")
            .expect("sender alive");
        assert_eq!(rx.borrow_and_update().as_str(), "Bonjour...");
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_context_pins_and_stops_rotation() {
        let mut engine = PlaceholderEngine::with_picker(
            catalog(),
            PERIOD,
            Box::new(ScriptedPicker::new(vec![0, 1, 2])),
        );

        engine.set_post_context(None);
        assert!(engine.is_rotating());

        let post = sample_post("Physics workbook");
        engine.set_post_context(Some(&post));

        assert!(!engine.is_rotating());
        assert_eq!(engine.current(), "Ask about 'Physics workbook'...");

        // no tick may land after the mode switch
        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(engine.current(), "Ask about 'Physics workbook'...");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentering_ambient_mode_picks_fresh() {
        let mut engine = PlaceholderEngine::with_picker(
            catalog(),
            PERIOD,
            Box::new(ScriptedPicker::new(vec![1, 2])),
        );

        engine.set_post_context(None);
        assert_eq!(engine.current(), "Hola...");

        let post = sample_post("Physics workbook");
        engine.set_post_context(Some(&post));

        // the scripted picker's next entry arrives immediately, not after
        // a period, and not from catalog index 0
        engine.set_post_context(None);
        assert_eq!(engine.current(), "Bonjour...");
        assert!(engine.is_rotating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deactivate_cancels_rotation_and_keeps_the_prompt() {
        let mut engine =
            PlaceholderEngine::with_picker(catalog(), PERIOD, Box::new(ScriptedPicker::new(vec![1])));
        let mut rx = engine.subscribe();

        engine.set_post_context(None);
        rx.mark_unchanged();
        engine.deactivate();

        assert!(!engine.is_rotating());
        assert_eq!(engine.current(), "Hola...");

        // nothing may fire after deactivation
        let waited = timeout(Duration::from_secs(30), rx.changed()).await;
        assert!(waited.is_err(), "rotation kept running after deactivate");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_the_rotation_task() {
        let mut engine = PlaceholderEngine::new(catalog(), PERIOD);
        let mut rx = engine.subscribe();

        engine.set_post_context(None);
        rx.mark_unchanged();
        drop(engine);

        // the sender side disappears with the engine and its task; no
        // further value can ever be observed
        let outcome = timeout(Duration::from_secs(60), rx.changed()).await;
        match outcome {
            Ok(changed) => assert!(changed.is_err(), "a tick landed after drop"),
            Err(_elapsed) => {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_catalog_never_rotates() {
        let mut engine = PlaceholderEngine::new(Vec::new(), PERIOD);

        engine.set_post_context(None);

        assert!(!engine.is_rotating());
        assert_eq!(engine.current(), "");
    }
}
