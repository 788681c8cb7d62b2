//! Snackbar notifications
//!
//! A single snackbar slot: showing a new message replaces the current one,
//! and each message dismisses itself after its duration.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, warn};

/// Default time a snackbar stays on screen
pub const DEFAULT_SNACKBAR_DURATION_MS: u64 = 3000;

/// Callback run when the snackbar's action button is pressed
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnackbarConfig {
    pub default_duration_ms: u64,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_SNACKBAR_DURATION_MS,
        }
    }
}

/// What to show in the snackbar
#[derive(Clone, Default)]
pub struct SnackbarOptions {
    pub message: String,
    /// Label for an optional action button
    pub action_label: Option<String>,
    /// Overrides the provider's default duration
    pub duration_ms: Option<u64>,
    pub on_action: Option<ActionCallback>,
}

impl SnackbarOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_action(
        mut self,
        label: impl Into<String>,
        on_action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.action_label = Some(label.into());
        self.on_action = Some(Arc::new(on_action));
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

impl fmt::Debug for SnackbarOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackbarOptions")
            .field("message", &self.message)
            .field("action_label", &self.action_label)
            .field("duration_ms", &self.duration_ms)
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

#[derive(Default)]
struct SnackbarState {
    visible: bool,
    options: SnackbarOptions,
    /// Bumped on every show so stale dismiss timers can tell they lost
    generation: u64,
}

/// Handle to the snackbar slot; clones share the same slot
#[derive(Clone)]
pub struct SnackbarHandle {
    state: Arc<Mutex<SnackbarState>>,
    config: SnackbarConfig,
}

impl SnackbarHandle {
    pub fn new(config: SnackbarConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SnackbarState::default())),
            config,
        }
    }

    /// Show `options`, replacing whatever is currently visible.
    ///
    /// Auto-dismiss needs a tokio runtime; without one the snackbar stays
    /// until hidden.
    pub fn show(&self, options: SnackbarOptions) {
        let duration =
            Duration::from_millis(options.duration_ms.unwrap_or(self.config.default_duration_ms));

        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.visible = true;
            state.options = options;
            debug!("Showing snackbar: {}", state.options.message);
            state.generation
        };

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let state = Arc::downgrade(&self.state);
                runtime.spawn(dismiss_after(state, generation, duration));
            }
            Err(_) => warn!("No tokio runtime; snackbar will not auto-dismiss"),
        }
    }

    pub fn hide(&self) {
        let mut state = self.state.lock();
        if state.visible {
            debug!("Hiding snackbar");
            state.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    /// Options of the visible snackbar, if any
    pub fn current(&self) -> Option<SnackbarOptions> {
        let state = self.state.lock();
        state.visible.then(|| state.options.clone())
    }

    /// Press the action button: run its callback, then hide.
    ///
    /// Returns false when no snackbar is visible.
    pub fn press_action(&self) -> bool {
        let callback = {
            let state = self.state.lock();
            if !state.visible {
                return false;
            }
            state.options.on_action.clone()
        };

        if let Some(callback) = callback {
            callback();
        }
        self.hide();
        true
    }
}

impl Default for SnackbarHandle {
    fn default() -> Self {
        Self::new(SnackbarConfig::default())
    }
}

async fn dismiss_after(state: Weak<Mutex<SnackbarState>>, generation: u64, duration: Duration) {
    tokio::time::sleep(duration).await;

    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock();
    if state.generation == generation && state.visible {
        debug!("Snackbar dismissed after {:?}", duration);
        state.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_show_and_hide() {
        let snackbar = SnackbarHandle::default();
        assert!(!snackbar.is_visible());
        assert!(snackbar.current().is_none());

        snackbar.show(SnackbarOptions::new("Hello"));
        assert!(snackbar.is_visible());
        assert_eq!(snackbar.current().unwrap().message, "Hello");

        snackbar.hide();
        assert!(!snackbar.is_visible());
        assert!(snackbar.current().is_none());
    }

    #[tokio::test]
    async fn test_press_action_runs_callback_then_hides() {
        let pressed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pressed);

        let snackbar = SnackbarHandle::default();
        snackbar.show(SnackbarOptions::new("Saved").with_action("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(snackbar.current().unwrap().action_label.as_deref(), Some("Undo"));
        assert!(snackbar.press_action());
        assert_eq!(pressed.load(Ordering::SeqCst), 1);
        assert!(!snackbar.is_visible());

        assert!(!snackbar.press_action());
        assert_eq!(pressed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_default_duration() {
        let snackbar = SnackbarHandle::default();
        snackbar.show(SnackbarOptions::new("Hello"));

        sleep(Duration::from_millis(2990)).await;
        assert!(snackbar.is_visible());

        sleep(Duration::from_millis(20)).await;
        assert!(!snackbar.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_show_supersedes_dismiss_timer() {
        let snackbar = SnackbarHandle::new(SnackbarConfig {
            default_duration_ms: 1000,
        });
        snackbar.show(SnackbarOptions::new("first"));

        sleep(Duration::from_millis(800)).await;
        snackbar.show(SnackbarOptions::new("second").with_duration_ms(500));

        // the first timer fires at 1000ms but must not hide "second"
        sleep(Duration::from_millis(250)).await;
        assert_eq!(snackbar.current().unwrap().message, "second");

        sleep(Duration::from_millis(300)).await;
        assert!(!snackbar.is_visible());
    }

    #[test]
    fn test_show_without_runtime_stays_visible() {
        let snackbar = SnackbarHandle::default();
        snackbar.show(SnackbarOptions::new("no runtime"));
        assert!(snackbar.is_visible());
    }
}
