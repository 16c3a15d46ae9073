use crate::config::{AppConfig, AppMode};
use crate::sink::{ConsoleContactSink, ContactSink, SimulatedContactSink};
use std::sync::{Arc, OnceLock};

/// Global application state containing all service implementations
pub struct AppState {
    pub contact: Arc<dyn ContactSink>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// Local mode prints contact messages to stdout; production mode uses the
    /// simulated sink with the configured delay.
    pub fn from_config(config: AppConfig) -> Self {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let contact: Arc<dyn ContactSink> = match config.mode {
            AppMode::Local => {
                tracing::info!("   Contact: Console (not sending)");
                Arc::new(ConsoleContactSink)
            }
            AppMode::Production => {
                tracing::info!(
                    "   Contact: Simulated ({} ms)",
                    config.contact.delay.as_millis()
                );
                Arc::new(SimulatedContactSink::new(config.contact.delay))
            }
        };

        Self { contact, config }
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return test_state;
        }

        STATE
            .get()
            .expect("AppState::global called before set_global")
            .clone()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
