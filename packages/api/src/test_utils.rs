use crate::config::{AppConfig, AppMode, ContactConfig};
use crate::sink::ContactSink;
use crate::state::{AppState, TEST_STATE};
use crate::types::ContactMessage;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Sink that keeps every delivered message in memory, optionally failing.
#[derive(Default)]
pub struct RecordingContactSink {
    delivered: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl RecordingContactSink {
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn delivered(&self) -> Vec<ContactMessage> {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl ContactSink for RecordingContactSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        if self.fail {
            anyhow::bail!("recording sink configured to fail");
        }
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());
        Ok(())
    }
}

/// Installs an [`AppState`] for the current thread and removes it on drop.
pub struct TestContext {
    pub sink: Arc<RecordingContactSink>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_sink(RecordingContactSink::default())
    }

    pub fn with_sink(sink: RecordingContactSink) -> Self {
        let sink = Arc::new(sink);
        let state = Arc::new(AppState {
            contact: sink.clone(),
            config: AppConfig {
                mode: AppMode::Local,
                contact: ContactConfig::default(),
            },
        });
        TEST_STATE.with(|s| *s.borrow_mut() = Some(state.clone()));
        Self { sink, state }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        TEST_STATE.with(|s| *s.borrow_mut() = None);
    }
}
