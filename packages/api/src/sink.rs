use crate::types::ContactMessage;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

fn message_label(message: &ContactMessage) -> String {
    format!(
        "name_len={} phone_len={} email_len={} message_len={}",
        message.name.len(),
        message.phone.len(),
        message.email.len(),
        message.message.len()
    )
}

/// Where accepted contact messages end up.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<()>;
}

/// Stand-in for a mail/CRM backend: waits, then reports success.
pub struct SimulatedContactSink {
    delay: Duration,
}

impl SimulatedContactSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContactSink for SimulatedContactSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        debug!(
            "contact.simulated.deliver: {} delay_ms={}",
            message_label(message),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        info!("contact.simulated.deliver: accepted");
        Ok(())
    }
}

/// Local development sink that prints the message instead of sending it.
pub struct ConsoleContactSink;

#[async_trait]
impl ContactSink for ConsoleContactSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        println!("\n📨 CONTACT (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Name: {}", message.name);
        println!("Phone: {}", message.phone);
        if !message.email.is_empty() {
            println!("Email: {}", message.email);
        }
        println!("────────────────────────────────");
        println!("{}", message.message);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        Ok(())
    }
}
