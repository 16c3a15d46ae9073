use crate::types::ContactMessage;
use dioxus::prelude::*;

/// Accept a contact request from the site form.
#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact(message: ContactMessage) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = message;
        Err(ServerFnError::new("submit_contact is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!(
            "submit_contact: name_len={} message_len={}",
            message.name.len(),
            message.message.len()
        );

        if let Err(missing) = message.validate() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            tracing::info!("submit_contact: rejected, missing {}", names.join(", "));
            return Err(ServerFnError::new(format!(
                "missing required fields: {}",
                names.join(", ")
            )));
        }

        let state = crate::state::AppState::global();
        state.contact.deliver(&message).await.map_err(|e| {
            tracing::warn!("submit_contact: delivery failed: {e}");
            ServerFnError::new(e.to_string())
        })
    }
}
