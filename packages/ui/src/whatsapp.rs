use std::time::Duration;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::i18n::direction;

const WHATSAPP_CSS: Asset = asset!("/assets/styling/whatsapp.css");

/// Clinic number used when no other is given, in international form without `+`.
pub const DEFAULT_PHONE: &str = "213560055803";

/// Opening line of every message sent from the site.
pub const GREETING: &str = "Bonjour, je vous contacte depuis le site web de la Clinique Audin.\n\n";

/// How long after mount the floating button appears.
pub const REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// `https://wa.me` link that opens a chat with `phone`, pre-filled with `text`.
pub fn deep_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(text))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub visible: bool,
    pub open: bool,
    pub draft: String,
}

impl ChatState {
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Turn the draft into a chat link, then clear it and close the panel.
    ///
    /// A blank draft changes nothing and yields no link.
    pub fn send(&mut self, phone: &str) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let url = deep_link(phone, &format!("{GREETING}{}", self.draft));
        self.draft.clear();
        self.open = false;
        Some(url)
    }
}

/// Script that opens `url` in a new tab.
fn open_script(url: &str) -> String {
    let quoted = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.open({quoted}, '_blank'); return '';")
}

async fn open_in_new_tab(url: String) {
    if let Err(e) = document::eval(&open_script(&url)).await {
        tracing::warn!("whatsapp: failed to open chat link: {e}");
    }
}

fn send_draft(mut chat: Signal<ChatState>, phone: &str) {
    let sent = chat.write().send(phone);
    if let Some(url) = sent {
        spawn(open_in_new_tab(url));
    }
}

#[component]
pub fn FloatingWhatsApp(#[props(default = DEFAULT_PHONE.to_string())] phone_number: String) -> Element {
    let lang = crate::use_lang()();
    let mut chat = use_signal(ChatState::default);

    use_effect(move || {
        spawn(async move {
            gloo_timers::future::sleep(REVEAL_DELAY).await;
            chat.write().reveal();
        });
    });

    let state = chat();
    if !state.visible {
        return rsx! {};
    }

    let phone_click = phone_number.clone();
    let phone_enter = phone_number;

    rsx! {
        document::Link { rel: "stylesheet", href: WHATSAPP_CSS }
        div { class: "wa_float", dir: direction(lang).as_str(),
            if state.open {
                div { class: "wa_panel",
                    div { class: "wa_header",
                        div { class: "wa_identity",
                            span { class: "wa_avatar", "💬" }
                            div {
                                p { class: "wa_name", {crate::t(lang, "site.name")} }
                                p { class: "wa_status", {crate::t(lang, "whatsapp.online")} }
                            }
                        }
                        button {
                            class: "wa_close",
                            "aria-label": crate::t(lang, "whatsapp.close"),
                            onclick: move |_| chat.write().close(),
                            "×"
                        }
                    }
                    div { class: "wa_body",
                        div { class: "wa_bubble",
                            p { {crate::t(lang, "whatsapp.greeting")} }
                            span { class: "wa_bubble_from", {crate::t(lang, "site.name")} }
                        }
                    }
                    div { class: "wa_input_row",
                        input {
                            r#type: "text",
                            class: "wa_input",
                            value: "{state.draft}",
                            placeholder: crate::t(lang, "whatsapp.placeholder"),
                            oninput: move |e| chat.write().set_draft(e.value()),
                            onkeydown: move |e: KeyboardEvent| {
                                if e.key() == Key::Enter {
                                    send_draft(chat, &phone_enter);
                                }
                            },
                        }
                        button {
                            class: "wa_send",
                            "aria-label": crate::t(lang, "whatsapp.send"),
                            onclick: move |_| send_draft(chat, &phone_click),
                            "➤"
                        }
                    }
                }
            }
            button {
                class: if state.open { "wa_toggle open" } else { "wa_toggle" },
                "aria-label": crate::t(lang, "whatsapp.open"),
                onclick: move |_| chat.write().toggle(),
                if state.open { "×" } else { "💬" }
            }
        }
    }
}
