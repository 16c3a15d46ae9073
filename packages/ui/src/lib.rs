//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod clinic;
pub use clinic::{ClinicInfo, Services};

mod contact;
pub use contact::{
    submitter_or_default, ContactForm, ContactFormState, ContactSubmitter, ServerSubmitter,
    SharedSubmitter, SubmitRejected, SubmitStatus,
};

mod whatsapp;
pub use whatsapp::{deep_link, ChatState, FloatingWhatsApp, DEFAULT_PHONE, GREETING, REVEAL_DELAY};

mod lang_switch;
pub use lang_switch::LangSwitcher;

mod theme;
pub use theme::ClinicTheme;

mod i18n;
pub use i18n::{
    direction, embedded, is_rtl, localized_href, query_param, resolve_lang, resolve_lang_from_url,
    t, use_lang, Direction, I18nProvider, Lang, Node, TranslationSet, LANG_PARAM,
};
