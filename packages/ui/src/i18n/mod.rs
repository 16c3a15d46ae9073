use dioxus::logger::tracing;
use dioxus::prelude::*;

mod locale;
mod tree;

pub use locale::{
    direction, is_rtl, localized_href, query_param, resolve_lang, resolve_lang_from_url,
    Direction, LANG_PARAM,
};
pub use tree::{embedded, Node, TranslationSet};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Fr,
    Ar,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::Fr;
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::Ar => "ar",
        }
    }

    /// Interpret the raw `lang` query value: exactly `"ar"` is Arabic, anything else French.
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            Some("ar") => Lang::Ar,
            _ => Lang::DEFAULT,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree and set `dir`/`lang` on its root.
#[component]
pub fn I18nProvider(lang: Lang, children: Element) -> Element {
    let mut current = use_signal(|| lang);
    use_context_provider(|| current);
    use_effect(use_reactive!(|lang| current.set(lang)));

    rsx! {
        div {
            class: "locale_root",
            dir: direction(lang).as_str(),
            lang: lang.code(),
            {children}
        }
    }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::DEFAULT)
}

/// Translate a dotted key for a given language. Falls back to French, then to the key.
pub fn t(lang: Lang, key: &str) -> String {
    embedded().lookup(lang, key)
}
