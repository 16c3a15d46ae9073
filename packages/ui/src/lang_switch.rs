use dioxus::prelude::*;

use crate::i18n::{localized_href, Lang};

/// Links to the same page in each supported language.
#[component]
pub fn LangSwitcher(path: String) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "lang_switch", "aria-label": crate::t(lang, "nav.language"),
            for option in Lang::ALL {
                a {
                    key: "{option.code()}",
                    class: if option == lang { "lang_link active" } else { "lang_link" },
                    href: localized_href(&path, option),
                    "hreflang": option.code(),
                    {crate::t(lang, &format!("lang.{}", option.code()))}
                }
            }
        }
    }
}
